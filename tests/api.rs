//! End-to-end tests over the in-memory store.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pokedex_api::{app, AppState, MemoryStore};
use serde_json::{json, Value};
use tower::ServiceExt;

struct Reply {
    status: StatusCode,
    location: Option<String>,
    body: Value,
}

fn test_app() -> Router {
    app(AppState::new(MemoryStore::new()), 1024 * 1024)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Reply {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    Reply { status, location, body }
}

async fn get(app: &Router, uri: &str) -> Reply {
    send(app, "GET", uri, None).await
}

fn error_code(reply: &Reply) -> &str {
    reply.body["error"]["code"].as_str().unwrap_or_default()
}

fn id_of(reply: &Reply) -> i64 {
    reply.body["data"]["id"].as_i64().unwrap()
}

/// Country, owner and category every pokemon test needs. Returns (owner_id, category_id).
async fn seed(app: &Router) -> (i64, i64) {
    let country = send(app, "POST", "/api/country", Some(json!({"name": "Kanto"}))).await;
    assert_eq!(country.status, StatusCode::CREATED);
    let owner = send(
        app,
        "POST",
        &format!("/api/owner?countryId={}", id_of(&country)),
        Some(json!({"firstName": "Ash", "lastName": "Ketchum"})),
    )
    .await;
    assert_eq!(owner.status, StatusCode::CREATED);
    let category = send(app, "POST", "/api/category", Some(json!({"name": "Electric"}))).await;
    assert_eq!(category.status, StatusCode::CREATED);
    (id_of(&owner), id_of(&category))
}

async fn create_pokemon(app: &Router, owner_id: i64, category_id: i64, name: &str) -> Reply {
    send(
        app,
        "POST",
        &format!("/api/pokemon?ownerId={}&categoryId={}", owner_id, category_id),
        Some(json!({"name": name, "birthDate": "1996-02-27"})),
    )
    .await
}

async fn create_reviewer(app: &Router) -> i64 {
    let reply = send(
        app,
        "POST",
        "/api/reviewer",
        Some(json!({"firstName": "Samuel", "lastName": "Oak"})),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED);
    id_of(&reply)
}

async fn create_review(app: &Router, reviewer_id: i64, pokemon_id: i64, rating: i64) -> Reply {
    send(
        app,
        "POST",
        &format!("/api/review?reviewerId={}&pokemonId={}", reviewer_id, pokemon_id),
        Some(json!({"title": "Field notes", "text": "Strong and loyal", "rating": rating})),
    )
    .await
}

#[tokio::test]
async fn category_create_then_get_round_trips() {
    let app = test_app();
    let created = send(&app, "POST", "/api/category", Some(json!({"name": "Fire"}))).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = id_of(&created);
    assert_eq!(created.location.as_deref(), Some(format!("/api/category/{}", id).as_str()));

    let fetched = get(&app, &format!("/api/category/{}", id)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"], json!({"id": id, "name": "Fire"}));

    let list = get(&app, "/api/category").await;
    assert_eq!(list.body["meta"]["count"], 1);
}

#[tokio::test]
async fn duplicate_names_are_rejected_case_insensitively() {
    let app = test_app();
    assert_eq!(
        send(&app, "POST", "/api/category", Some(json!({"name": "Water"}))).await.status,
        StatusCode::CREATED
    );
    let dup = send(&app, "POST", "/api/category", Some(json!({"name": "  wATER "}))).await;
    assert_eq!(dup.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&dup), "validation_error");

    send(&app, "POST", "/api/country", Some(json!({"name": "Johto"}))).await;
    let dup = send(&app, "POST", "/api/country", Some(json!({"name": "JOHTO"}))).await;
    assert_eq!(dup.status, StatusCode::BAD_REQUEST);
    assert_eq!(get(&app, "/api/country").await.body["meta"]["count"], 1);
}

#[tokio::test]
async fn pokemon_with_unknown_owner_or_category_writes_nothing() {
    let app = test_app();
    let (owner_id, category_id) = seed(&app).await;

    let bad_owner = create_pokemon(&app, 999, category_id, "Pikachu").await;
    assert_eq!(bad_owner.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&bad_owner), "validation_error");

    let bad_category = create_pokemon(&app, owner_id, 999, "Pikachu").await;
    assert_eq!(bad_category.status, StatusCode::BAD_REQUEST);

    let missing_param = send(
        &app,
        "POST",
        &format!("/api/pokemon?ownerId={}", owner_id),
        Some(json!({"name": "Pikachu", "birthDate": "1996-02-27"})),
    )
    .await;
    assert_eq!(error_code(&missing_param), "bad_request");

    assert_eq!(get(&app, "/api/pokemon").await.body["meta"]["count"], 0);
}

#[tokio::test]
async fn pokemon_is_linked_to_owner_and_category() {
    let app = test_app();
    let (owner_id, category_id) = seed(&app).await;
    let created = create_pokemon(&app, owner_id, category_id, "Pikachu").await;
    assert_eq!(created.status, StatusCode::CREATED);
    let pokemon_id = id_of(&created);
    assert_eq!(created.body["data"]["birthDate"], "1996-02-27");

    let by_owner = get(&app, &format!("/api/owner/{}/pokemon", owner_id)).await;
    assert_eq!(by_owner.body["data"][0]["name"], "Pikachu");
    let by_category = get(&app, &format!("/api/category/pokemon/{}", category_id)).await;
    assert_eq!(by_category.body["meta"]["count"], 1);
    let owners = get(&app, &format!("/api/owner/pokemon/{}", pokemon_id)).await;
    assert_eq!(owners.body["data"][0]["lastName"], "Ketchum");

    let dup = create_pokemon(&app, owner_id, category_id, " Pikachu").await;
    assert_eq!(dup.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rating_is_zero_without_reviews_and_the_mean_otherwise() {
    let app = test_app();
    let (owner_id, category_id) = seed(&app).await;
    let pikachu = id_of(&create_pokemon(&app, owner_id, category_id, "Pikachu").await);
    let raichu = id_of(&create_pokemon(&app, owner_id, category_id, "Raichu").await);
    let reviewer = create_reviewer(&app).await;

    let rating = get(&app, &format!("/api/pokemon/{}/rating", pikachu)).await;
    assert_eq!(rating.status, StatusCode::OK);
    assert_eq!(rating.body["data"].as_f64(), Some(0.0));

    create_review(&app, reviewer, pikachu, 4).await;
    create_review(&app, reviewer, pikachu, 5).await;
    create_review(&app, reviewer, raichu, 1).await;

    let rating = get(&app, &format!("/api/pokemon/{}/rating", pikachu)).await;
    assert_eq!(rating.body["data"].as_f64(), Some(4.5));

    let missing = get(&app, "/api/pokemon/999/rating").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_pokemon_removes_its_reviews_first() {
    let app = test_app();
    let (owner_id, category_id) = seed(&app).await;
    let pikachu = id_of(&create_pokemon(&app, owner_id, category_id, "Pikachu").await);
    let eevee = id_of(&create_pokemon(&app, owner_id, category_id, "Eevee").await);
    let reviewer = create_reviewer(&app).await;
    create_review(&app, reviewer, pikachu, 5).await;
    create_review(&app, reviewer, pikachu, 3).await;
    let kept = id_of(&create_review(&app, reviewer, eevee, 4).await);

    let deleted = send(&app, "DELETE", &format!("/api/pokemon/{}", pikachu), None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    assert_eq!(get(&app, &format!("/api/pokemon/{}", pikachu)).await.status, StatusCode::NOT_FOUND);
    let reviews = get(&app, "/api/review").await;
    assert_eq!(reviews.body["meta"]["count"], 1);
    assert_eq!(reviews.body["data"][0]["id"], kept);
    let by_owner = get(&app, &format!("/api/owner/{}/pokemon", owner_id)).await;
    assert_eq!(by_owner.body["meta"]["count"], 1);
}

#[tokio::test]
async fn deleting_a_pokemon_without_reviews_succeeds() {
    let app = test_app();
    let (owner_id, category_id) = seed(&app).await;
    let id = id_of(&create_pokemon(&app, owner_id, category_id, "Mew").await);
    let deleted = send(&app, "DELETE", &format!("/api/pokemon/{}", id), None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    let again = send(&app, "DELETE", &format!("/api/pokemon/{}", id), None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_mismatched_id_changes_nothing() {
    let app = test_app();
    let created = send(&app, "POST", "/api/category", Some(json!({"name": "Grass"}))).await;
    let id = id_of(&created);

    let mismatch = send(
        &app,
        "PUT",
        &format!("/api/category/{}", id),
        Some(json!({"id": id + 1, "name": "Poison"})),
    )
    .await;
    assert_eq!(mismatch.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&mismatch), "validation_error");
    assert_eq!(get(&app, &format!("/api/category/{}", id)).await.body["data"]["name"], "Grass");

    let ok = send(
        &app,
        "PUT",
        &format!("/api/category/{}", id),
        Some(json!({"id": id, "name": "Poison"})),
    )
    .await;
    assert_eq!(ok.status, StatusCode::NO_CONTENT);
    assert_eq!(get(&app, &format!("/api/category/{}", id)).await.body["data"]["name"], "Poison");

    let missing = send(&app, "PUT", "/api/category/77", Some(json!({"id": 77, "name": "Bug"}))).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_requests_are_bad_requests() {
    let app = test_app();
    let bad_id = get(&app, "/api/pokemon/pikachu").await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&bad_id), "bad_request");

    let null_body = send(&app, "POST", "/api/category", Some(Value::Null)).await;
    assert_eq!(null_body.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&null_body), "bad_request");

    let blank = send(&app, "POST", "/api/reviewer", Some(json!({"firstName": " ", "lastName": "Oak"}))).await;
    assert_eq!(error_code(&blank), "validation_error");

    let missing = get(&app, "/api/owner/12").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&missing), "not_found");
}

#[tokio::test]
async fn owners_belong_to_a_country() {
    let app = test_app();
    let country = id_of(&send(&app, "POST", "/api/country", Some(json!({"name": "Hoenn"}))).await);

    let created = send(
        &app,
        "POST",
        &format!("/api/owner/create/country/{}", country),
        Some(json!({"firstName": "May", "lastName": "Maple", "gym": "Petalburg"})),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let owner = id_of(&created);

    let of_owner = get(&app, &format!("/api/country/owners/{}", owner)).await;
    assert_eq!(of_owner.body["data"]["name"], "Hoenn");
    let owners = get(&app, &format!("/api/country/{}/owners", country)).await;
    assert_eq!(owners.body["data"][0]["gym"], "Petalburg");

    let dup = send(
        &app,
        "POST",
        &format!("/api/owner?countryId={}", country),
        Some(json!({"firstName": "Norman", "lastName": "maple"})),
    )
    .await;
    assert_eq!(dup.status, StatusCode::BAD_REQUEST);

    let no_country = send(
        &app,
        "POST",
        "/api/owner?countryId=404",
        Some(json!({"firstName": "Brock", "lastName": "Harrison"})),
    )
    .await;
    assert_eq!(error_code(&no_country), "validation_error");

    let updated = send(
        &app,
        "PUT",
        &format!("/api/owner/{}", owner),
        Some(json!({"id": owner, "firstName": "May", "lastName": "Birch"})),
    )
    .await;
    assert_eq!(updated.status, StatusCode::NO_CONTENT);
    let of_owner = get(&app, &format!("/api/country/owners/{}", owner)).await;
    assert_eq!(of_owner.body["data"]["name"], "Hoenn");
}

#[tokio::test]
async fn reviewer_detail_includes_reviews() {
    let app = test_app();
    let (owner_id, category_id) = seed(&app).await;
    let pokemon = id_of(&create_pokemon(&app, owner_id, category_id, "Bulbasaur").await);
    let reviewer = create_reviewer(&app).await;
    let review = id_of(&create_review(&app, reviewer, pokemon, 2).await);

    let detail = get(&app, &format!("/api/reviewer/{}", reviewer)).await;
    assert_eq!(detail.body["data"]["lastName"], "Oak");
    assert_eq!(detail.body["data"]["reviews"][0]["rating"], 2);

    let list = get(&app, "/api/reviewer").await;
    assert!(list.body["data"][0].get("reviews").is_none());

    let edited = send(
        &app,
        "PUT",
        &format!("/api/review/{}", review),
        Some(json!({"id": review, "title": "Revisited", "text": "Grew on me", "rating": 4})),
    )
    .await;
    assert_eq!(edited.status, StatusCode::NO_CONTENT);
    let for_pokemon = get(&app, &format!("/api/review/pokemon/{}", pokemon)).await;
    assert_eq!(for_pokemon.body["data"][0]["title"], "Revisited");
    let from_reviewer = get(&app, &format!("/api/review/reviewer/{}", reviewer)).await;
    assert_eq!(from_reviewer.body["meta"]["count"], 1);
}

#[tokio::test]
async fn referenced_reviewer_and_country_cannot_be_deleted() {
    let app = test_app();
    let (owner_id, category_id) = seed(&app).await;
    let pokemon = id_of(&create_pokemon(&app, owner_id, category_id, "Onix").await);
    let reviewer = create_reviewer(&app).await;
    let review = id_of(&create_review(&app, reviewer, pokemon, 3).await);

    let blocked = send(&app, "DELETE", &format!("/api/reviewer/{}", reviewer), None).await;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&blocked), "validation_error");
    assert_eq!(get(&app, &format!("/api/reviewer/{}", reviewer)).await.status, StatusCode::OK);

    let country = get(&app, &format!("/api/country/owners/{}", owner_id)).await;
    let country_id = id_of(&country);
    let blocked = send(&app, "DELETE", &format!("/api/country/{}", country_id), None).await;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&blocked), "validation_error");
    assert_eq!(get(&app, &format!("/api/country/{}", country_id)).await.status, StatusCode::OK);

    // Once the dependents are gone the deletes go through.
    send(&app, "DELETE", &format!("/api/review/{}", review), None).await;
    let deleted = send(&app, "DELETE", &format!("/api/reviewer/{}", reviewer), None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    send(&app, "DELETE", &format!("/api/owner/{}", owner_id), None).await;
    let deleted = send(&app, "DELETE", &format!("/api/country/{}", country_id), None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn pokemon_update_links_new_owner_and_category() {
    let app = test_app();
    let (owner_id, category_id) = seed(&app).await;
    let pokemon = id_of(&create_pokemon(&app, owner_id, category_id, "Squirtle").await);
    let country = id_of(&get(&app, &format!("/api/country/owners/{}", owner_id)).await);
    let misty = id_of(
        &send(
            &app,
            "POST",
            &format!("/api/owner?countryId={}", country),
            Some(json!({"firstName": "Misty", "lastName": "Waterflower"})),
        )
        .await,
    );
    let water = id_of(&send(&app, "POST", "/api/category", Some(json!({"name": "Water"}))).await);

    let updated = send(
        &app,
        "PUT",
        &format!("/api/pokemon/{}?ownerId={}&categoryId={}", pokemon, misty, water),
        Some(json!({"id": pokemon, "name": "Wartortle", "birthDate": "1997-03-01"})),
    )
    .await;
    assert_eq!(updated.status, StatusCode::NO_CONTENT);

    let fetched = get(&app, &format!("/api/pokemon/{}", pokemon)).await;
    assert_eq!(
        fetched.body["data"],
        json!({"id": pokemon, "name": "Wartortle", "birthDate": "1997-03-01"})
    );
    let by_misty = get(&app, &format!("/api/owner/{}/pokemon", misty)).await;
    assert_eq!(by_misty.body["data"][0]["id"], pokemon);
    let in_water = get(&app, &format!("/api/category/pokemon/{}", water)).await;
    assert_eq!(in_water.body["meta"]["count"], 1);
    // Earlier links stay in place.
    let owners = get(&app, &format!("/api/owner/pokemon/{}", pokemon)).await;
    assert_eq!(owners.body["meta"]["count"], 2);

    // Repeating the update does not duplicate links.
    send(
        &app,
        "PUT",
        &format!("/api/pokemon/{}?ownerId={}&categoryId={}", pokemon, misty, water),
        Some(json!({"id": pokemon, "name": "Wartortle", "birthDate": "1997-03-01"})),
    )
    .await;
    let owners = get(&app, &format!("/api/owner/pokemon/{}", pokemon)).await;
    assert_eq!(owners.body["meta"]["count"], 2);
}

#[tokio::test]
async fn pokemon_update_rejects_missing_targets() {
    let app = test_app();
    let (owner_id, category_id) = seed(&app).await;
    let pokemon = id_of(&create_pokemon(&app, owner_id, category_id, "Psyduck").await);
    let body = |id: i64| json!({"id": id, "name": "Golduck", "birthDate": "1997-03-01"});

    let missing = send(
        &app,
        "PUT",
        &format!("/api/pokemon/500?ownerId={}&categoryId={}", owner_id, category_id),
        Some(body(500)),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let bad_owner = send(
        &app,
        "PUT",
        &format!("/api/pokemon/{}?ownerId=500&categoryId={}", pokemon, category_id),
        Some(body(pokemon)),
    )
    .await;
    assert_eq!(bad_owner.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&bad_owner), "validation_error");

    let bad_category = send(
        &app,
        "PUT",
        &format!("/api/pokemon/{}?ownerId={}&categoryId=500", pokemon, owner_id),
        Some(body(pokemon)),
    )
    .await;
    assert_eq!(bad_category.status, StatusCode::BAD_REQUEST);

    let mismatch = send(
        &app,
        "PUT",
        &format!("/api/pokemon/{}?ownerId={}&categoryId={}", pokemon, owner_id, category_id),
        Some(body(pokemon + 1)),
    )
    .await;
    assert_eq!(mismatch.status, StatusCode::BAD_REQUEST);

    let fetched = get(&app, &format!("/api/pokemon/{}", pokemon)).await;
    assert_eq!(fetched.body["data"]["name"], "Psyduck");
}

#[tokio::test]
async fn created_resources_read_back_by_id() {
    let app = test_app();
    let country = send(&app, "POST", "/api/country", Some(json!({"name": "Sinnoh"}))).await;
    let country_id = id_of(&country);
    assert_eq!(country.location.as_deref(), Some(format!("/api/country/{}", country_id).as_str()));
    assert_eq!(
        get(&app, &format!("/api/country/{}", country_id)).await.body["data"],
        json!({"id": country_id, "name": "Sinnoh"})
    );

    let owner = send(
        &app,
        "POST",
        &format!("/api/owner?countryId={}", country_id),
        Some(json!({"firstName": "Dawn", "lastName": "Berlitz", "gym": "Twinleaf"})),
    )
    .await;
    let owner_id = id_of(&owner);
    assert_eq!(
        get(&app, &format!("/api/owner/{}", owner_id)).await.body["data"],
        json!({"id": owner_id, "firstName": "Dawn", "lastName": "Berlitz", "gym": "Twinleaf"})
    );

    let category = id_of(&send(&app, "POST", "/api/category", Some(json!({"name": "Ice"}))).await);
    let pokemon = create_pokemon(&app, owner_id, category, "Piplup").await;
    let pokemon_id = id_of(&pokemon);
    assert_eq!(pokemon.location.as_deref(), Some(format!("/api/pokemon/{}", pokemon_id).as_str()));
    assert_eq!(
        get(&app, &format!("/api/pokemon/{}", pokemon_id)).await.body["data"],
        json!({"id": pokemon_id, "name": "Piplup", "birthDate": "1996-02-27"})
    );

    let reviewer_id = create_reviewer(&app).await;
    assert_eq!(
        get(&app, &format!("/api/reviewer/{}", reviewer_id)).await.body["data"],
        json!({"id": reviewer_id, "firstName": "Samuel", "lastName": "Oak", "reviews": []})
    );

    let review_id = id_of(&create_review(&app, reviewer_id, pokemon_id, 5).await);
    assert_eq!(
        get(&app, &format!("/api/review/{}", review_id)).await.body["data"],
        json!({"id": review_id, "title": "Field notes", "text": "Strong and loyal", "rating": 5})
    );
}

#[tokio::test]
async fn deleted_resources_are_gone() {
    let app = test_app();
    let (owner_id, category_id) = seed(&app).await;
    let pokemon = id_of(&create_pokemon(&app, owner_id, category_id, "Geodude").await);
    let reviewer = create_reviewer(&app).await;
    let review = id_of(&create_review(&app, reviewer, pokemon, 4).await);
    let country = id_of(&get(&app, &format!("/api/country/owners/{}", owner_id)).await);

    let order = [
        format!("/api/review/{}", review),
        format!("/api/reviewer/{}", reviewer),
        format!("/api/category/{}", category_id),
        format!("/api/owner/{}", owner_id),
        format!("/api/country/{}", country),
    ];
    for uri in &order {
        let deleted = send(&app, "DELETE", uri, None).await;
        assert_eq!(deleted.status, StatusCode::NO_CONTENT, "DELETE {}", uri);
        let after = get(&app, uri).await;
        assert_eq!(after.status, StatusCode::NOT_FOUND, "GET {}", uri);
        assert_eq!(error_code(&after), "not_found");
    }

    // The pokemon survives, without its former owner and category links.
    assert_eq!(get(&app, &format!("/api/pokemon/{}", pokemon)).await.status, StatusCode::OK);
    let owners = get(&app, &format!("/api/owner/pokemon/{}", pokemon)).await;
    assert_eq!(owners.body["meta"]["count"], 0);
}

#[tokio::test]
async fn oversized_bodies_are_refused_before_routing() {
    let app = app(AppState::new(MemoryStore::new()), 16);
    let body = json!({"name": "A category name well past sixteen bytes"}).to_string();
    let request = Request::builder()
        .method("POST")
        .uri("/api/category")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    assert_eq!(get(&app, "/api/category").await.body["meta"]["count"], 0);
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let app = test_app();
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn operational_routes_respond() {
    let app = test_app();
    assert_eq!(get(&app, "/health").await.body["status"], "ok");
    assert_eq!(get(&app, "/ready").await.status, StatusCode::OK);
    let version = get(&app, "/version").await;
    assert_eq!(version.body["name"], "pokedex-api");
    assert_eq!(version.body["store"], "memory");
}
