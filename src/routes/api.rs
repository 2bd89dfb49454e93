//! Resource routes under /api. Path parameters share the name `:id` wherever
//! two routes put a parameter at the same position.

use crate::handlers::{category, country, owner, pokemon, review, reviewer};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn pokemon_routes() -> Router<AppState> {
    Router::new()
        .route("/api/pokemon", get(pokemon::list).post(pokemon::create))
        .route(
            "/api/pokemon/:id",
            get(pokemon::get).put(pokemon::update).delete(pokemon::delete),
        )
        .route("/api/pokemon/:id/rating", get(pokemon::rating))
}

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/api/category", get(category::list).post(category::create))
        .route(
            "/api/category/:id",
            get(category::get).put(category::update).delete(category::delete),
        )
        .route("/api/category/pokemon/:id", get(category::pokemon))
}

pub fn country_routes() -> Router<AppState> {
    Router::new()
        .route("/api/country", get(country::list).post(country::create))
        .route(
            "/api/country/:id",
            get(country::get).put(country::update).delete(country::delete),
        )
        .route("/api/country/:id/owners", get(country::owners))
        .route("/api/country/owners/:id", get(country::of_owner))
}

pub fn owner_routes() -> Router<AppState> {
    Router::new()
        .route("/api/owner", get(owner::list).post(owner::create))
        .route(
            "/api/owner/:id",
            get(owner::get).put(owner::update).delete(owner::delete),
        )
        .route("/api/owner/:id/pokemon", get(owner::pokemon))
        .route("/api/owner/pokemon/:id", get(owner::of_pokemon))
        .route("/api/owner/create/country/:id", post(owner::create_for_country))
}

pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/api/review", get(review::list).post(review::create))
        .route(
            "/api/review/:id",
            get(review::get).put(review::update).delete(review::delete),
        )
        .route("/api/review/pokemon/:id", get(review::for_pokemon))
        .route("/api/review/reviewer/:id", get(review::from_reviewer))
}

pub fn reviewer_routes() -> Router<AppState> {
    Router::new()
        .route("/api/reviewer", get(reviewer::list).post(reviewer::create))
        .route(
            "/api/reviewer/:id",
            get(reviewer::get).put(reviewer::update).delete(reviewer::delete),
        )
        .route("/api/reviewer/:id/reviews", get(reviewer::reviews))
}

/// Every resource router merged; state is supplied by the caller.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(pokemon_routes())
        .merge(category_routes())
        .merge(country_routes())
        .merge(owner_routes())
        .merge(review_routes())
        .merge(reviewer_routes())
}
