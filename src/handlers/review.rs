//! /api/review

use super::{ensure_exists, ensure_reference, load, location, parse_id, query_id};
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::mapper::to_dtos;
use crate::model::{Pokemon, Review, ReviewDto, Reviewer};
use crate::repository::ReviewRepository;
use crate::response::{no_content, success_created, success_many, success_one_ok};
use crate::state::AppState;
use crate::validation::{ensure_same_id, Validate};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use std::collections::HashMap;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut uow = state.store.begin().await?;
    let reviews = ReviewRepository::get_all(uow.as_mut()).await?;
    Ok(success_many(to_dtos::<_, ReviewDto>(&reviews)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    let review: Review = load(uow.as_mut(), id).await?;
    Ok(success_one_ok(ReviewDto::from(&review)))
}

/// GET /api/review/pokemon/:id
pub async fn for_pokemon(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let pokemon_id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    ensure_exists::<Pokemon>(uow.as_mut(), pokemon_id).await?;
    let reviews = ReviewRepository::reviews_for_pokemon(uow.as_mut(), pokemon_id).await?;
    Ok(success_many(to_dtos::<_, ReviewDto>(&reviews)))
}

/// GET /api/review/reviewer/:id
pub async fn from_reviewer(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reviewer_id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    ensure_exists::<Reviewer>(uow.as_mut(), reviewer_id).await?;
    let reviews = ReviewRepository::reviews_from_reviewer(uow.as_mut(), reviewer_id).await?;
    Ok(success_many(to_dtos::<_, ReviewDto>(&reviews)))
}

/// POST /api/review?reviewerId=&pokemonId=
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    JsonBody(body): JsonBody<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let reviewer_id = query_id(&params, "reviewerId")?;
    let pokemon_id = query_id(&params, "pokemonId")?;
    body.validate()?;

    let mut uow = state.store.begin().await?;
    ensure_reference::<Reviewer>(uow.as_mut(), reviewer_id).await?;
    ensure_reference::<Pokemon>(uow.as_mut(), pokemon_id).await?;
    let created = ReviewRepository::create(uow.as_mut(), &body.into_entity(pokemon_id, reviewer_id)).await?;
    uow.commit().await?;
    Ok(success_created(location::<Review>(created.id), ReviewDto::from(&created)))
}

/// The review stays attached to its pokemon and reviewer.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    body.validate()?;
    ensure_same_id(id, body.id, "review")?;
    let mut uow = state.store.begin().await?;
    let existing: Review = load(uow.as_mut(), id).await?;
    let review = body.into_entity(existing.pokemon_id, existing.reviewer_id);
    ReviewRepository::update(uow.as_mut(), &review).await?;
    uow.commit().await?;
    Ok(no_content())
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    let review: Review = load(uow.as_mut(), id).await?;
    ReviewRepository::delete(uow.as_mut(), &review).await?;
    uow.commit().await?;
    Ok(no_content())
}
