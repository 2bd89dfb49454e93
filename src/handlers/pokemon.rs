//! /api/pokemon

use super::{ensure_exists, ensure_reference, load, location, parse_id, query_id};
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::mapper::to_dtos;
use crate::model::{Category, Owner, Pokemon, PokemonDto};
use crate::repository::{PokemonRepository, ReviewRepository};
use crate::response::{no_content, success_created, success_many, success_one_ok};
use crate::state::AppState;
use crate::validation::{ensure_same_id, Validate};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use std::collections::HashMap;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut uow = state.store.begin().await?;
    let pokemon = PokemonRepository::get_all(uow.as_mut()).await?;
    Ok(success_many(to_dtos::<_, PokemonDto>(&pokemon)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    let pokemon: Pokemon = load(uow.as_mut(), id).await?;
    Ok(success_one_ok(PokemonDto::from(&pokemon)))
}

pub async fn rating(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    ensure_exists::<Pokemon>(uow.as_mut(), id).await?;
    let rating = PokemonRepository::rating(uow.as_mut(), id).await?;
    Ok(success_one_ok(rating))
}

/// POST /api/pokemon?ownerId=&categoryId=
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    JsonBody(body): JsonBody<PokemonDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner_id = query_id(&params, "ownerId")?;
    let category_id = query_id(&params, "categoryId")?;
    body.validate()?;

    let mut uow = state.store.begin().await?;
    ensure_reference::<Owner>(uow.as_mut(), owner_id).await?;
    ensure_reference::<Category>(uow.as_mut(), category_id).await?;
    if PokemonRepository::name_exists(uow.as_mut(), &body.name).await? {
        return Err(AppError::Validation(format!("pokemon named '{}' already exists", body.name.trim())));
    }

    let created = PokemonRepository::create_with(uow.as_mut(), owner_id, category_id, &body.into_entity()).await?;
    uow.commit().await?;
    Ok(success_created(location::<Pokemon>(created.id), PokemonDto::from(&created)))
}

/// PUT /api/pokemon/:id?ownerId=&categoryId=
///
/// Links the pokemon to the given owner and category. Existing links are kept,
/// so a new owner is added alongside the old one rather than replacing it.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    JsonBody(body): JsonBody<PokemonDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let owner_id = query_id(&params, "ownerId")?;
    let category_id = query_id(&params, "categoryId")?;
    body.validate()?;
    ensure_same_id(id, body.id, "pokemon")?;

    let mut uow = state.store.begin().await?;
    ensure_exists::<Pokemon>(uow.as_mut(), id).await?;
    ensure_reference::<Owner>(uow.as_mut(), owner_id).await?;
    ensure_reference::<Category>(uow.as_mut(), category_id).await?;

    PokemonRepository::update_with(uow.as_mut(), owner_id, category_id, &body.into_entity()).await?;
    uow.commit().await?;
    Ok(no_content())
}

/// Removes the pokemon's reviews first, then the pokemon, in one session.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    let pokemon: Pokemon = load(uow.as_mut(), id).await?;

    let reviews = ReviewRepository::reviews_for_pokemon(uow.as_mut(), id).await?;
    ReviewRepository::delete_many(uow.as_mut(), &reviews).await?;
    PokemonRepository::delete(uow.as_mut(), &pokemon).await?;
    uow.commit().await?;
    Ok(no_content())
}
