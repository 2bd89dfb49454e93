//! /api/owner

use super::{ensure_exists, ensure_reference, load, location, parse_id, query_id};
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::mapper::to_dtos;
use crate::model::{Country, Owner, OwnerDto, Pokemon, PokemonDto};
use crate::repository::OwnerRepository;
use crate::response::{no_content, success_created, success_many, success_one_ok};
use crate::state::AppState;
use crate::validation::{ensure_same_id, Validate};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use std::collections::HashMap;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut uow = state.store.begin().await?;
    let owners = OwnerRepository::get_all(uow.as_mut()).await?;
    Ok(success_many(to_dtos::<_, OwnerDto>(&owners)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    let owner: Owner = load(uow.as_mut(), id).await?;
    Ok(success_one_ok(OwnerDto::from(&owner)))
}

/// GET /api/owner/:id/pokemon
pub async fn pokemon(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    ensure_exists::<Owner>(uow.as_mut(), id).await?;
    let pokemon = OwnerRepository::pokemon_by_owner(uow.as_mut(), id).await?;
    Ok(success_many(to_dtos::<_, PokemonDto>(&pokemon)))
}

/// GET /api/owner/pokemon/:id
pub async fn of_pokemon(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let pokemon_id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    ensure_exists::<Pokemon>(uow.as_mut(), pokemon_id).await?;
    let owners = OwnerRepository::owners_of_pokemon(uow.as_mut(), pokemon_id).await?;
    Ok(success_many(to_dtos::<_, OwnerDto>(&owners)))
}

async fn create_in_country(
    state: AppState,
    country_id: i32,
    body: OwnerDto,
) -> Result<(String, OwnerDto), AppError> {
    body.validate()?;
    let mut uow = state.store.begin().await?;
    ensure_reference::<Country>(uow.as_mut(), country_id).await?;
    if OwnerRepository::last_name_exists(uow.as_mut(), &body.last_name).await? {
        return Err(AppError::Validation(format!(
            "owner with last name '{}' already exists",
            body.last_name.trim()
        )));
    }
    let created = OwnerRepository::create(uow.as_mut(), &body.into_entity(country_id)).await?;
    uow.commit().await?;
    Ok((location::<Owner>(created.id), OwnerDto::from(&created)))
}

/// POST /api/owner?countryId=
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    JsonBody(body): JsonBody<OwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let country_id = query_id(&params, "countryId")?;
    let (loc, dto) = create_in_country(state, country_id, body).await?;
    Ok(success_created(loc, dto))
}

/// POST /api/owner/create/country/:id
pub async fn create_for_country(
    State(state): State<AppState>,
    Path(country_str): Path<String>,
    JsonBody(body): JsonBody<OwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let country_id = parse_id(&country_str)?;
    let (loc, dto) = create_in_country(state, country_id, body).await?;
    Ok(success_created(loc, dto))
}

/// The owner keeps its country; only the DTO fields change.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<OwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    body.validate()?;
    ensure_same_id(id, body.id, "owner")?;
    let mut uow = state.store.begin().await?;
    let existing: Owner = load(uow.as_mut(), id).await?;
    OwnerRepository::update(uow.as_mut(), &body.into_entity(existing.country_id)).await?;
    uow.commit().await?;
    Ok(no_content())
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    let owner: Owner = load(uow.as_mut(), id).await?;
    OwnerRepository::delete(uow.as_mut(), &owner).await?;
    uow.commit().await?;
    Ok(no_content())
}
