//! /api/country

use super::{ensure_exists, load, location, parse_id};
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::mapper::to_dtos;
use crate::model::{Country, CountryDto, Owner, OwnerDto};
use crate::repository::CountryRepository;
use crate::response::{no_content, success_created, success_many, success_one_ok};
use crate::state::AppState;
use crate::validation::{ensure_same_id, Validate};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut uow = state.store.begin().await?;
    let countries = CountryRepository::get_all(uow.as_mut()).await?;
    Ok(success_many(to_dtos::<_, CountryDto>(&countries)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    let country: Country = load(uow.as_mut(), id).await?;
    Ok(success_one_ok(CountryDto::from(&country)))
}

/// GET /api/country/owners/:id, the country an owner belongs to.
pub async fn of_owner(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let owner_id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    ensure_exists::<Owner>(uow.as_mut(), owner_id).await?;
    let country = CountryRepository::country_of_owner(uow.as_mut(), owner_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("owner {} has no country", owner_id)))?;
    Ok(success_one_ok(CountryDto::from(&country)))
}

/// GET /api/country/:id/owners
pub async fn owners(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    ensure_exists::<Country>(uow.as_mut(), id).await?;
    let owners = CountryRepository::owners_from_country(uow.as_mut(), id).await?;
    Ok(success_many(to_dtos::<_, OwnerDto>(&owners)))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CountryDto>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let mut uow = state.store.begin().await?;
    if CountryRepository::name_exists(uow.as_mut(), &body.name).await? {
        return Err(AppError::Validation(format!("country '{}' already exists", body.name.trim())));
    }
    let created = CountryRepository::create(uow.as_mut(), &body.into_entity()).await?;
    uow.commit().await?;
    Ok(success_created(location::<Country>(created.id), CountryDto::from(&created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<CountryDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    body.validate()?;
    ensure_same_id(id, body.id, "country")?;
    let mut uow = state.store.begin().await?;
    ensure_exists::<Country>(uow.as_mut(), id).await?;
    CountryRepository::update(uow.as_mut(), &body.into_entity()).await?;
    uow.commit().await?;
    Ok(no_content())
}

/// Refused while owners still live in the country.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    let country: Country = load(uow.as_mut(), id).await?;
    let owners = CountryRepository::owners_from_country(uow.as_mut(), id).await?;
    if !owners.is_empty() {
        return Err(AppError::Validation(format!(
            "country {} still has {} owner(s)",
            id,
            owners.len()
        )));
    }
    CountryRepository::delete(uow.as_mut(), &country).await?;
    uow.commit().await?;
    Ok(no_content())
}
