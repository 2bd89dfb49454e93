//! /api/category

use super::{ensure_exists, load, location, parse_id};
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::mapper::to_dtos;
use crate::model::{Category, CategoryDto, PokemonDto};
use crate::repository::CategoryRepository;
use crate::response::{no_content, success_created, success_many, success_one_ok};
use crate::state::AppState;
use crate::validation::{ensure_same_id, Validate};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut uow = state.store.begin().await?;
    let categories = CategoryRepository::get_all(uow.as_mut()).await?;
    Ok(success_many(to_dtos::<_, CategoryDto>(&categories)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    let category: Category = load(uow.as_mut(), id).await?;
    Ok(success_one_ok(CategoryDto::from(&category)))
}

/// GET /api/category/pokemon/:id
pub async fn pokemon(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    ensure_exists::<Category>(uow.as_mut(), id).await?;
    let pokemon = CategoryRepository::pokemon_by_category(uow.as_mut(), id).await?;
    Ok(success_many(to_dtos::<_, PokemonDto>(&pokemon)))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let mut uow = state.store.begin().await?;
    if CategoryRepository::name_exists(uow.as_mut(), &body.name).await? {
        return Err(AppError::Validation(format!("category '{}' already exists", body.name.trim())));
    }
    let created = CategoryRepository::create(uow.as_mut(), &body.into_entity()).await?;
    uow.commit().await?;
    Ok(success_created(location::<Category>(created.id), CategoryDto::from(&created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<CategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    body.validate()?;
    ensure_same_id(id, body.id, "category")?;
    let mut uow = state.store.begin().await?;
    ensure_exists::<Category>(uow.as_mut(), id).await?;
    CategoryRepository::update(uow.as_mut(), &body.into_entity()).await?;
    uow.commit().await?;
    Ok(no_content())
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    let category: Category = load(uow.as_mut(), id).await?;
    CategoryRepository::delete(uow.as_mut(), &category).await?;
    uow.commit().await?;
    Ok(no_content())
}
