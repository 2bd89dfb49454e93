//! /api/reviewer

use super::{ensure_exists, load, location, not_found, parse_id};
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::mapper::to_dtos;
use crate::model::{ReviewDto, Reviewer, ReviewerDetailDto, ReviewerDto};
use crate::repository::ReviewerRepository;
use crate::response::{no_content, success_created, success_many, success_one_ok};
use crate::state::AppState;
use crate::validation::{ensure_same_id, Validate};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut uow = state.store.begin().await?;
    let reviewers = ReviewerRepository::get_all(uow.as_mut()).await?;
    Ok(success_many(to_dtos::<_, ReviewerDto>(&reviewers)))
}

/// The reviewer together with every review they wrote.
pub async fn get(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    let (reviewer, reviews) = ReviewerRepository::get_with_reviews(uow.as_mut(), id)
        .await?
        .ok_or_else(|| not_found::<Reviewer>(id))?;
    Ok(success_one_ok(ReviewerDetailDto {
        reviewer: ReviewerDto::from(&reviewer),
        reviews: to_dtos(&reviews),
    }))
}

/// GET /api/reviewer/:id/reviews
pub async fn reviews(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    ensure_exists::<Reviewer>(uow.as_mut(), id).await?;
    let reviews = ReviewerRepository::reviews_by_reviewer(uow.as_mut(), id).await?;
    Ok(success_many(to_dtos::<_, ReviewDto>(&reviews)))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ReviewerDto>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let mut uow = state.store.begin().await?;
    let created = ReviewerRepository::create(uow.as_mut(), &body.into_entity()).await?;
    uow.commit().await?;
    Ok(success_created(location::<Reviewer>(created.id), ReviewerDto::from(&created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<ReviewerDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    body.validate()?;
    ensure_same_id(id, body.id, "reviewer")?;
    let mut uow = state.store.begin().await?;
    ensure_exists::<Reviewer>(uow.as_mut(), id).await?;
    ReviewerRepository::update(uow.as_mut(), &body.into_entity()).await?;
    uow.commit().await?;
    Ok(no_content())
}

/// Refused while the reviewer still has reviews.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut uow = state.store.begin().await?;
    let reviewer: Reviewer = load(uow.as_mut(), id).await?;
    let reviews = ReviewerRepository::reviews_by_reviewer(uow.as_mut(), id).await?;
    if !reviews.is_empty() {
        return Err(AppError::Validation(format!(
            "reviewer {} still has {} review(s)",
            id,
            reviews.len()
        )));
    }
    ReviewerRepository::delete(uow.as_mut(), &reviewer).await?;
    uow.commit().await?;
    Ok(no_content())
}
