//! Presence checks on incoming DTOs.

use crate::error::AppError;
use crate::model::{CategoryDto, CountryDto, OwnerDto, PokemonDto, ReviewDto, ReviewerDto};

pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

fn required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Comparison used by the duplicate-name rules: trimmed, case-insensitive.
pub fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_uppercase() == b.trim().to_uppercase()
}

impl Validate for PokemonDto {
    fn validate(&self) -> Result<(), AppError> {
        required("name", &self.name)
    }
}

impl Validate for CategoryDto {
    fn validate(&self) -> Result<(), AppError> {
        required("name", &self.name)
    }
}

impl Validate for CountryDto {
    fn validate(&self) -> Result<(), AppError> {
        required("name", &self.name)
    }
}

impl Validate for OwnerDto {
    fn validate(&self) -> Result<(), AppError> {
        required("firstName", &self.first_name)?;
        required("lastName", &self.last_name)
    }
}

impl Validate for ReviewerDto {
    fn validate(&self) -> Result<(), AppError> {
        required("firstName", &self.first_name)?;
        required("lastName", &self.last_name)
    }
}

impl Validate for ReviewDto {
    fn validate(&self) -> Result<(), AppError> {
        required("title", &self.title)?;
        required("text", &self.text)
    }
}

/// Rejects an update whose body id disagrees with the path id.
pub fn ensure_same_id(path_id: i32, body_id: i32, label: &str) -> Result<(), AppError> {
    if path_id != body_id {
        return Err(AppError::Validation(format!(
            "{} id in path ({}) does not match body id ({})",
            label, path_id, body_id
        )));
    }
    Ok(())
}
