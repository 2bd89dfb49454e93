//! HTTP handlers, one module per resource. Each request runs in one store session:
//! reads drop it, writes commit it after every step succeeded.

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;

use crate::error::AppError;
use crate::model::Entity;
use crate::repository::Repository;
use crate::store::Session;
use std::collections::HashMap;

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: '{}'", id_str)))
}

/// Required integer query parameter, e.g. `?ownerId=3`.
fn query_id(params: &HashMap<String, String>, name: &str) -> Result<i32, AppError> {
    let raw = params
        .get(name)
        .ok_or_else(|| AppError::BadRequest(format!("query parameter '{}' is required", name)))?;
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("query parameter '{}' must be an integer", name)))
}

fn location<E: Entity>(id: i32) -> String {
    format!("/api/{}/{}", E::LABEL, id)
}

fn not_found<E: Entity>(id: i32) -> AppError {
    AppError::NotFound(format!("no {} with id {}", E::LABEL, id))
}

/// The entity addressed by the path; 404 when absent.
async fn load<E: Entity>(uow: &mut dyn Session, id: i32) -> Result<E, AppError> {
    Repository::<E>::get_by_id(uow, id)
        .await?
        .ok_or_else(|| not_found::<E>(id))
}

/// 404 unless the entity addressed by the path exists.
async fn ensure_exists<E: Entity>(uow: &mut dyn Session, id: i32) -> Result<(), AppError> {
    if Repository::<E>::exists(uow, id).await? {
        Ok(())
    } else {
        Err(not_found::<E>(id))
    }
}

/// 400 unless an entity referenced by the request exists.
async fn ensure_reference<E: Entity>(uow: &mut dyn Session, id: i32) -> Result<(), AppError> {
    if Repository::<E>::exists(uow, id).await? {
        Ok(())
    } else {
        Err(AppError::Validation(format!("{} with id {} does not exist", E::LABEL, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("pikachu"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn query_ids_are_required() {
        let mut params = HashMap::new();
        assert!(query_id(&params, "ownerId").is_err());
        params.insert("ownerId".to_string(), "x".to_string());
        assert!(query_id(&params, "ownerId").is_err());
        params.insert("ownerId".to_string(), "7".to_string());
        assert_eq!(query_id(&params, "ownerId").unwrap(), 7);
    }
}
