//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod reviews;
mod watchlist;

pub use reviews::*;
pub use watchlist::*;

use axum::Json;
use mongodb::bson::oid::ObjectId;

use crate::errors::AppError;

/// Response type for all handlers: a JSON body or a mapped error envelope.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Parse a path segment into an `ObjectId`, rejecting malformed ids up front
/// so by-id routes answer 400 rather than 404 or a storage error.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    Ok(ObjectId::parse_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_rejects_garbage() {
        let err = parse_object_id("not-an-id").unwrap_err();
        assert_eq!(err.error_code(), crate::errors::codes::INVALID_ID);
    }

    #[test]
    fn test_parse_object_id_round_trips_hex() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }
}
