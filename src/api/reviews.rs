//! Review API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{parse_object_id, ApiResult};
use crate::errors::AppError;
use crate::models::{DeleteAck, InsertAck, Review, UpdateAck, UpdateReviewRequest};
use crate::AppState;

/// GET /reviews - List all reviews.
pub async fn list_reviews(State(state): State<AppState>) -> ApiResult<Vec<Review>> {
    Ok(Json(state.repo.list_reviews().await?))
}

/// GET /reviews/:id - Get a single review.
pub async fn get_review(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Review> {
    let oid = parse_object_id(&id)?;

    match state.repo.get_review(oid).await? {
        Some(review) => Ok(Json(review)),
        None => Err(AppError::NotFound(format!("Review {} not found", id))),
    }
}

/// POST /reviews - Create a new review.
///
/// No required-field validation: any well-formed body is persisted, with
/// absent fields defaulted.
pub async fn create_review(
    State(state): State<AppState>,
    Json(mut review): Json<Review>,
) -> ApiResult<InsertAck> {
    // The storage layer assigns the identifier; one supplied by the caller
    // is dropped so it can never shadow an assigned id.
    review.id = None;

    let id = state.repo.create_review(&review).await?;
    Ok(Json(InsertAck {
        inserted_id: id.to_hex(),
    }))
}

/// PUT /reviews/:id - Partially update a review.
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateReviewRequest>,
) -> ApiResult<UpdateAck> {
    let oid = parse_object_id(&id)?;

    let ack = state.repo.update_review(oid, &request).await?;
    if ack.matched_count == 0 {
        return Err(AppError::NotFound(format!("Review {} not found", id)));
    }
    Ok(Json(ack))
}

/// DELETE /reviews/:id - Delete a review.
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<DeleteAck> {
    let oid = parse_object_id(&id)?;
    Ok(Json(state.repo.delete_review(oid).await?))
}

/// GET /top-rated - The six highest-rated reviews.
pub async fn top_rated(State(state): State<AppState>) -> ApiResult<Vec<Review>> {
    Ok(Json(state.repo.top_rated().await?))
}

/// Query parameters for the by-owner listing.
///
/// `email` is optional at the extractor so a missing parameter goes through
/// the JSON error envelope instead of axum's plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct MyReviewsQuery {
    pub email: Option<String>,
}

/// GET /myreviews?email= - Reviews owned by an email, exact match.
pub async fn my_reviews(
    State(state): State<AppState>,
    Query(query): Query<MyReviewsQuery>,
) -> ApiResult<Vec<Review>> {
    let Some(email) = query.email else {
        return Err(AppError::BadRequest(
            "Missing required query parameter: email".to_string(),
        ));
    };

    Ok(Json(state.repo.reviews_by_owner(&email).await?))
}
