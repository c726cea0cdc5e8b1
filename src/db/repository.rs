//! Database repository for CRUD operations over the two collections.

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};

use crate::errors::AppError;
use crate::models::{
    AddWatchlistRequest, DeleteAck, Review, UpdateAck, UpdateReviewRequest, WatchlistEntry,
};

pub const REVIEWS_COLLECTION: &str = "reviews";
pub const WATCHLIST_COLLECTION: &str = "watchlist";

/// How many reviews the top-rated query returns.
const TOP_RATED_LIMIT: i64 = 6;

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    reviews: Collection<Review>,
    watchlist: Collection<WatchlistEntry>,
}

impl Repository {
    pub fn new(database: &Database) -> Self {
        Self {
            reviews: database.collection(REVIEWS_COLLECTION),
            watchlist: database.collection(WATCHLIST_COLLECTION),
        }
    }

    // ==================== REVIEW OPERATIONS ====================

    /// List all reviews in storage-native order.
    pub async fn list_reviews(&self) -> Result<Vec<Review>, AppError> {
        let cursor = self.reviews.find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Get a review by its identifier.
    pub async fn get_review(&self, id: ObjectId) -> Result<Option<Review>, AppError> {
        Ok(self.reviews.find_one(doc! { "_id": id }, None).await?)
    }

    /// Insert a new review and return the assigned identifier.
    pub async fn create_review(&self, review: &Review) -> Result<ObjectId, AppError> {
        let result = self.reviews.insert_one(review, None).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Database("Insert returned a non-ObjectId id".to_string()))
    }

    /// Apply a partial update to a review.
    ///
    /// Only fields present in the request are replaced. A body with no
    /// recognized fields is a no-op that still reports whether the document
    /// exists, since MongoDB rejects an empty `$set`.
    pub async fn update_review(
        &self,
        id: ObjectId,
        request: &UpdateReviewRequest,
    ) -> Result<UpdateAck, AppError> {
        let set = request.set_document();
        if set.is_empty() {
            let matched = self.get_review(id).await?.map_or(0, |_| 1);
            return Ok(UpdateAck {
                matched_count: matched,
                modified_count: 0,
            });
        }

        let result = self
            .reviews
            .update_one(doc! { "_id": id }, doc! { "$set": set }, None)
            .await?;
        Ok(UpdateAck {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    /// Delete a review. Deleting a missing id acknowledges zero removals.
    pub async fn delete_review(&self, id: ObjectId) -> Result<DeleteAck, AppError> {
        let result = self.reviews.delete_one(doc! { "_id": id }, None).await?;
        Ok(DeleteAck {
            deleted_count: result.deleted_count,
        })
    }

    /// The highest-rated reviews, rating descending, at most six.
    pub async fn top_rated(&self) -> Result<Vec<Review>, AppError> {
        let options = FindOptions::builder()
            .sort(doc! { "rating": -1 })
            .limit(TOP_RATED_LIMIT)
            .build();
        let cursor = self.reviews.find(None, options).await?;
        Ok(cursor.try_collect().await?)
    }

    /// All reviews whose owner email matches exactly (case-sensitive).
    pub async fn reviews_by_owner(&self, email: &str) -> Result<Vec<Review>, AppError> {
        let cursor = self.reviews.find(doc! { "userEmail": email }, None).await?;
        Ok(cursor.try_collect().await?)
    }

    // ==================== WATCHLIST OPERATIONS ====================

    /// Add a game to a user's watchlist.
    ///
    /// Uniqueness of the (userEmail, game._id) pair is enforced by the
    /// compound index, so concurrent duplicate adds cannot both land; the
    /// duplicate-key error becomes a `Conflict`.
    pub async fn add_watchlist_entry(
        &self,
        request: AddWatchlistRequest,
    ) -> Result<ObjectId, AppError> {
        let entry = WatchlistEntry {
            id: None,
            user_email: request.user_email,
            game: request.game,
        };

        let result = match self.watchlist.insert_one(&entry, None).await {
            Ok(result) => result,
            Err(err) if is_duplicate_key(&err) => {
                return Err(AppError::Conflict(
                    "Game already in watchlist".to_string(),
                ));
            }
            Err(err) => return Err(err.into()),
        };

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Database("Insert returned a non-ObjectId id".to_string()))
    }

    /// All watchlist entries for an owner, unordered.
    pub async fn watchlist_by_owner(&self, email: &str) -> Result<Vec<WatchlistEntry>, AppError> {
        let cursor = self
            .watchlist
            .find(doc! { "userEmail": email }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Delete a watchlist entry by its own identifier.
    pub async fn delete_watchlist_entry(&self, id: ObjectId) -> Result<DeleteAck, AppError> {
        let result = self.watchlist.delete_one(doc! { "_id": id }, None).await?;
        Ok(DeleteAck {
            deleted_count: result.deleted_count,
        })
    }
}

/// True when the error is a storage-level unique-index violation.
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        _ => false,
    }
}
