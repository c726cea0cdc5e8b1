//! Review model for the `reviews` collection.

use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// A game review document.
///
/// Every field except the identifier is defaulted: no field is required to be
/// present on create, and documents persisted with missing fields still
/// deserialize on read.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::serialize_object_id_as_hex"
    )]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub user_name: String,
    /// Owner key for the by-owner query. Free text, never validated.
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub game_title: String,
    #[serde(default)]
    pub review_description: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub publish_year: i32,
    #[serde(default)]
    pub game_cover_image: String,
    #[serde(default)]
    pub genre: String,
}

/// Request body for partially updating a review.
///
/// Only fields present in the body are replaced; everything else keeps its
/// prior value.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub game_title: Option<String>,
    #[serde(default)]
    pub review_description: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub publish_year: Option<i32>,
    #[serde(default)]
    pub game_cover_image: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl UpdateReviewRequest {
    /// Build the `$set` payload containing only the supplied fields.
    pub fn set_document(&self) -> Document {
        let mut set = doc! {};
        if let Some(v) = &self.user_name {
            set.insert("userName", v.clone());
        }
        if let Some(v) = &self.user_email {
            set.insert("userEmail", v.clone());
        }
        if let Some(v) = &self.game_title {
            set.insert("gameTitle", v.clone());
        }
        if let Some(v) = &self.review_description {
            set.insert("reviewDescription", v.clone());
        }
        if let Some(v) = self.rating {
            set.insert("rating", v);
        }
        if let Some(v) = self.publish_year {
            set.insert("publishYear", v);
        }
        if let Some(v) = &self.game_cover_image {
            set.insert("gameCoverImage", v.clone());
        }
        if let Some(v) = &self.genre {
            set.insert("genre", v.clone());
        }
        set
    }
}
