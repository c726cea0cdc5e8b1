//! Watchlist models for the `watchlist` collection.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Denormalized snapshot of a review embedded in a watchlist entry.
///
/// The original review identifier travels as `game._id` (hex string). The
/// snapshot is copied at add time and never synced back to the source review.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WatchedGame {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub user_name: String,
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

/// A watchlist entry owned by a user.
///
/// At most one entry exists per (userEmail, game._id) pair, enforced by a
/// unique compound index. Entries are immutable once created and are deleted
/// by their own identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::serialize_object_id_as_hex"
    )]
    pub id: Option<ObjectId>,
    pub user_email: String,
    pub game: WatchedGame,
}

/// Request body for adding a game to a watchlist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWatchlistRequest {
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub game: WatchedGame,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_carries_game_id() {
        let request: AddWatchlistRequest = serde_json::from_str(
            r#"{"userEmail": "a@x.com", "game": {"_id": "g1", "gameTitle": "Tunic"}}"#,
        )
        .unwrap();
        assert_eq!(request.user_email, "a@x.com");
        assert_eq!(request.game.id, "g1");
        assert_eq!(request.game.game_title, "Tunic");
    }

    #[test]
    fn test_entry_wire_shape() {
        let entry = WatchlistEntry {
            id: None,
            user_email: "a@x.com".to_string(),
            game: WatchedGame {
                id: "g1".to_string(),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["userEmail"], "a@x.com");
        assert_eq!(json["game"]["_id"], "g1");
    }

    #[test]
    fn test_watched_game_accepts_fetched_review_wire_form() {
        // A review fetched from the API must embed directly as a game
        // snapshot, its assigned id landing in game._id
        let review = crate::models::Review {
            id: Some(ObjectId::new()),
            game_title: "Tunic".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&review).unwrap();

        let game: WatchedGame = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(game.id, json["_id"].as_str().unwrap());
        assert_eq!(game.game_title, "Tunic");
    }
}
