//! Data models for the game review application.
//!
//! Field names match the JSON wire format used by the frontend, with BSON
//! documents stored under the same keys.

mod ack;
mod review;
mod watchlist;

pub use ack::*;
pub use review::*;
pub use watchlist::*;

use mongodb::bson::oid::ObjectId;
use serde::Serializer;

/// Serialize an assigned document id as its plain hex form, matching the
/// `insertedId` acknowledgments and the `game._id` snapshot field, so a
/// fetched document can be embedded in later requests unchanged.
pub(crate) fn serialize_object_id_as_hex<S>(
    id: &Option<ObjectId>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}
