//! Database module for MongoDB persistence.
//!
//! MongoDB is the source of truth for all application data. The client is
//! built once at startup and shared by reference into every handler; the
//! driver pools connections internally.

mod repository;

pub use repository::*;

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};

use crate::config::Config;
use crate::models::WatchlistEntry;

/// Connect to MongoDB, verify the connection, and ensure indexes.
pub async fn init_database(config: &Config) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(&config.mongodb_uri).await?;
    options.app_name = Some("gamereview-backend".to_string());

    let client = Client::with_options(options)?;
    let database = client.database(&config.db_name);

    // Fail fast on bad credentials or an unreachable server
    database.run_command(doc! { "ping": 1 }, None).await?;

    ensure_indexes(&database).await?;

    Ok(database)
}

/// Create the indexes the query paths rely on.
///
/// The unique compound index on (userEmail, game._id) is what turns a
/// concurrent duplicate watchlist add into a clean duplicate-key error
/// instead of a second entry.
async fn ensure_indexes(database: &Database) -> Result<(), mongodb::error::Error> {
    let watchlist = database.collection::<WatchlistEntry>(repository::WATCHLIST_COLLECTION);

    let unique_pair = IndexModel::builder()
        .keys(doc! { "userEmail": 1, "game._id": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    watchlist.create_index(unique_pair, None).await?;

    Ok(())
}
