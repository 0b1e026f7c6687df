//! Raindrop API data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An existing bookmark in the target collection.
///
/// Only the fields the reconciler needs: `id` for deletion, `link` for the
/// join key, `title` for logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Raindrop {
    #[serde(rename = "_id")]
    pub id: i64,
    pub link: String,
    #[serde(default)]
    pub title: String,
}

/// One page of `GET /raindrops/{collection}`.
#[derive(Debug, Deserialize)]
pub(crate) struct RaindropPage {
    pub items: Vec<Raindrop>,
}

/// Collection reference in the shape Raindrop's create endpoint expects.
#[derive(Debug, Serialize)]
pub(crate) struct CollectionRef {
    #[serde(rename = "$id")]
    pub id: i64,
}

/// One bookmark in a bulk-create request.
#[derive(Debug, Serialize)]
pub(crate) struct NewRaindrop<'a> {
    pub link: &'a str,
    pub title: &'a str,
    pub excerpt: &'a str,
    pub created: DateTime<Utc>,
    pub collection: CollectionRef,
    pub tags: Vec<&'a str>,
}

/// Body of `POST /raindrops`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateBatch<'a> {
    pub items: Vec<NewRaindrop<'a>>,
}

/// Body of `DELETE /raindrops/{collection}`.
#[derive(Debug, Serialize)]
pub(crate) struct DeleteBatch<'a> {
    pub ids: &'a [i64],
}
