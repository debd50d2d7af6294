use mongodb::bson::Document;
use serde::Serialize;

use crate::dtos::{nullable_str, require_i32};
use crate::error::AppError;

const COLLECTION: &str = "bulletins";

/// A bulletin as the map frontend consumes it. `title`/`content` keys are
/// mandatory in storage but their values may be null.
#[derive(Debug, Clone, Serialize)]
pub struct BulletinResponse {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl TryFrom<Document> for BulletinResponse {
    type Error = AppError;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        // The query projection excludes the store key, so only the contract
        // fields are read; anything else left in the document is ignored.
        Ok(Self {
            id: require_i32(&doc, COLLECTION, "id")?,
            title: nullable_str(&doc, COLLECTION, "title")?,
            content: nullable_str(&doc, COLLECTION, "content")?,
        })
    }
}
