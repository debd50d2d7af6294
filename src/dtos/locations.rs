use mongodb::bson::Document;
use serde::Serialize;

use crate::dtos::{require_bool, require_f64, require_str};
use crate::error::AppError;

const COLLECTION: &str = "locations";

/// A named point of interest. Latitude/longitude are independent scalars;
/// this layer does not range-check them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub road: String,
    pub is_valid: bool,
}

impl TryFrom<Document> for LocationResponse {
    type Error = AppError;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_str(&doc, COLLECTION, "name")?,
            latitude: require_f64(&doc, COLLECTION, "latitude")?,
            longitude: require_f64(&doc, COLLECTION, "longitude")?,
            road: require_str(&doc, COLLECTION, "road")?,
            is_valid: require_bool(&doc, COLLECTION, "isValid")?,
        })
    }
}
