use mongodb::bson::{Bson, Document};
use serde::Serialize;

use crate::dtos::{bson_type_name, optional_bool, optional_str, require_str};
use crate::error::AppError;

const COLLECTION: &str = "parklocations";

/// A parking space with its outer polygon boundary.
///
/// `parkType`/`valid` only exist in newer schema revisions and are omitted
/// from the JSON when a document predates them. `coordinates` is ring 0 of
/// the stored GeoJSON polygon; interior rings (holes) are not part of the
/// frontend contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpaceResponse {
    pub parking_id: String,
    pub road: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub park_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    pub coordinates: Vec<[f64; 2]>,
}

impl TryFrom<Document> for ParkingSpaceResponse {
    type Error = AppError;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        Ok(Self {
            parking_id: require_str(&doc, COLLECTION, "parking_id")?,
            road: require_str(&doc, COLLECTION, "road")?,
            park_type: optional_str(&doc, "parktype")?,
            valid: optional_bool(&doc, "valid")?,
            coordinates: outer_ring(&doc)?,
        })
    }
}

fn outer_ring(doc: &Document) -> Result<Vec<[f64; 2]>, AppError> {
    let location = match doc.get("location") {
        Some(Bson::Document(d)) => d,
        Some(other) => {
            return Err(AppError::Geometry(format!(
                "location is {}, expected a GeoJSON object",
                bson_type_name(other)
            )))
        }
        None => return Err(AppError::Geometry("location geometry is missing".into())),
    };

    let rings = match location.get("coordinates") {
        Some(Bson::Array(a)) => a,
        _ => return Err(AppError::Geometry("polygon coordinates are missing".into())),
    };

    let outer = match rings.first() {
        Some(Bson::Array(points)) => points,
        Some(other) => {
            return Err(AppError::Geometry(format!(
                "outer ring is {}, expected an array of positions",
                bson_type_name(other)
            )))
        }
        None => return Err(AppError::Geometry("polygon has no rings".into())),
    };
    if outer.is_empty() {
        return Err(AppError::Geometry("outer ring has no positions".into()));
    }

    outer.iter().map(position).collect()
}

fn position(value: &Bson) -> Result<[f64; 2], AppError> {
    let pair = match value {
        // GeoJSON positions may carry an altitude; only lon/lat are kept.
        Bson::Array(p) if p.len() >= 2 => p,
        _ => {
            return Err(AppError::Geometry(
                "position is not a [longitude, latitude] pair".into(),
            ))
        }
    };
    Ok([coordinate(&pair[0])?, coordinate(&pair[1])?])
}

fn coordinate(value: &Bson) -> Result<f64, AppError> {
    match value {
        Bson::Double(v) => Ok(*v),
        Bson::Int32(v) => Ok(f64::from(*v)),
        Bson::Int64(v) => Ok(*v as f64),
        other => Err(AppError::Geometry(format!(
            "coordinate is {}, expected a number",
            bson_type_name(other)
        ))),
    }
}
