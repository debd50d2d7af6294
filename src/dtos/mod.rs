pub mod bulletins;
pub mod locations;
pub mod parking;

pub use bulletins::BulletinResponse;
pub use locations::LocationResponse;
pub use parking::ParkingSpaceResponse;

use crate::error::AppError;
use mongodb::bson::{Bson, Document};

pub(crate) fn bson_type_name(value: &Bson) -> &'static str {
    match value {
        Bson::Double(_) => "double",
        Bson::String(_) => "string",
        Bson::Array(_) => "array",
        Bson::Document(_) => "document",
        Bson::Boolean(_) => "boolean",
        Bson::Null => "null",
        Bson::Int32(_) => "int32",
        Bson::Int64(_) => "int64",
        Bson::ObjectId(_) => "objectId",
        Bson::DateTime(_) => "datetime",
        Bson::Timestamp(_) => "timestamp",
        Bson::Decimal128(_) => "decimal128",
        Bson::RegularExpression(_) => "regex",
        Bson::Binary(_) => "binary",
        _ => "other",
    }
}

/// Mandatory key lookup. A missing key is a data-integrity fault, never a
/// value to default-fill.
fn require<'a>(
    doc: &'a Document,
    collection: &'static str,
    field: &'static str,
) -> Result<&'a Bson, AppError> {
    doc.get(field)
        .ok_or(AppError::MissingField { collection, field })
}

pub(crate) fn require_str(
    doc: &Document,
    collection: &'static str,
    field: &'static str,
) -> Result<String, AppError> {
    match require(doc, collection, field)? {
        Bson::String(s) => Ok(s.clone()),
        other => Err(AppError::TypeMismatch {
            field,
            expected: "string",
            actual: bson_type_name(other),
        }),
    }
}

pub(crate) fn require_bool(
    doc: &Document,
    collection: &'static str,
    field: &'static str,
) -> Result<bool, AppError> {
    match require(doc, collection, field)? {
        Bson::Boolean(b) => Ok(*b),
        other => Err(AppError::TypeMismatch {
            field,
            expected: "boolean",
            actual: bson_type_name(other),
        }),
    }
}

pub(crate) fn require_i32(
    doc: &Document,
    collection: &'static str,
    field: &'static str,
) -> Result<i32, AppError> {
    match require(doc, collection, field)? {
        Bson::Int32(v) => Ok(*v),
        Bson::Int64(v) => i32::try_from(*v).map_err(|_| AppError::TypeMismatch {
            field,
            expected: "int32",
            actual: "int64",
        }),
        other => Err(AppError::TypeMismatch {
            field,
            expected: "int32",
            actual: bson_type_name(other),
        }),
    }
}

/// Any BSON number type coerces to f64.
pub(crate) fn require_f64(
    doc: &Document,
    collection: &'static str,
    field: &'static str,
) -> Result<f64, AppError> {
    match require(doc, collection, field)? {
        Bson::Double(v) => Ok(*v),
        Bson::Int32(v) => Ok(f64::from(*v)),
        Bson::Int64(v) => Ok(*v as f64),
        other => Err(AppError::TypeMismatch {
            field,
            expected: "double",
            actual: bson_type_name(other),
        }),
    }
}

/// Key must be present, value may be BSON null.
pub(crate) fn nullable_str(
    doc: &Document,
    collection: &'static str,
    field: &'static str,
) -> Result<Option<String>, AppError> {
    match require(doc, collection, field)? {
        Bson::String(s) => Ok(Some(s.clone())),
        Bson::Null => Ok(None),
        other => Err(AppError::TypeMismatch {
            field,
            expected: "string",
            actual: bson_type_name(other),
        }),
    }
}

/// Schema-version-optional: absent or null both mean "not in this revision".
pub(crate) fn optional_str(doc: &Document, field: &'static str) -> Result<Option<String>, AppError> {
    match doc.get(field) {
        None | Some(Bson::Null) => Ok(None),
        Some(Bson::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(AppError::TypeMismatch {
            field,
            expected: "string",
            actual: bson_type_name(other),
        }),
    }
}

pub(crate) fn optional_bool(doc: &Document, field: &'static str) -> Result<Option<bool>, AppError> {
    match doc.get(field) {
        None | Some(Bson::Null) => Ok(None),
        Some(Bson::Boolean(b)) => Ok(Some(*b)),
        Some(other) => Err(AppError::TypeMismatch {
            field,
            expected: "boolean",
            actual: bson_type_name(other),
        }),
    }
}
