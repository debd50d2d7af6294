use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;

use crate::config::{MongoConfig, ParkingConfig};
use crate::dtos::{BulletinResponse, LocationResponse, ParkingSpaceResponse};
use crate::error::AppError;
use crate::services::MongoDb;

/// Read-only query layer over the three civic collections.
///
/// Every operation is a full-collection scan returned in cursor order, mapped
/// document by document into the response contract. A malformed document
/// aborts the whole call; there are no partial results.
#[derive(Clone)]
pub struct CivicData {
    db: MongoDb,
    id_field: String,
    extended_fields: bool,
}

impl CivicData {
    pub fn new(db: MongoDb, mongodb: &MongoConfig, parking: &ParkingConfig) -> Self {
        Self {
            db,
            id_field: mongodb.id_field.clone(),
            extended_fields: parking.extended_fields,
        }
    }

    fn exclude_store_key(&self) -> FindOptions {
        let mut projection = Document::new();
        projection.insert(self.id_field.clone(), 0);
        FindOptions::builder().projection(projection).build()
    }

    pub async fn list_bulletins(&self) -> Result<Vec<BulletinResponse>, AppError> {
        let mut cursor = self
            .db
            .bulletins()
            .find(doc! {}, self.exclude_store_key())
            .await
            .map_err(AppError::from)?;

        let mut bulletins = Vec::new();
        while let Some(doc) = cursor.try_next().await.map_err(AppError::from)? {
            bulletins.push(BulletinResponse::try_from(doc)?);
        }
        tracing::debug!(count = bulletins.len(), "Fetched bulletins");

        Ok(bulletins)
    }

    pub async fn list_locations(&self) -> Result<Vec<LocationResponse>, AppError> {
        let mut cursor = self
            .db
            .locations()
            .find(doc! {}, self.exclude_store_key())
            .await
            .map_err(AppError::from)?;

        let mut locations = Vec::new();
        while let Some(doc) = cursor.try_next().await.map_err(AppError::from)? {
            locations.push(LocationResponse::try_from(doc)?);
        }
        tracing::debug!(count = locations.len(), "Fetched locations");

        Ok(locations)
    }

    pub async fn list_parking_spaces(&self) -> Result<Vec<ParkingSpaceResponse>, AppError> {
        // No projection here: the mapper reads named fields only, so the
        // store key rides along and is ignored.
        let mut cursor = self
            .db
            .parking_spaces()
            .find(doc! {}, None)
            .await
            .map_err(AppError::from)?;

        let mut spaces = Vec::new();
        while let Some(doc) = cursor.try_next().await.map_err(AppError::from)? {
            let mut space = ParkingSpaceResponse::try_from(doc)?;
            if !self.extended_fields {
                space.park_type = None;
                space.valid = None;
            }
            spaces.push(space);
        }
        tracing::debug!(count = spaces.len(), "Fetched parking spaces");

        Ok(spaces)
    }
}
