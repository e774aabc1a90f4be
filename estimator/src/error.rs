use thiserror::Error;

use crate::catalog::CatalogError;
use crate::geo::CoordinateError;
use crate::speed::SpeedModelError;

#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("invalid coordinate: {0}")]
    Coordinate(#[from] CoordinateError),
    #[error("invalid speed model: {0}")]
    SpeedModel(#[from] SpeedModelError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("failed to build GPX document: {0}")]
    Gpx(#[from] gpx::errors::GpxError),
}
