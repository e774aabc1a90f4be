pub mod catalog;
pub mod config;
pub mod error;
pub mod estimate;
pub mod format;
pub mod geo;
pub mod gpx_export;
pub mod selection;
pub mod speed;

pub use shared::{DonationPoint, GeoPoint, PointCategory, Priority, RouteEstimate, RouteReport};

pub use crate::catalog::DonationCatalog;
pub use crate::config::EstimatorConfig;
pub use crate::error::EstimateError;
pub use crate::estimate::RouteEstimator;
pub use crate::format::{format_distance, format_duration};
pub use crate::geo::{great_circle_distance_km, route_distance_meters};
pub use crate::selection::Selection;
pub use crate::speed::SpeedModel;
