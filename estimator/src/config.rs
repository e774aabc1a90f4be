use std::{env, path::PathBuf};

use crate::{
    catalog::{CatalogError, DonationCatalog},
    speed::{SpeedModel, SpeedModelError},
};

pub const SPEED_MODEL_VAR: &str = "ROUTE_SPEED_MODEL";
pub const CATALOG_VAR: &str = "DONATION_CATALOG";

/// Runtime settings. Read once and passed explicitly; nothing here is global.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimatorConfig {
    pub speed: SpeedModel,
    /// Catalog JSON to use instead of the built-in points.
    pub catalog_path: Option<PathBuf>,
}

impl EstimatorConfig {
    pub fn from_env() -> Result<Self, SpeedModelError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SpeedModelError> {
        let speed = match lookup(SPEED_MODEL_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => SpeedModel::default(),
        };
        let catalog_path = lookup(CATALOG_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            speed,
            catalog_path,
        })
    }

    pub fn load_catalog(&self) -> Result<DonationCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => DonationCatalog::from_file(path),
            None => Ok(DonationCatalog::builtin().clone()),
        }
    }
}
