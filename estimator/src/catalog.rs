use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use once_cell::sync::Lazy;
use shared::{DonationPoint, GeoPoint, PointCategory, Priority};

use crate::geo::{validate_point, CoordinateError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid catalog definition: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog is empty")]
    Empty,
    #[error("duplicate donation point id {0:?}")]
    DuplicateId(String),
    #[error("donation point {id:?} has an invalid location: {source}")]
    InvalidLocation {
        id: String,
        #[source]
        source: CoordinateError,
    },
    #[error("unknown donation point {0:?}")]
    UnknownPoint(String),
}

/// Immutable set of donation points, in display order.
#[derive(Debug, Clone)]
pub struct DonationCatalog {
    points: Vec<DonationPoint>,
}

static BUILTIN: Lazy<DonationCatalog> = Lazy::new(|| DonationCatalog {
    points: builtin_points(),
});

impl DonationCatalog {
    /// The São Paulo collection and distribution sites shipped with the app.
    pub fn builtin() -> &'static DonationCatalog {
        &BUILTIN
    }

    pub fn new(points: Vec<DonationPoint>) -> Result<Self, CatalogError> {
        if points.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(points.len());
        for point in &points {
            if !seen.insert(point.id.as_str()) {
                return Err(CatalogError::DuplicateId(point.id.clone()));
            }
            validate_point(point.location).map_err(|source| CatalogError::InvalidLocation {
                id: point.id.clone(),
                source,
            })?;
        }
        Ok(Self { points })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        tracing::info!(
            "loaded {} donation points from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let points: Vec<DonationPoint> = serde_json::from_reader(reader)?;
        Self::new(points)
    }

    pub fn points(&self) -> &[DonationPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DonationPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn by_category(&self, category: PointCategory) -> impl Iterator<Item = &DonationPoint> {
        self.points.iter().filter(move |p| p.category == category)
    }

    /// Looks up every id, keeping the caller's order.
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<&DonationPoint>, CatalogError> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                self.get(id)
                    .ok_or_else(|| CatalogError::UnknownPoint(id.to_string()))
            })
            .collect()
    }
}

fn builtin_points() -> Vec<DonationPoint> {
    let point = |id: &str,
                 name: &str,
                 address: &str,
                 (lat, lon): (f64, f64),
                 category: PointCategory,
                 hours: &str,
                 phone: &str,
                 priority: Priority| DonationPoint {
        id: id.into(),
        name: name.into(),
        address: address.into(),
        location: GeoPoint::new(lat, lon),
        category,
        hours: hours.into(),
        phone: Some(phone.into()),
        priority: Some(priority),
    };

    vec![
        point(
            "1",
            "Centro de Coleta Alimentar",
            "Rua das Flores, 123 - Centro",
            (-23.5505, -46.6333),
            PointCategory::Collection,
            "08:00 - 18:00",
            "(11) 1234-5678",
            Priority::High,
        ),
        point(
            "2",
            "Banco de Alimentos São Paulo",
            "Av. Paulista, 456 - Bela Vista",
            (-23.5615, -46.6565),
            PointCategory::Distribution,
            "09:00 - 17:00",
            "(11) 9876-5432",
            Priority::Medium,
        ),
        point(
            "3",
            "ONG Alimenta Esperança",
            "Rua da Solidariedade, 789 - Vila Madalena",
            (-23.5448, -46.6886),
            PointCategory::Collection,
            "24 horas",
            "(11) 5555-4444",
            Priority::High,
        ),
        point(
            "4",
            "Mercado Solidário",
            "Av. Ibirapuera, 321 - Moema",
            (-23.5732, -46.6500),
            PointCategory::Collection,
            "06:00 - 22:00",
            "(11) 7777-8888",
            Priority::Medium,
        ),
        point(
            "5",
            "Centro Comunitário Esperança",
            "Rua das Acácias, 654 - Ipiranga",
            (-23.5863, -46.6125),
            PointCategory::Distribution,
            "08:00 - 16:00",
            "(11) 3333-2222",
            Priority::Low,
        ),
    ]
}
