use log::info;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::db::jordan_spots::jordan_spots;
use crate::models::spot::Spot;

/// Read-only, ordered set of spots shared by every request.
#[derive(Debug, Clone)]
pub struct SpotCatalog {
    spots: Vec<Spot>,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Empty,
    InvalidId { name: String },
    DuplicateId(u32),
    DuplicateName(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "Failed to read spots file: {}", err),
            CatalogError::Parse(err) => write!(f, "Failed to parse spots file: {}", err),
            CatalogError::Empty => write!(f, "Spot catalog is empty"),
            CatalogError::InvalidId { name } => write!(f, "Spot '{}' must have a positive id", name),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate spot id: {}", id),
            CatalogError::DuplicateName(name) => write!(f, "Duplicate spot name: {}", name),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

impl SpotCatalog {
    /// Wrap spots as given, without uniqueness checks.
    pub fn new(spots: Vec<Spot>) -> Self {
        Self { spots }
    }

    /// Build a catalog, rejecting empty lists, zero ids and repeated ids or names.
    pub fn validated(spots: Vec<Spot>) -> Result<Self, CatalogError> {
        if spots.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for spot in &spots {
            if spot.id == 0 {
                return Err(CatalogError::InvalidId {
                    name: spot.name.clone(),
                });
            }
            if !ids.insert(spot.id) {
                return Err(CatalogError::DuplicateId(spot.id));
            }
            if !names.insert(spot.name.as_str()) {
                return Err(CatalogError::DuplicateName(spot.name.clone()));
            }
        }

        Ok(Self { spots })
    }

    pub fn jordan() -> Self {
        Self::new(jordan_spots())
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let spots: Vec<Spot> = serde_json::from_str(json)?;
        Self::validated(spots)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

/// Load the catalog from `path` when given, else the built-in Jordan spots.
pub fn load_catalog(path: Option<&Path>) -> Result<Arc<SpotCatalog>, CatalogError> {
    let catalog = match path {
        Some(path) => {
            info!("Loading spot catalog from {}", path.display());
            SpotCatalog::from_json_file(path)?
        }
        None => SpotCatalog::jordan(),
    };

    info!("Spot catalog ready with {} spots", catalog.len());
    Ok(Arc::new(catalog))
}
