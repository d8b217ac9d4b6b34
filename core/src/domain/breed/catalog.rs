use std::{collections::HashMap, path::Path};

use tracing::info;
use unicode_normalization::UnicodeNormalization;

use crate::domain::breed::{
    defaults::canonical_breeds,
    entities::BreedRecord,
    errors::CatalogError,
};

/// Immutable breed reference table keyed by canonical breed id.
#[derive(Debug, Clone)]
pub struct BreedCatalog {
    breeds: HashMap<String, BreedRecord>,
}

impl BreedCatalog {
    pub fn new(records: Vec<BreedRecord>) -> Result<Self, CatalogError> {
        let mut breeds = HashMap::with_capacity(records.len());

        for record in records {
            if record.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }

            if !record.average_weight_kg.is_finite() || record.average_weight_kg <= 0.0 {
                return Err(CatalogError::InvalidWeight {
                    id: record.id,
                    weight_kg: record.average_weight_kg,
                });
            }

            if breeds.contains_key(&record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }

            breeds.insert(record.id.clone(), record);
        }

        Ok(Self { breeds })
    }

    /// The built-in table shipped with the service.
    pub fn canonical() -> Result<Self, CatalogError> {
        Self::new(canonical_breeds())
    }

    /// Loads a substitute table from a JSON array of breed records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let records: Vec<BreedRecord> =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let catalog = Self::new(records)?;
        info!(
            "Loaded {} breeds from {}",
            catalog.len(),
            path.display()
        );

        Ok(catalog)
    }

    /// Average adult weight for a canonical id. Case-sensitive.
    pub fn lookup_weight(&self, breed_id: &str) -> Option<f64> {
        self.breeds.get(breed_id).map(|b| b.average_weight_kg)
    }

    pub fn get(&self, breed_id: &str) -> Option<&BreedRecord> {
        self.breeds.get(breed_id)
    }

    pub fn contains(&self, breed_id: &str) -> bool {
        self.breeds.contains_key(breed_id)
    }

    /// Resolves user input against ids, normalized ids and display names.
    pub fn resolve(&self, input: &str) -> Option<&BreedRecord> {
        if let Some(record) = self.breeds.get(input) {
            return Some(record);
        }

        let normalized = normalize_breed_id(input);
        if let Some(record) = self.breeds.get(&normalized) {
            return Some(record);
        }

        let wanted = input.trim().to_lowercase();
        self.breeds
            .values()
            .find(|b| b.display_name.to_lowercase() == wanted)
    }

    /// All breeds ordered by id.
    pub fn list(&self) -> Vec<&BreedRecord> {
        let mut breeds: Vec<&BreedRecord> = self.breeds.values().collect();
        breeds.sort_by(|a, b| a.id.cmp(&b.id));
        breeds
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

/// Folds accents, lower-cases and strips everything that is not an ASCII letter
/// or digit, so "Golden Retriever" becomes "goldenretriever" and "Pastor Alemão"
/// becomes "pastoralemao".
pub fn normalize_breed_id(input: &str) -> String {
    input
        .nfd()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
