use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    pet::{entities::PetProfile, ports::KeyValueStore},
};

pub fn pets_key(owner: &str) -> String {
    format!("pets:{owner}")
}

/// Reads and writes an owner's pet list as one JSON document.
pub struct PetStore<KV: KeyValueStore> {
    store: Arc<KV>,
}

impl<KV: KeyValueStore> PetStore<KV> {
    pub fn new(store: Arc<KV>) -> Self {
        Self { store }
    }

    /// Missing or unreadable data loads as an empty list.
    pub async fn load(&self, owner: &str) -> Result<Vec<PetProfile>, CoreError> {
        let key = pets_key(owner);
        let pets = match self.store.get(&key).await? {
            Some(raw) => decode_pets(&key, &raw),
            None => Vec::new(),
        };

        Ok(pets)
    }

    /// An empty list removes the key.
    pub async fn save(&self, owner: &str, pets: &[PetProfile]) -> Result<(), CoreError> {
        let key = pets_key(owner);

        if pets.is_empty() {
            return self.store.remove(&key).await;
        }

        let raw = serde_json::to_string(pets).map_err(|e| {
            tracing::error!("Failed to serialize pets: {}", e);
            CoreError::InternalServerError
        })?;

        self.store.set(&key, raw).await
    }

    pub async fn find(&self, owner: &str, pet_id: Uuid) -> Result<Option<PetProfile>, CoreError> {
        let pets = self.load(owner).await?;
        Ok(pets.into_iter().find(|p| p.id == pet_id))
    }
}

impl<KV: KeyValueStore> Clone for PetStore<KV> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

fn decode_pets(key: &str, raw: &str) -> Vec<PetProfile> {
    match serde_json::from_str::<Option<Vec<PetProfile>>>(raw) {
        Ok(pets) => pets.unwrap_or_default(),
        Err(e) => {
            warn!("Ignoring malformed data stored under \"{}\": {}", key, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::memory::InMemoryKeyValueStore;

    fn store() -> (Arc<InMemoryKeyValueStore>, PetStore<InMemoryKeyValueStore>) {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        (Arc::clone(&kv), PetStore::new(kv))
    }

    #[tokio::test]
    async fn test_missing_key_loads_empty() {
        let (_, pets) = store();
        assert!(pets.load("owner").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_data_loads_empty() {
        let (kv, pets) = store();

        for raw in ["{not json", "42", r#"{"pets": []}"#, r#"[{"name": 3}]"#] {
            kv.set(&pets_key("owner"), raw.to_string()).await.unwrap();
            assert!(pets.load("owner").await.unwrap().is_empty(), "raw: {raw}");
        }
    }

    #[tokio::test]
    async fn test_null_loads_empty() {
        let (kv, pets) = store();
        kv.set(&pets_key("owner"), "null".to_string()).await.unwrap();
        assert!(pets.load("owner").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (_, pets) = store();
        let rex = PetProfile::new("Rex".to_string(), Some("labrador".to_string()), Some(14.0));

        pets.save("owner", std::slice::from_ref(&rex)).await.unwrap();

        assert_eq!(pets.load("owner").await.unwrap(), vec![rex.clone()]);
        assert_eq!(pets.find("owner", rex.id).await.unwrap(), Some(rex));
        assert!(pets.load("someone-else").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_saving_empty_list_removes_key() {
        let (kv, pets) = store();
        let rex = PetProfile::new("Rex".to_string(), None, None);

        pets.save("owner", &[rex]).await.unwrap();
        pets.save("owner", &[]).await.unwrap();

        assert_eq!(kv.get(&pets_key("owner")).await.unwrap(), None);
    }
}
