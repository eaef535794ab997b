// Copyright 2022 The Engula Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{StorageClass, StorageStrategy};
use crate::{error::Result, object::Object};

type Tier = Arc<Mutex<HashMap<String, Object>>>;

// Map-backed store shared by every storage class, parameterized by the tier
// label. One lock per store instance.
#[derive(Clone)]
pub struct MemTierStore {
    class: StorageClass,
    objects: Tier,
}

impl MemTierStore {
    pub fn new(class: StorageClass) -> Self {
        Self {
            class,
            objects: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn standard() -> Self {
        Self::new(StorageClass::Standard)
    }

    pub fn infrequent_access() -> Self {
        Self::new(StorageClass::InfrequentAccess)
    }

    pub fn class(&self) -> StorageClass {
        self.class
    }

    pub async fn len(&self) -> usize {
        let objects = self.objects.lock().await;
        objects.len()
    }

    pub async fn is_empty(&self) -> bool {
        let objects = self.objects.lock().await;
        objects.is_empty()
    }
}

#[async_trait]
impl StorageStrategy for MemTierStore {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<()> {
        let object = Object::new(key, data);
        let mut objects = self.objects.lock().await;
        objects.insert(key.to_owned(), object);
        tracing::info!("{} stored in {} storage class", key, self.class);
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<Object>> {
        let objects = self.objects.lock().await;
        Ok(objects.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut objects = self.objects.lock().await;
        objects.remove(key);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>> {
        let objects = self.objects.lock().await;
        Ok(objects.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_retrieve() -> Result<()> {
        let store = MemTierStore::standard();
        store.put("k1", b"v1".to_vec()).await?;

        let object = store.retrieve("k1").await?.unwrap();
        assert_eq!(object.key, "k1");
        assert_eq!(object.data, b"v1".to_vec());
        assert!(object.metadata.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn last_write_wins() -> Result<()> {
        let store = MemTierStore::standard();
        store.put("k1", b"old".to_vec()).await?;
        store.put("k1", b"new".to_vec()).await?;

        let object = store.retrieve("k1").await?.unwrap();
        assert_eq!(object.data, b"new".to_vec());
        assert_eq!(store.len().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn retrieve_missing_key_is_none() -> Result<()> {
        let store = MemTierStore::infrequent_access();
        assert!(store.retrieve("nope").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_key() -> Result<()> {
        let store = MemTierStore::standard();
        store.put("k1", b"v1".to_vec()).await?;
        store.delete("k1").await?;

        assert!(store.retrieve("k1").await?.is_none());
        assert!(store.is_empty().await);
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_key_is_noop() -> Result<()> {
        let store = MemTierStore::standard();
        store.put("k1", b"v1".to_vec()).await?;
        store.delete("nope").await?;

        let mut keys = store.list().await?;
        keys.sort();
        assert_eq!(keys, ["k1"]);
        Ok(())
    }

    #[tokio::test]
    async fn list_returns_all_keys() -> Result<()> {
        let store = MemTierStore::infrequent_access();
        assert!(store.list().await?.is_empty());

        store.put("k1", b"v1".to_vec()).await?;
        store.put("k2", b"v2".to_vec()).await?;
        store.put("k3", b"v3".to_vec()).await?;

        let mut keys = store.list().await?;
        keys.sort();
        assert_eq!(keys, ["k1", "k2", "k3"]);
        Ok(())
    }
}
