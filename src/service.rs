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

use crate::{error::Result, object::Object, storage::StorageStrategy};

// Binds one storage strategy at construction and forwards every operation
// unchanged. Cross-cutting concerns (metrics, encryption, tier migration)
// would hook in here without touching Bucket or strategy code.
pub struct StorageService<S>
where
    S: StorageStrategy,
{
    strategy: S,
}

impl<S> StorageService<S>
where
    S: StorageStrategy,
{
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub async fn put(&self, key: &str, data: Vec<u8>) -> Result<()> {
        self.strategy.put(key, data).await
    }

    pub async fn retrieve(&self, key: &str) -> Result<Option<Object>> {
        self.strategy.retrieve(key).await
    }

    pub async fn delete(&self, key: &str) -> Result<()> {
        self.strategy.delete(key).await
    }

    pub async fn list(&self) -> Result<Vec<String>> {
        self.strategy.list().await
    }
}
