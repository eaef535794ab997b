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

use std::sync::Arc;

use crate::{
    error::Result, object::Object, service::StorageService, storage::StorageStrategy,
};

// Named handle over a shared storage service. The name is display-only: it
// does not namespace keys, so buckets on the same service see the same
// objects.
pub struct Bucket<S>
where
    S: StorageStrategy,
{
    name: String,
    service: Arc<StorageService<S>>,
}

impl<S> Bucket<S>
where
    S: StorageStrategy,
{
    pub fn new(name: impl Into<String>, service: Arc<StorageService<S>>) -> Self {
        Self {
            name: name.into(),
            service,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn upload_object(&self, key: &str, data: Vec<u8>) -> Result<()> {
        self.service.put(key, data).await
    }

    pub async fn download_object(&self, key: &str) -> Result<Option<Object>> {
        self.service.retrieve(key).await
    }

    pub async fn delete_object(&self, key: &str) -> Result<()> {
        self.service.delete(key).await
    }

    pub async fn list_objects(&self) -> Result<Vec<String>> {
        self.service.list().await
    }
}
