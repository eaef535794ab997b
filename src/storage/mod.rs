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

mod mem;

use async_trait::async_trait;
pub use mem::MemTierStore;

use crate::{error::Result, object::Object};

// Capability set every storage tier provides. Key collisions overwrite
// (last write wins), delete on a missing key is a no-op, and list order is
// unspecified.
#[async_trait]
pub trait StorageStrategy: Send + Sync {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<()>;

    // `Ok(None)` when the key does not exist.
    async fn retrieve(&self, key: &str) -> Result<Option<Object>>;

    async fn delete(&self, key: &str) -> Result<()>;

    async fn list(&self) -> Result<Vec<String>>;
}

// Tier label. Tiers are behaviorally identical until a migration policy
// exists, but stay distinguishable in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageClass {
    Standard,
    InfrequentAccess,
}

impl std::fmt::Display for StorageClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::InfrequentAccess => write!(f, "Infrequent Access"),
        }
    }
}
