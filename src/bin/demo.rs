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

use tiered_storage::{Bucket, MemTierStore, Result, StorageService};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let service = Arc::new(StorageService::new(MemTierStore::infrequent_access()));
    let bucket = Bucket::new("my-s3", service);

    bucket.upload_object("my-key", b"my-value".to_vec()).await?;
    bucket
        .upload_object("username", b"test-user-1".to_vec())
        .await?;

    println!("Objects: {:?}", bucket.list_objects().await?);

    if let Some(object) = bucket.download_object("username").await? {
        println!(
            "Object data for username: {}",
            String::from_utf8_lossy(&object.data)
        );
    }

    bucket.delete_object("my-key").await?;
    println!("After removing one object: {:?}", bucket.list_objects().await?);
    Ok(())
}
