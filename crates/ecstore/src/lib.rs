// Copyright 2024 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # RustFS EC Store
//!
//! Storage policy of an erasure set: which data/parity split a new object
//! gets, and which quorum an existing object needs.
//!
//! ## Example
//!
//! ```rust
//! use rustfs_ecstore::SetPolicy;
//! use rustfs_storageclass::{StorageClassConfig, StorageClassRegistry};
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use std::time::SystemTime;
//!
//! fn main() -> anyhow::Result<()> {
//!     let registry = Arc::new(StorageClassRegistry::new(StorageClassConfig::from_text("EC:4", "EC:2")?));
//!     let policy = SetPolicy::new(16, registry)?;
//!
//!     let meta = policy.new_file_meta(&HashMap::new(), SystemTime::now())?;
//!     let per_disk = vec![Ok(meta); 16];
//!     let quorum = policy.object_quorum(&per_disk)?;
//!     assert_eq!(quorum.write_quorum, quorum.read_quorum + 1);
//!
//!     Ok(())
//! }
//! ```

pub mod set_policy;

pub use set_policy::{PolicyError, PolicyStats, SetPolicy};
