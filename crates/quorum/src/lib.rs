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

//! # RustFS Quorum Management
//!
//! Per-object quorum derived from the erasure metadata stored on each disk.
//!
//! ## Quorum Rules
//!
//! - **Read Quorum**: D (data blocks of the latest agreeing metadata)
//! - **Write Quorum**: D + 1
//!
//! At least D disks must agree on the latest metadata before either quorum
//! is handed out.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use rustfs_quorum::{DiskError, ErasureInfo, FileMeta, LatestMetaAggregator, object_quorum_from_meta};
//!
//! fn main() -> anyhow::Result<()> {
//!     let now = Utc::now();
//!     let mut metas: Vec<Result<FileMeta, DiskError>> = vec![Ok(FileMeta::new(now, ErasureInfo::new(4, 2))); 5];
//!     metas.push(Err(DiskError::DiskNotFound));
//!
//!     let quorum = object_quorum_from_meta(&metas, &LatestMetaAggregator)?;
//!     assert_eq!(quorum.read_quorum, 4);
//!     assert_eq!(quorum.write_quorum, 5);
//!
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod error;
pub mod meta;
pub mod verifier;

pub use aggregate::{LatestMetaAggregator, MetadataAggregator};
pub use error::{DiskError, QuorumError};
pub use meta::{ErasureInfo, FileMeta};
pub use verifier::{ObjectQuorum, object_quorum_from_meta};
