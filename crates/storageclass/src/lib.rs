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

//! # RustFS Storage Class
//!
//! Redundancy policy for erasure-coded object storage.
//!
//! ## Storage Class Format
//!
//! - **Text form**: `EC:<parity>`, e.g. `EC:4`; the empty string means unset
//! - **Standard**: default class, parity defaults to N/2
//! - **Reduced redundancy (RRS)**: lower parity, defaults to 2
//!
//! Valid configurations satisfy `2 <= rrs < standard <= N/2` for an erasure
//! set of N >= 4 disks, and RRS is unavailable on exactly 4 disks.
//!
//! ## Example
//!
//! ```rust
//! use rustfs_storageclass::{StorageClass, StorageClassConfig, StorageClassRegistry};
//!
//! fn main() -> anyhow::Result<()> {
//!     let registry = StorageClassRegistry::default();
//!     registry.reconfigure(StorageClassConfig::from_text("EC:4", "EC:2")?, 16)?;
//!
//!     let (data, parity) = registry.snapshot().redundancy_count(Some(StorageClass::Standard), 16);
//!     assert_eq!((data, parity), (12, 4));
//!
//!     Ok(())
//! }
//! ```

pub mod class;
pub mod config;
pub mod error;
pub mod redundancy;
pub mod registry;
pub mod spec;
pub mod validate;

pub use class::{StorageClass, is_valid_storage_class_meta};
pub use config::StorageClassConfig;
pub use error::{ParityClass, ParseError, StorageClassError, ValidationError};
pub use redundancy::DEFAULT_RRS_PARITY;
pub use registry::StorageClassRegistry;
pub use spec::{Scheme, StorageClassSpec};
pub use validate::{validate_rrs_parity, validate_ss_parity};
