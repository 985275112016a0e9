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

//! Administrator selected storage class configuration

use crate::error::{ParityClass, StorageClassError, ValidationError};
use crate::spec::StorageClassSpec;
use crate::validate::{validate_rrs_parity, validate_ss_parity};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable holding the standard storage class, e.g. `EC:4`
pub const ENV_STORAGE_CLASS_STANDARD: &str = "RUSTFS_STORAGE_CLASS_STANDARD";
/// Environment variable holding the reduced redundancy storage class, e.g. `EC:2`
pub const ENV_STORAGE_CLASS_RRS: &str = "RUSTFS_STORAGE_CLASS_RRS";

/// Standard and reduced redundancy storage classes.
///
/// Serialized as `{"standard": "EC:4", "rrs": "EC:2"}`; an empty string is an
/// unset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StorageClassConfig {
    #[serde(default)]
    pub standard: StorageClassSpec,
    #[serde(default)]
    pub rrs: StorageClassSpec,
}

impl StorageClassConfig {
    pub fn new(standard: StorageClassSpec, rrs: StorageClassSpec) -> Self {
        Self { standard, rrs }
    }

    /// Builds a config from the two textual inputs
    pub fn from_text(standard: &str, rrs: &str) -> Result<Self, StorageClassError> {
        let standard = StorageClassSpec::from_text(standard).map_err(|source| StorageClassError::Parse {
            class: ParityClass::Standard,
            source,
        })?;
        let rrs = StorageClassSpec::from_text(rrs).map_err(|source| StorageClassError::Parse {
            class: ParityClass::ReducedRedundancy,
            source,
        })?;

        Ok(Self { standard, rrs })
    }

    /// Builds a config from `RUSTFS_STORAGE_CLASS_STANDARD` and `RUSTFS_STORAGE_CLASS_RRS`
    pub fn from_env() -> Result<Self, StorageClassError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StorageClassConfig::from_env`] with a caller supplied lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StorageClassError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let standard = lookup(ENV_STORAGE_CLASS_STANDARD).unwrap_or_default();
        let rrs = lookup(ENV_STORAGE_CLASS_RRS).unwrap_or_default();
        debug!(standard = %standard, rrs = %rrs, "Loading storage class configuration");

        Self::from_text(standard.trim(), rrs.trim())
    }

    /// Cross-checks both parities against each other and the disk count.
    ///
    /// A class that is unset is not checked on its own, so an entirely unset
    /// config is valid for any set size.
    pub fn validate(&self, disks: usize) -> Result<(), ValidationError> {
        if self.standard.is_set() {
            validate_ss_parity(self.standard.parity(), self.rrs.parity(), disks)?;
        }
        if self.rrs.is_set() {
            validate_rrs_parity(self.rrs.parity(), self.standard.parity(), disks)?;
        }
        Ok(())
    }
}
