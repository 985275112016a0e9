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

//! Storage class registry
//!
//! Holds the current generation of [`StorageClassConfig`]. Readers take a
//! whole-generation snapshot; writers build the next generation off to the
//! side and publish it with a single pointer swap, so nobody ever sees the
//! standard class of one generation paired with the RRS class of another.

use crate::config::StorageClassConfig;
use crate::error::ValidationError;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Shared handle to the active storage class configuration.
///
/// Every erasure set reading from the registry registers its disk count, and
/// a new configuration is only published once it is valid for all of them.
#[derive(Debug, Default)]
pub struct StorageClassRegistry {
    current: RwLock<Arc<StorageClassConfig>>,
    /// Disk counts of the erasure sets sharing this registry
    set_sizes: Mutex<BTreeSet<usize>>,
}

impl StorageClassRegistry {
    /// Create a registry publishing `config` as its first generation.
    ///
    /// The initial config is checked when sets register through
    /// [`StorageClassRegistry::register_set`].
    pub fn new(config: StorageClassConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(config)),
            set_sizes: Mutex::new(BTreeSet::new()),
        }
    }

    /// Current generation
    pub fn snapshot(&self) -> Arc<StorageClassConfig> {
        // The guarded value is a single Arc; a panicked writer cannot leave it half-written.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Register an erasure set of `disks` disks. Fails, without registering,
    /// if the current generation is not valid for that set size.
    pub fn register_set(&self, disks: usize) -> Result<(), ValidationError> {
        let mut sizes = self.set_sizes.lock().unwrap_or_else(PoisonError::into_inner);
        self.snapshot().validate(disks)?;
        if sizes.insert(disks) {
            debug!(disks, "Registered erasure set size");
        }
        Ok(())
    }

    /// Disk counts of all registered erasure sets, ascending
    pub fn set_sizes(&self) -> Vec<usize> {
        let sizes = self.set_sizes.lock().unwrap_or_else(PoisonError::into_inner);
        sizes.iter().copied().collect()
    }

    /// Validate `config` against `disks` and every registered set size, then
    /// publish it and register `disks`. On error the previous generation stays
    /// active.
    pub fn reconfigure(&self, config: StorageClassConfig, disks: usize) -> Result<(), ValidationError> {
        // Held across validate and publish so no set registers in between
        let mut sizes = self.set_sizes.lock().unwrap_or_else(PoisonError::into_inner);

        let check = std::iter::once(disks)
            .chain(sizes.iter().copied())
            .try_for_each(|set_disks| config.validate(set_disks));
        if let Err(e) = check {
            warn!(
                standard = %config.standard,
                rrs = %config.rrs,
                disks,
                error = %e,
                "Rejected storage class configuration"
            );
            return Err(e);
        }

        sizes.insert(disks);
        self.replace(config);
        info!(
            standard = %config.standard,
            rrs = %config.rrs,
            sets = sizes.len(),
            "Storage class configuration published"
        );
        Ok(())
    }

    fn replace(&self, config: StorageClassConfig) {
        let next = Arc::new(config);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
    }
}
