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

//! Data/parity split for newly written objects

use crate::class::StorageClass;
use crate::config::StorageClassConfig;

/// Parity used for RRS objects when the RRS class is unset
pub const DEFAULT_RRS_PARITY: usize = 2;

impl StorageClassConfig {
    /// Returns `(data, parity)` drive counts for an object of the given class.
    ///
    /// - no class: parity = disks / 2
    /// - RRS: configured RRS parity, else [`DEFAULT_RRS_PARITY`]
    /// - standard: configured standard parity, else disks / 2
    ///
    /// Data is always the remaining disks. This does not re-run validation;
    /// the config is expected to have been validated when it was published.
    pub fn redundancy_count(&self, class: Option<StorageClass>, total_disks: usize) -> (usize, usize) {
        let parity = match class {
            Some(StorageClass::ReducedRedundancy) if self.rrs.is_set() => self.rrs.parity(),
            Some(StorageClass::ReducedRedundancy) => DEFAULT_RRS_PARITY,
            Some(StorageClass::Standard) if self.standard.is_set() => self.standard.parity(),
            _ => total_disks / 2,
        };

        (total_disks.saturating_sub(parity), parity)
    }

    /// Like [`StorageClassConfig::redundancy_count`] for a raw metadata marker.
    /// Unknown markers get the default split.
    pub fn redundancy_count_for_meta(&self, marker: &str, total_disks: usize) -> (usize, usize) {
        self.redundancy_count(StorageClass::from_marker(marker), total_disks)
    }
}
