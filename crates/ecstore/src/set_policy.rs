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

//! Erasure set storage policy
//!
//! Ties the storage class registry to one erasure set: validates configuration
//! against the set size before it takes effect, stamps new objects with their
//! data/parity split, and derives object quorum from per-disk metadata.

use metrics::counter;
use rustfs_quorum::{
    DiskError, ErasureInfo, FileMeta, LatestMetaAggregator, MetadataAggregator, ObjectQuorum, QuorumError,
    object_quorum_from_meta,
};
use rustfs_storageclass::{StorageClass, StorageClassConfig, StorageClassRegistry, StorageClassSpec, ValidationError};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Storage policy error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Object metadata carries a storage class other than STANDARD or REDUCED_REDUNDANCY
    #[error("Invalid storage class: {0}")]
    InvalidStorageClass(String),

    /// Resolved split does not cover the set with at least one data block
    #[error("Invalid erasure split {data_blocks}+{parity_blocks} for a set of {disks} disks")]
    InvalidErasure {
        data_blocks: usize,
        parity_blocks: usize,
        disks: usize,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Quorum(#[from] QuorumError),
}

/// Storage policy for a single erasure set
pub struct SetPolicy {
    /// Number of disks in the set
    set_drive_count: usize,
    /// Shared storage class configuration
    registry: Arc<StorageClassRegistry>,
    /// Picks the latest agreeing metadata record
    aggregator: Arc<dyn MetadataAggregator>,
    /// Metrics: objects stamped with erasure parameters
    metrics_objects_stamped: AtomicU64,
    /// Metrics: quorum resolutions
    metrics_quorum_checks: AtomicU64,
    /// Metrics: quorum resolutions that failed
    metrics_quorum_failures: AtomicU64,
    /// Metrics: configurations published
    metrics_reconfigured: AtomicU64,
    /// Metrics: configurations rejected by validation
    metrics_reconfigure_rejected: AtomicU64,
}

impl SetPolicy {
    /// Create a policy for a set of `set_drive_count` disks.
    ///
    /// The set size is registered with the registry, so later reconfiguration
    /// from any set sharing it is also validated against this set. The
    /// registry's current configuration must be valid for this set size.
    pub fn new(set_drive_count: usize, registry: Arc<StorageClassRegistry>) -> Result<Self, PolicyError> {
        Self::with_aggregator(set_drive_count, registry, Arc::new(LatestMetaAggregator))
    }

    /// Same as [`SetPolicy::new`] with a custom metadata aggregator
    pub fn with_aggregator(
        set_drive_count: usize,
        registry: Arc<StorageClassRegistry>,
        aggregator: Arc<dyn MetadataAggregator>,
    ) -> Result<Self, PolicyError> {
        registry.register_set(set_drive_count)?;
        let config = registry.snapshot();

        info!(
            set_drive_count,
            standard = %config.standard,
            rrs = %config.rrs,
            "Erasure set storage policy initialized"
        );

        Ok(Self {
            set_drive_count,
            registry,
            aggregator,
            metrics_objects_stamped: AtomicU64::new(0),
            metrics_quorum_checks: AtomicU64::new(0),
            metrics_quorum_failures: AtomicU64::new(0),
            metrics_reconfigured: AtomicU64::new(0),
            metrics_reconfigure_rejected: AtomicU64::new(0),
        })
    }

    pub fn set_drive_count(&self) -> usize {
        self.set_drive_count
    }

    /// Currently active storage class configuration
    pub fn config(&self) -> Arc<StorageClassConfig> {
        self.registry.snapshot()
    }

    /// Validate and publish a new storage class configuration
    pub fn reconfigure(&self, config: StorageClassConfig) -> Result<(), PolicyError> {
        match self.registry.reconfigure(config, self.set_drive_count) {
            Ok(()) => {
                self.metrics_reconfigured.fetch_add(1, Ordering::Relaxed);
                counter!("rustfs_storage_class_reconfigure_total").increment(1);
                Ok(())
            }
            Err(e) => {
                self.metrics_reconfigure_rejected.fetch_add(1, Ordering::Relaxed);
                counter!("rustfs_storage_class_reconfigure_rejected_total").increment(1);
                Err(e.into())
            }
        }
    }

    /// Erasure parameters for a new object with the given user metadata
    pub fn new_erasure_info(&self, user_defined: &HashMap<String, String>) -> Result<ErasureInfo, PolicyError> {
        let class = match StorageClass::marker_from_meta(user_defined) {
            Some(marker) => match StorageClass::from_marker(marker) {
                Some(class) => Some(class),
                None => return Err(PolicyError::InvalidStorageClass(marker.to_string())),
            },
            None => None,
        };

        let (data, parity) = self.registry.snapshot().redundancy_count(class, self.set_drive_count);
        let erasure = ErasureInfo::new(data, parity);
        if erasure.data_blocks == 0 || erasure.total_blocks() != self.set_drive_count {
            warn!(
                "Refusing to stamp object with {} data and {} parity blocks on {} disks",
                data, parity, self.set_drive_count
            );
            return Err(PolicyError::InvalidErasure {
                data_blocks: data,
                parity_blocks: parity,
                disks: self.set_drive_count,
            });
        }
        debug!(
            "Stamping object with {} data and {} parity blocks (class {:?})",
            data, parity, class
        );

        self.metrics_objects_stamped.fetch_add(1, Ordering::Relaxed);
        let label = class.map(|c| c.as_str()).unwrap_or("NONE");
        counter!("rustfs_storage_class_objects_total", "class" => label).increment(1);

        Ok(erasure)
    }

    /// Metadata record to write to every disk of the set for a new object version
    pub fn new_file_meta(&self, user_defined: &HashMap<String, String>, mod_time: SystemTime) -> Result<FileMeta, PolicyError> {
        let erasure = self.new_erasure_info(user_defined)?;
        let mut meta = FileMeta::new(mod_time.into(), erasure);
        meta.storage_class = StorageClass::marker_from_meta(user_defined).map(str::to_string);
        Ok(meta)
    }

    /// Read and write quorum for an object from per-disk metadata fetch results
    pub fn object_quorum(&self, metas: &[Result<FileMeta, DiskError>]) -> Result<ObjectQuorum, QuorumError> {
        self.metrics_quorum_checks.fetch_add(1, Ordering::Relaxed);

        if metas.len() != self.set_drive_count {
            debug!("Got metadata from {} disks for a set of {}", metas.len(), self.set_drive_count);
        }

        match object_quorum_from_meta(metas, self.aggregator.as_ref()) {
            Ok(quorum) => {
                debug!(
                    "Object quorum resolved: read {}, write {}",
                    quorum.read_quorum, quorum.write_quorum
                );
                Ok(quorum)
            }
            Err(e) => {
                self.metrics_quorum_failures.fetch_add(1, Ordering::Relaxed);
                counter!("rustfs_object_quorum_failures_total").increment(1);
                let failed = metas.iter().filter(|m| m.is_err()).count();
                warn!(
                    "Object quorum NOT met: {} ({}/{} disks failed to return metadata)",
                    e,
                    failed,
                    metas.len()
                );
                Err(e)
            }
        }
    }

    /// Get policy statistics
    pub fn stats(&self) -> PolicyStats {
        let config = self.registry.snapshot();
        PolicyStats {
            set_drive_count: self.set_drive_count,
            standard: config.standard,
            rrs: config.rrs,
            objects_stamped: self.metrics_objects_stamped.load(Ordering::Relaxed),
            quorum_checks: self.metrics_quorum_checks.load(Ordering::Relaxed),
            quorum_failures: self.metrics_quorum_failures.load(Ordering::Relaxed),
            reconfigured: self.metrics_reconfigured.load(Ordering::Relaxed),
            reconfigure_rejected: self.metrics_reconfigure_rejected.load(Ordering::Relaxed),
        }
    }
}

/// Storage policy statistics
#[derive(Debug, Clone)]
pub struct PolicyStats {
    pub set_drive_count: usize,
    pub standard: StorageClassSpec,
    pub rrs: StorageClassSpec,
    pub objects_stamped: u64,
    pub quorum_checks: u64,
    pub quorum_failures: u64,
    pub reconfigured: u64,
    pub reconfigure_rejected: u64,
}
