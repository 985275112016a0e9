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

//! Per-disk erasure metadata records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Erasure parameters an object version was written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ErasureInfo {
    /// Number of data blocks (D)
    pub data_blocks: usize,
    /// Number of parity blocks (P)
    pub parity_blocks: usize,
}

impl ErasureInfo {
    pub fn new(data_blocks: usize, parity_blocks: usize) -> Self {
        Self {
            data_blocks,
            parity_blocks,
        }
    }

    /// Total number of disks (N = D + P)
    pub fn total_blocks(&self) -> usize {
        self.data_blocks + self.parity_blocks
    }
}

/// One disk's copy of an object's metadata.
///
/// Every disk holding a fragment of the same object version carries an
/// identical copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// Modification time of the object version
    pub mod_time: DateTime<Utc>,

    /// Erasure parameters
    pub erasure: ErasureInfo,

    /// Storage class marker the object was written with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,
}

impl FileMeta {
    pub fn new(mod_time: DateTime<Utc>, erasure: ErasureInfo) -> Self {
        Self {
            mod_time,
            erasure,
            storage_class: None,
        }
    }

    /// A record with no data blocks cannot describe a readable object
    pub fn is_valid(&self) -> bool {
        self.erasure.data_blocks > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erasure_info() {
        let info = ErasureInfo::new(6, 4);
        assert_eq!(info.total_blocks(), 10);
    }

    #[test]
    fn test_file_meta_validity() {
        let now = Utc::now();
        assert!(FileMeta::new(now, ErasureInfo::new(2, 2)).is_valid());
        assert!(!FileMeta::new(now, ErasureInfo::default()).is_valid());
    }

    #[test]
    fn test_file_meta_json() {
        let meta = FileMeta::new(DateTime::from_timestamp(1_700_000_000, 0).unwrap(), ErasureInfo::new(4, 2));
        let json = serde_json::to_string(&meta).unwrap();
        assert!(!json.contains("storage_class"));
        let back: FileMeta = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meta);
    }
}
