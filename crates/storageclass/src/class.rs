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

//! Per-object storage class marker carried in user metadata

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Metadata entry for storage class
pub const AMZ_STORAGE_CLASS: &str = "x-amz-storage-class";
/// Canonical metadata entry for storage class
pub const AMZ_STORAGE_CLASS_CANONICAL: &str = "X-Amz-Storage-Class";

pub const STANDARD: &str = "STANDARD";
pub const REDUCED_REDUNDANCY: &str = "REDUCED_REDUNDANCY";

/// Storage class an object was written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageClass {
    Standard,
    ReducedRedundancy,
}

impl StorageClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageClass::Standard => STANDARD,
            StorageClass::ReducedRedundancy => REDUCED_REDUNDANCY,
        }
    }

    /// Maps a marker value to a class; anything unrecognized is `None`
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            STANDARD => Some(StorageClass::Standard),
            REDUCED_REDUNDANCY => Some(StorageClass::ReducedRedundancy),
            _ => None,
        }
    }

    /// Raw storage class marker from user metadata, checking both the wire and
    /// canonical header spellings
    pub fn marker_from_meta(user_defined: &HashMap<String, String>) -> Option<&str> {
        user_defined
            .get(AMZ_STORAGE_CLASS)
            .or_else(|| user_defined.get(AMZ_STORAGE_CLASS_CANONICAL))
            .map(String::as_str)
    }
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only Standard and RRS storage classes are accepted in object metadata
pub fn is_valid_storage_class_meta(sc: &str) -> bool {
    StorageClass::from_marker(sc).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_storage_class_meta() {
        assert!(is_valid_storage_class_meta("STANDARD"));
        assert!(is_valid_storage_class_meta("REDUCED_REDUNDANCY"));
        assert!(!is_valid_storage_class_meta(""));
        assert!(!is_valid_storage_class_meta("standard"));
        assert!(!is_valid_storage_class_meta("GLACIER"));
    }

    #[test]
    fn test_marker_from_meta() {
        let mut meta = HashMap::new();
        assert_eq!(StorageClass::marker_from_meta(&meta), None);

        meta.insert(AMZ_STORAGE_CLASS_CANONICAL.to_string(), "STANDARD".to_string());
        assert_eq!(StorageClass::marker_from_meta(&meta), Some("STANDARD"));

        meta.insert(AMZ_STORAGE_CLASS.to_string(), "REDUCED_REDUNDANCY".to_string());
        assert_eq!(StorageClass::marker_from_meta(&meta), Some("REDUCED_REDUNDANCY"));
    }

    #[test]
    fn test_serde_tokens() {
        assert_eq!(
            serde_json::to_string(&StorageClass::ReducedRedundancy).unwrap(),
            "\"REDUCED_REDUNDANCY\""
        );
        let sc: StorageClass = serde_json::from_str("\"STANDARD\"").unwrap();
        assert_eq!(sc, StorageClass::Standard);
    }
}
