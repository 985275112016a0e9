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

//! Quorum-related error types

use thiserror::Error;

/// Errors related to quorum operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuorumError {
    /// Insufficient disks for write quorum
    #[error("Insufficient write quorum: required {required}, available {available}")]
    InsufficientWriteQuorum { required: usize, available: usize },

    /// Insufficient disks agree on the latest metadata for read quorum
    #[error("Insufficient read quorum: required {required}, available {available}")]
    InsufficientReadQuorum { required: usize, available: usize },

    /// None of the disks returned usable metadata
    #[error("No valid metadata found on any of {disks} disks")]
    NoValidMetadata { disks: usize },
}

/// Failure to fetch an object's metadata from one disk
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiskError {
    #[error("disk not found")]
    DiskNotFound,

    #[error("file not found")]
    FileNotFound,

    #[error("file is corrupted")]
    FileCorrupt,

    #[error("io error: {0}")]
    Io(String),
}
