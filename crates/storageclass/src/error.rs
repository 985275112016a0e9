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

//! Storage class error types

use std::num::ParseIntError;
use thiserror::Error;

/// Which storage class a parity value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParityClass {
    Standard,
    ReducedRedundancy,
}

impl std::fmt::Display for ParityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParityClass::Standard => write!(f, "Standard storage class"),
            ParityClass::ReducedRedundancy => write!(f, "Reduced redundancy storage class"),
        }
    }
}

/// Malformed storage class text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Fewer than the two `SCHEME:PARITY` sections
    #[error("Too few sections in {input:?}")]
    TooFewSections { input: String },

    /// More than the two `SCHEME:PARITY` sections
    #[error("Too many sections in {input:?}")]
    TooManySections { input: String },

    /// Scheme token other than `EC`
    #[error("Unsupported scheme {scheme:?}, supported scheme is EC")]
    UnsupportedScheme { scheme: String },

    /// Parity section is not an unsigned integer
    #[error("Invalid parity {value:?}: {source}")]
    InvalidParity {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Parity with a sign or leading zeros, e.g. `+3` or `03`
    #[error("Invalid parity {value:?}: expected plain decimal digits without leading zeros")]
    NonCanonicalParity { value: String },
}

/// Parity values that are inconsistent with each other or with the disk count
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Fewer than four disks means the set is not erasure coded
    #[error("Setting storage class only allowed for erasure coding mode (need at least 4 disks, have {disks})")]
    ErasureModeRequired { disks: usize },

    #[error("Reduced redundancy storage class not supported for {disks} disk setup")]
    ReducedRedundancyUnsupported { disks: usize },

    #[error("{class} parity should be greater than or equal to {minimum}, got {actual}")]
    ParityTooLow {
        class: ParityClass,
        minimum: usize,
        actual: usize,
    },

    /// RRS parity must stay below half the disks when standard parity is unset
    #[error("Reduced redundancy storage class parity disks should be less than {limit}, got {actual}")]
    RrsParityNotBelowHalf { limit: usize, actual: usize },

    #[error("Reduced redundancy storage class parity disks should be less than {standard}, got {actual}")]
    RrsParityNotBelowStandard { standard: usize, actual: usize },

    #[error("Standard storage class parity disks should be greater than {rrs}, got {actual}")]
    StandardParityNotAboveRrs { rrs: usize, actual: usize },

    #[error("Standard storage class parity disks should be less than or equal to {maximum}, got {actual}")]
    StandardParityTooHigh { maximum: usize, actual: usize },
}

/// Any failure while turning configuration input into a published storage class config
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageClassError {
    #[error("invalid {class} value: {source}")]
    Parse {
        class: ParityClass,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
