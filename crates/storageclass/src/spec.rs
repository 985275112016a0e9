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

//! `SCHEME:PARITY` storage class values

use crate::error::ParseError;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Token of the only supported redundancy scheme
pub const SUPPORTED_SCHEME: &str = "EC";

/// Redundancy scheme of a storage class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Erasure coding
    Ec,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Ec => SUPPORTED_SCHEME,
        }
    }
}

/// A parsed storage class value such as `EC:4`.
///
/// Either unset (no scheme, zero parity) or fully specified (scheme and
/// non-zero parity). The default value is the unset sentinel; it formats as
/// the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StorageClassSpec {
    scheme: Option<Scheme>,
    parity: usize,
}

impl StorageClassSpec {
    /// Erasure coded spec with the given parity; zero parity is unset
    pub const fn ec(parity: usize) -> Self {
        if parity == 0 {
            return Self::unset();
        }
        Self {
            scheme: Some(Scheme::Ec),
            parity,
        }
    }

    /// The unset sentinel
    pub const fn unset() -> Self {
        Self { scheme: None, parity: 0 }
    }

    /// True when both a scheme and a non-zero parity are present
    pub fn is_set(&self) -> bool {
        self.scheme.is_some() && self.parity != 0
    }

    pub fn scheme(&self) -> Option<Scheme> {
        self.scheme
    }

    /// Parity disks, zero when unset
    pub fn parity(&self) -> usize {
        self.parity
    }

    /// Parses the strict two-section form `EC:<parity>`.
    ///
    /// The empty string is rejected here like any other malformed input; use
    /// [`StorageClassSpec::from_text`] for configuration input where empty
    /// means unset.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let sections: Vec<&str> = s.split(':').collect();

        if sections.len() > 2 {
            return Err(ParseError::TooManySections { input: s.to_string() });
        }
        if sections.len() < 2 {
            return Err(ParseError::TooFewSections { input: s.to_string() });
        }

        if sections[0] != SUPPORTED_SCHEME {
            return Err(ParseError::UnsupportedScheme {
                scheme: sections[0].to_string(),
            });
        }

        let value = sections[1];
        let parity = value.parse::<usize>().map_err(|source| ParseError::InvalidParity {
            value: value.to_string(),
            source,
        })?;

        // Only the form that formats back identically, so `+3` and `03` are out
        if value.starts_with('+') || (value.len() > 1 && value.starts_with('0')) {
            return Err(ParseError::NonCanonicalParity {
                value: value.to_string(),
            });
        }

        Ok(Self::ec(parity))
    }

    /// Configuration entry point: empty input yields the unset sentinel
    /// without going through [`StorageClassSpec::parse`].
    pub fn from_text(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Ok(Self::unset());
        }
        Self::parse(s)
    }
}

impl fmt::Display for StorageClassSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scheme {
            Some(scheme) if self.parity != 0 => write!(f, "{}:{}", scheme.as_str(), self.parity),
            _ => Ok(()),
        }
    }
}

impl FromStr for StorageClassSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for StorageClassSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StorageClassSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SpecVisitor;

        impl Visitor<'_> for SpecVisitor {
            type Value = StorageClassSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a storage class string such as \"EC:4\" or \"\"")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                StorageClassSpec::from_text(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(SpecVisitor)
    }
}
