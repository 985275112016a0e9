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

//! Parity validation for standard and reduced redundancy storage classes
//!
//! Both checks are pure functions of the candidate parity, the other class's
//! parity (zero when unset) and the number of disks in the erasure set. Taken
//! together they enforce `0 < rrs < standard <= disks / 2`, and forbid RRS
//! entirely on a four disk set.

use crate::error::{ParityClass, ValidationError};

/// Minimum parity disks for either class
pub const MINIMUM_PARITY_DISKS: usize = 2;

/// Smallest disk count that runs in erasure coding mode
pub const MINIMUM_ERASURE_DISKS: usize = 4;

/// Validates the parity disks for the reduced redundancy storage class
pub fn validate_rrs_parity(rrs_parity: usize, ss_parity: usize, disks: usize) -> Result<(), ValidationError> {
    if disks < MINIMUM_ERASURE_DISKS {
        return Err(ValidationError::ErasureModeRequired { disks });
    }

    if disks == MINIMUM_ERASURE_DISKS && rrs_parity != 0 {
        return Err(ValidationError::ReducedRedundancyUnsupported { disks });
    }

    if rrs_parity < MINIMUM_PARITY_DISKS {
        return Err(ValidationError::ParityTooLow {
            class: ParityClass::ReducedRedundancy,
            minimum: MINIMUM_PARITY_DISKS,
            actual: rrs_parity,
        });
    }

    match ss_parity {
        0 => {
            if rrs_parity >= disks / 2 {
                return Err(ValidationError::RrsParityNotBelowHalf {
                    limit: disks / 2,
                    actual: rrs_parity,
                });
            }
        }
        _ => {
            if rrs_parity >= ss_parity {
                return Err(ValidationError::RrsParityNotBelowStandard {
                    standard: ss_parity,
                    actual: rrs_parity,
                });
            }
        }
    }

    Ok(())
}

/// Validates the parity disks for the standard storage class
pub fn validate_ss_parity(ss_parity: usize, rrs_parity: usize, disks: usize) -> Result<(), ValidationError> {
    if disks < MINIMUM_ERASURE_DISKS {
        return Err(ValidationError::ErasureModeRequired { disks });
    }

    match rrs_parity {
        0 => {
            if ss_parity < MINIMUM_PARITY_DISKS {
                return Err(ValidationError::ParityTooLow {
                    class: ParityClass::Standard,
                    minimum: MINIMUM_PARITY_DISKS,
                    actual: ss_parity,
                });
            }
        }
        _ => {
            if ss_parity <= rrs_parity {
                return Err(ValidationError::StandardParityNotAboveRrs {
                    rrs: rrs_parity,
                    actual: ss_parity,
                });
            }
        }
    }

    if ss_parity > disks / 2 {
        return Err(ValidationError::StandardParityTooHigh {
            maximum: disks / 2,
            actual: ss_parity,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteen_disks() {
        assert!(validate_ss_parity(8, 0, 16).is_ok());
        assert_eq!(
            validate_ss_parity(9, 0, 16),
            Err(ValidationError::StandardParityTooHigh { maximum: 8, actual: 9 })
        );
        assert!(validate_rrs_parity(7, 8, 16).is_ok());
        assert_eq!(
            validate_rrs_parity(8, 8, 16),
            Err(ValidationError::RrsParityNotBelowStandard { standard: 8, actual: 8 })
        );
    }

    #[test]
    fn test_four_disks() {
        for rrs in 1..=4 {
            assert_eq!(
                validate_rrs_parity(rrs, 0, 4),
                Err(ValidationError::ReducedRedundancyUnsupported { disks: 4 })
            );
            assert!(validate_rrs_parity(rrs, 2, 4).is_err());
        }
        assert!(validate_ss_parity(2, 0, 4).is_ok());
        assert_eq!(
            validate_ss_parity(3, 0, 4),
            Err(ValidationError::StandardParityTooHigh { maximum: 2, actual: 3 })
        );
    }

    #[test]
    fn test_below_erasure_floor() {
        for disks in 0..4 {
            for parity in 0..4 {
                assert_eq!(
                    validate_ss_parity(parity, 0, disks),
                    Err(ValidationError::ErasureModeRequired { disks })
                );
                assert_eq!(
                    validate_rrs_parity(parity, 0, disks),
                    Err(ValidationError::ErasureModeRequired { disks })
                );
            }
        }
    }

    #[test]
    fn test_minimum_parity() {
        assert_eq!(
            validate_rrs_parity(1, 0, 16),
            Err(ValidationError::ParityTooLow {
                class: ParityClass::ReducedRedundancy,
                minimum: 2,
                actual: 1
            })
        );
        assert_eq!(
            validate_ss_parity(1, 0, 16),
            Err(ValidationError::ParityTooLow {
                class: ParityClass::Standard,
                minimum: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_rrs_against_half_when_standard_unset() {
        // 10 disks: RRS must stay below 5
        assert!(validate_rrs_parity(4, 0, 10).is_ok());
        assert_eq!(
            validate_rrs_parity(5, 0, 10),
            Err(ValidationError::RrsParityNotBelowHalf { limit: 5, actual: 5 })
        );
    }

    #[test]
    fn test_standard_against_rrs() {
        assert!(validate_ss_parity(4, 3, 10).is_ok());
        assert_eq!(
            validate_ss_parity(3, 3, 10),
            Err(ValidationError::StandardParityNotAboveRrs { rrs: 3, actual: 3 })
        );
        // With RRS set the minimum of two no longer applies directly
        assert!(matches!(
            validate_ss_parity(1, 2, 10),
            Err(ValidationError::StandardParityNotAboveRrs { .. })
        ));
    }

    #[test]
    fn test_validation_is_stateless() {
        for _ in 0..2 {
            assert!(validate_ss_parity(6, 2, 12).is_ok());
            assert!(validate_rrs_parity(6, 6, 12).is_err());
        }
    }
}
