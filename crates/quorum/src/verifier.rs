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

//! Object quorum verification logic

use crate::aggregate::MetadataAggregator;
use crate::error::{DiskError, QuorumError};
use crate::meta::{ErasureInfo, FileMeta};
use tracing::debug;

/// Read and write quorum for one object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectQuorum {
    /// Minimum disks needed to read data (D)
    pub read_quorum: usize,
    /// Minimum disks needed to write data (D + 1)
    pub write_quorum: usize,
}

impl ObjectQuorum {
    /// Quorum implied by the object's erasure parameters
    pub fn from_erasure(erasure: &ErasureInfo) -> Self {
        Self {
            read_quorum: erasure.data_blocks,
            write_quorum: erasure.data_blocks + 1,
        }
    }

    /// Verify read quorum or return error
    pub fn verify_read(&self, available: usize) -> Result<(), QuorumError> {
        if available >= self.read_quorum {
            Ok(())
        } else {
            Err(QuorumError::InsufficientReadQuorum {
                required: self.read_quorum,
                available,
            })
        }
    }

    /// Verify write quorum or return error
    pub fn verify_write(&self, available: usize) -> Result<(), QuorumError> {
        if available >= self.write_quorum {
            Ok(())
        } else {
            Err(QuorumError::InsufficientWriteQuorum {
                required: self.write_quorum,
                available,
            })
        }
    }
}

/// Returns per object read and write quorum.
///
/// `metas` holds one fetch result per disk. The aggregator picks the latest
/// agreeing record; at least `data_blocks` disks must hold it, otherwise the
/// object's quorum cannot be established reliably.
pub fn object_quorum_from_meta<A>(metas: &[Result<FileMeta, DiskError>], aggregator: &A) -> Result<ObjectQuorum, QuorumError>
where
    A: MetadataAggregator + ?Sized,
{
    let Some((latest, count)) = aggregator.latest(metas) else {
        return Err(QuorumError::NoValidMetadata { disks: metas.len() });
    };

    let data_blocks = latest.erasure.data_blocks;
    if count < data_blocks {
        debug!(
            "Metadata agreement {}/{} below data blocks {}",
            count,
            metas.len(),
            data_blocks
        );
        return Err(QuorumError::InsufficientReadQuorum {
            required: data_blocks,
            available: count,
        });
    }

    Ok(ObjectQuorum::from_erasure(&latest.erasure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::LatestMetaAggregator;
    use chrono::Utc;

    fn metas(agreeing: usize, failed: usize, erasure: ErasureInfo) -> Vec<Result<FileMeta, DiskError>> {
        let now = Utc::now();
        let mut v: Vec<Result<FileMeta, DiskError>> = (0..agreeing).map(|_| Ok(FileMeta::new(now, erasure))).collect();
        v.extend((0..failed).map(|_| Err(DiskError::DiskNotFound)));
        v
    }

    #[test]
    fn test_quorum_with_failed_disks() {
        let metas = metas(8, 2, ErasureInfo::new(6, 4));
        let quorum = object_quorum_from_meta(&metas, &LatestMetaAggregator).unwrap();
        assert_eq!(
            quorum,
            ObjectQuorum {
                read_quorum: 6,
                write_quorum: 7
            }
        );
    }

    #[test]
    fn test_insufficient_agreement() {
        let metas = metas(5, 5, ErasureInfo::new(6, 4));
        assert_eq!(
            object_quorum_from_meta(&metas, &LatestMetaAggregator),
            Err(QuorumError::InsufficientReadQuorum {
                required: 6,
                available: 5
            })
        );
    }

    #[test]
    fn test_agreement_exactly_data_blocks() {
        let metas = metas(6, 4, ErasureInfo::new(6, 4));
        assert!(object_quorum_from_meta(&metas, &LatestMetaAggregator).is_ok());
    }

    #[test]
    fn test_no_valid_metadata() {
        let metas = metas(0, 4, ErasureInfo::new(2, 2));
        assert_eq!(
            object_quorum_from_meta(&metas, &LatestMetaAggregator),
            Err(QuorumError::NoValidMetadata { disks: 4 })
        );
    }

    #[test]
    fn test_dyn_aggregator() {
        let aggregator: Box<dyn MetadataAggregator> = Box::new(LatestMetaAggregator);
        let metas = metas(4, 0, ErasureInfo::new(2, 2));
        let quorum = object_quorum_from_meta(&metas, aggregator.as_ref()).unwrap();
        assert_eq!(quorum.read_quorum, 2);
    }

    #[test]
    fn test_verify_read_write() {
        let quorum = ObjectQuorum::from_erasure(&ErasureInfo::new(4, 2));
        assert_eq!(quorum.write_quorum, 5);

        assert!(quorum.verify_read(4).is_ok());
        assert!(quorum.verify_write(5).is_ok());
        assert!(quorum.verify_write(6).is_ok());
        assert_eq!(
            quorum.verify_read(3),
            Err(QuorumError::InsufficientReadQuorum {
                required: 4,
                available: 3
            })
        );
        assert_eq!(
            quorum.verify_write(4),
            Err(QuorumError::InsufficientWriteQuorum {
                required: 5,
                available: 4
            })
        );
    }

    #[tokio::test]
    async fn test_independent_objects_concurrently() {
        let mut handles = Vec::new();
        for data in 2..8 {
            handles.push(tokio::spawn(async move {
                let metas = metas(data + 1, 1, ErasureInfo::new(data, 2));
                object_quorum_from_meta(&metas, &LatestMetaAggregator)
            }));
        }

        for (data, handle) in (2..8).zip(handles) {
            let quorum = handle.await.unwrap().unwrap();
            assert_eq!(quorum.read_quorum, data);
            assert_eq!(quorum.write_quorum, data + 1);
        }
    }
}
