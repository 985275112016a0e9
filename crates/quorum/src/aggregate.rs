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

//! Selection of the latest agreeing metadata record across disks

use crate::error::DiskError;
use crate::meta::{ErasureInfo, FileMeta};
use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use std::cmp::{Ordering, Reverse};

/// Picks the representative metadata record from per-disk fetch results.
pub trait MetadataAggregator: Send + Sync {
    /// Returns the representative record and the number of disks holding it,
    /// or `None` when no disk returned a usable record.
    fn latest<'a>(&self, metas: &'a [Result<FileMeta, DiskError>]) -> Option<(&'a FileMeta, usize)>;
}

/// Majority-plus-recency aggregation.
///
/// Failed fetches and invalid records are skipped. The remaining records are
/// grouped by modification time and erasure parameters; the largest group
/// wins, ties go to the most recent modification time and then to the group
/// seen first in disk order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatestMetaAggregator;

#[derive(Debug, Clone, Copy)]
struct Group {
    count: usize,
    first: usize,
    mod_time: DateTime<Utc>,
}

impl Group {
    fn rank(&self, other: &Group) -> Ordering {
        self.count
            .cmp(&other.count)
            .then(self.mod_time.cmp(&other.mod_time))
            .then(Reverse(self.first).cmp(&Reverse(other.first)))
    }
}

impl MetadataAggregator for LatestMetaAggregator {
    fn latest<'a>(&self, metas: &'a [Result<FileMeta, DiskError>]) -> Option<(&'a FileMeta, usize)> {
        let mut groups: HashMap<(DateTime<Utc>, ErasureInfo), Group> = HashMap::new();

        for (index, meta) in metas.iter().enumerate() {
            let Ok(meta) = meta else {
                continue;
            };
            if !meta.is_valid() {
                continue;
            }

            groups
                .entry((meta.mod_time, meta.erasure))
                .and_modify(|g| g.count += 1)
                .or_insert(Group {
                    count: 1,
                    first: index,
                    mod_time: meta.mod_time,
                });
        }

        let best = groups.values().max_by(|a, b| a.rank(b))?;
        let representative = metas[best.first].as_ref().ok()?;
        Some((representative, best.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn meta(mod_time: DateTime<Utc>, data: usize, parity: usize) -> Result<FileMeta, DiskError> {
        Ok(FileMeta::new(mod_time, ErasureInfo::new(data, parity)))
    }

    #[test]
    fn test_all_errors() {
        let metas: Vec<Result<FileMeta, DiskError>> = vec![Err(DiskError::DiskNotFound), Err(DiskError::FileNotFound)];
        assert!(LatestMetaAggregator.latest(&metas).is_none());
        assert!(LatestMetaAggregator.latest(&[]).is_none());
    }

    #[test]
    fn test_errors_are_ignored() {
        let t = Utc::now();
        let mut metas = vec![meta(t, 6, 4); 8];
        metas.push(Err(DiskError::DiskNotFound));
        metas.push(Err(DiskError::FileCorrupt));

        let (latest, count) = LatestMetaAggregator.latest(&metas).unwrap();
        assert_eq!(count, 8);
        assert_eq!(latest.erasure, ErasureInfo::new(6, 4));
    }

    #[test]
    fn test_majority_wins_over_recency() {
        let old = Utc::now();
        let new = old + Duration::seconds(10);
        let mut metas = vec![meta(old, 4, 2); 4];
        metas.extend(vec![meta(new, 4, 2); 2]);

        let (latest, count) = LatestMetaAggregator.latest(&metas).unwrap();
        assert_eq!(latest.mod_time, old);
        assert_eq!(count, 4);
    }

    #[test]
    fn test_tie_broken_by_mod_time() {
        let old = Utc::now();
        let new = old + Duration::seconds(10);
        let metas = vec![meta(old, 4, 2), meta(old, 4, 2), meta(new, 4, 2), meta(new, 4, 2)];

        let (latest, count) = LatestMetaAggregator.latest(&metas).unwrap();
        assert_eq!(latest.mod_time, new);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_groups_split_on_erasure_params() {
        let t = Utc::now();
        let metas = vec![meta(t, 4, 2), meta(t, 4, 2), meta(t, 3, 3), meta(t, 4, 2), meta(t, 3, 3)];

        let (latest, count) = LatestMetaAggregator.latest(&metas).unwrap();
        assert_eq!(latest.erasure, ErasureInfo::new(4, 2));
        assert_eq!(count, 3);

        // Same time and size: first group in disk order is kept
        let metas = vec![meta(t, 3, 3), meta(t, 4, 2), meta(t, 4, 2), meta(t, 3, 3)];
        let (latest, count) = LatestMetaAggregator.latest(&metas).unwrap();
        assert_eq!(latest.erasure, ErasureInfo::new(3, 3));
        assert_eq!(count, 2);
    }

    #[test]
    fn test_invalid_records_skipped() {
        let t = Utc::now();
        let metas = vec![meta(t, 0, 0), meta(t, 0, 0), meta(t, 2, 2)];

        let (latest, count) = LatestMetaAggregator.latest(&metas).unwrap();
        assert_eq!(latest.erasure.data_blocks, 2);
        assert_eq!(count, 1);
    }
}
