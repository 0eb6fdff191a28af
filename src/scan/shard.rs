// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel scanning across shards of one buffer.
//!
//! The buffer is cut into contiguous anchor ranges. Every cut is moved
//! forward to the next non-letter byte, so no letter run (and no anchor)
//! straddles two shards. Each shard gets its starting [`Position`] seeded
//! from the bytes before it, walks over the *whole* buffer (a match may run
//! past the shard end), and keeps the records whose anchor it owns.
//! Concatenating shard results in order reproduces the sequential scan.
//!
//! Records are batched per shard and emitted in buffer order once all shards
//! finish.

use std::ops::Range;

use rayon::prelude::*;

use crate::classify::Classifier;
use crate::error::Result;
use crate::report::{MatchRecord, MatchSink};

use super::{Position, Scanner};

/// Split `buffer` into ranges of roughly `shard_size` bytes, each starting
/// at a non-letter byte (or at 0).
pub fn shard_bounds(
    buffer: &[u8],
    classifier: &Classifier,
    shard_size: usize,
) -> Vec<Range<usize>> {
    let shard_size = shard_size.max(1);
    let mut bounds = Vec::new();
    let mut start = 0;
    while start < buffer.len() {
        let mut end = (start + shard_size).min(buffer.len());
        while end < buffer.len() && classifier.is_letter(buffer[end]) {
            end += 1;
        }
        bounds.push(start..end);
        start = end;
    }
    bounds
}

impl Scanner<'_, '_> {
    /// Scan shards in parallel, then report every record in buffer order.
    pub fn scan_parallel(
        &self,
        buffer: &[u8],
        shard_size: usize,
        sink: &mut impl MatchSink,
    ) -> Result<usize> {
        let bounds = shard_bounds(buffer, self.classifier(), shard_size);

        let mut seeds = Vec::with_capacity(bounds.len());
        let mut position = Position::start();
        let mut cursor = 0;
        for range in &bounds {
            position = position.advance_over(&buffer[cursor..range.start]);
            cursor = range.start;
            seeds.push(position);
        }
        log::debug!("scanning {} bytes in {} shards", buffer.len(), bounds.len());

        let shards: Vec<Vec<MatchRecord>> = bounds
            .into_par_iter()
            .zip(seeds)
            .map(|(range, seed)| {
                let mut records: Vec<MatchRecord> = Vec::new();
                // Collecting into a Vec cannot fail
                let _ = self.scan_range(buffer, range, seed, &mut records);
                records
            })
            .collect();

        let mut reported = 0;
        for record in shards.into_iter().flatten() {
            sink.report(record)?;
            reported += 1;
        }
        Ok(reported)
    }
}
