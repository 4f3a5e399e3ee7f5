//! Corpus-wide resolution.
//!
//! Every distinct `(orth, pron)` pair is resolved once on a scoped worker
//! pool. Workers pull fixed-size chunks off a shared cursor and send results
//! back over a channel; the calling thread owns all aggregation.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use namae_core::dict::ReadingDictionary;
use namae_core::resolver::{resolve_detailed, Resolution};
use namae_core::segment::{format_mapping, has_irregular};
use namae_core::stats::{IrregularityReport, RegularityCounts};
use tracing::{debug, info};

use crate::corpus::NameRecord;

/// Resolution of one distinct name pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMapping {
    pub orth: String,
    pub pron: String,
    pub resolution: Resolution,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutput {
    /// Distinct pairs in the order they first appear in the corpus.
    pub mappings: Vec<PairMapping>,
    /// Per-record irregularity by year and gender.
    pub report: IrregularityReport,
    /// Per-record character counts by reading kind.
    pub counts: RegularityCounts,
    /// Distinct pairs that needed the greedy fallback.
    pub fallbacks: usize,
}

impl BatchOutput {
    /// Write the mapping table: `orth<TAB>pron<TAB>annotation` per pair.
    pub fn write_mappings<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for m in &self.mappings {
            writeln!(
                writer,
                "{}\t{}\t{}",
                m.orth,
                m.pron,
                format_mapping(&m.resolution.segments)
            )?;
        }
        writer.flush()
    }
}

/// Resolve every record and aggregate the results.
///
/// `workers` is clamped to at least one and at most the number of chunks.
pub fn run_batch(
    dict: &dyn ReadingDictionary,
    records: &[NameRecord],
    workers: usize,
    chunk_size: usize,
) -> BatchOutput {
    let started = Instant::now();
    let chunk_size = chunk_size.max(1);

    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    let record_pairs: Vec<usize> = records
        .iter()
        .map(|r| {
            let key = (r.orth.as_str(), r.pron.as_str());
            *index.entry(key).or_insert_with(|| {
                pairs.push(key);
                pairs.len() - 1
            })
        })
        .collect();

    let workers = workers.max(1).min(pairs.len().div_ceil(chunk_size).max(1));
    info!(
        records = records.len(),
        pairs = pairs.len(),
        workers,
        chunk_size,
        "batch started"
    );

    let resolutions = resolve_pairs(dict, &pairs, workers, chunk_size);

    let mappings: Vec<PairMapping> = pairs
        .iter()
        .zip(resolutions)
        .map(|(&(orth, pron), resolution)| PairMapping {
            orth: orth.to_string(),
            pron: pron.to_string(),
            resolution,
        })
        .collect();

    let fallbacks = mappings
        .iter()
        .filter(|m| m.resolution.is_fallback())
        .count();

    let mut report = IrregularityReport::new();
    let mut counts = RegularityCounts::default();
    for (record, &pair) in records.iter().zip(&record_pairs) {
        let segments = &mappings[pair].resolution.segments;
        report.record(record.year, &record.gender, has_irregular(segments));
        counts.record(segments);
    }

    info!(
        pairs = mappings.len(),
        fallbacks,
        irregular = report.overall.irregular,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "batch finished"
    );

    BatchOutput {
        mappings,
        report,
        counts,
        fallbacks,
    }
}

/// Resolve `pairs` in parallel, returning results in input order.
fn resolve_pairs(
    dict: &dyn ReadingDictionary,
    pairs: &[(&str, &str)],
    workers: usize,
    chunk_size: usize,
) -> Vec<Resolution> {
    let cursor = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<(usize, Resolution)>();

    let mut collected: Vec<(usize, Resolution)> = thread::scope(|s| {
        for worker in 0..workers {
            let tx = tx.clone();
            let cursor = &cursor;
            s.spawn(move || {
                let mut done = 0usize;
                loop {
                    let start = cursor.fetch_add(chunk_size, Ordering::Relaxed);
                    if start >= pairs.len() {
                        break;
                    }
                    let end = (start + chunk_size).min(pairs.len());
                    for (offset, &(orth, pron)) in pairs[start..end].iter().enumerate() {
                        let resolution = resolve_detailed(dict, orth, pron);
                        if tx.send((start + offset, resolution)).is_err() {
                            return;
                        }
                    }
                    done += end - start;
                }
                debug!(worker, resolved = done, "worker finished");
            });
        }
        // Only the workers' senders remain, so the receiver drains once they exit.
        drop(tx);
        rx.iter().collect()
    });

    collected.sort_unstable_by_key(|(idx, _)| *idx);
    collected.into_iter().map(|(_, resolution)| resolution).collect()
}
