//! Irregularity statistics over resolved names.
//!
//! `IrregularityReport` counts names (one per corpus record) with at least
//! one irregular character, broken down by year, gender and both.
//! `RegularityCounts` counts characters by reading kind.

mod tables;

pub use tables::{ReportTable, ReportTables};

use std::collections::BTreeMap;

use serde::Serialize;

use crate::segment::{ReadingKind, ReadingSegment};

/// Names seen and how many of them were irregular.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub total: u64,
    pub irregular: u64,
}

impl Tally {
    pub fn record(&mut self, irregular: bool) {
        self.total += 1;
        if irregular {
            self.irregular += 1;
        }
    }

    /// Share of irregular names; 0.0 when nothing was counted.
    pub fn proportion(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.irregular as f64 / self.total as f64
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IrregularityReport {
    pub by_year: BTreeMap<i32, Tally>,
    pub by_gender: BTreeMap<String, Tally>,
    pub by_year_gender: BTreeMap<i32, BTreeMap<String, Tally>>,
    pub overall: Tally,
}

impl IrregularityReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one name.
    pub fn record(&mut self, year: i32, gender: &str, irregular: bool) {
        self.overall.record(irregular);
        self.by_year.entry(year).or_default().record(irregular);
        self.by_gender
            .entry(gender.to_string())
            .or_default()
            .record(irregular);
        self.by_year_gender
            .entry(year)
            .or_default()
            .entry(gender.to_string())
            .or_default()
            .record(irregular);
    }
}

/// Character counts per reading kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegularityCounts {
    pub total_characters: u64,
    pub by_kind: BTreeMap<ReadingKind, u64>,
}

impl RegularityCounts {
    pub fn record(&mut self, segments: &[ReadingSegment]) {
        for segment in segments {
            self.total_characters += 1;
            *self.by_kind.entry(segment.kind).or_default() += 1;
        }
    }

    pub fn count(&self, kind: ReadingKind) -> u64 {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}
