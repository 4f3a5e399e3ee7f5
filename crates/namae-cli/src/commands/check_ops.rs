//! Regression checks against a TOML corpus of expected annotations.
//!
//! ```toml
//! [[cases]]
//! orth = "菜々子"
//! pron = "ななこ"
//! expected = "菜/な/kun 々/な/repetition 子/こ/kun"
//! note = "plain repetition"
//! ```

use std::fs;
use std::process;

use serde::{Deserialize, Serialize};

use namae_core::dict::ReadingDictionary;
use namae_core::resolver::{resolve_detailed, Strategy};
use namae_core::segment::{format_mapping, parse_mapping};

use super::open_dict;

#[derive(Debug, Deserialize)]
pub struct CheckCorpus {
    pub cases: Vec<CheckCase>,
}

#[derive(Debug, Deserialize)]
pub struct CheckCase {
    pub orth: String,
    pub pron: String,
    pub expected: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub orth: String,
    pub pron: String,
    pub expected: String,
    pub actual: String,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub results: Vec<CheckResult>,
    pub summary: CheckSummary,
}

/// Resolve every case and compare with its expected annotation.
///
/// Expected annotations are normalized through `parse_mapping` so extra
/// spaces do not cause spurious failures; an unparseable one is a failure.
pub fn run_checks(dict: &dyn ReadingDictionary, corpus: &CheckCorpus) -> CheckReport {
    let mut results = Vec::with_capacity(corpus.cases.len());
    for case in &corpus.cases {
        if case.skip {
            results.push(CheckResult {
                orth: case.orth.clone(),
                pron: case.pron.clone(),
                expected: case.expected.clone(),
                actual: String::new(),
                status: CheckStatus::Skip,
                strategy: None,
                note: case.note.clone(),
            });
            continue;
        }

        let resolution = resolve_detailed(dict, &case.orth, &case.pron);
        let actual = format_mapping(&resolution.segments);
        let (expected, status) = match parse_mapping(&case.expected) {
            Ok(segments) => {
                let expected = format_mapping(&segments);
                let status = if expected == actual {
                    CheckStatus::Pass
                } else {
                    CheckStatus::Fail
                };
                (expected, status)
            }
            Err(_) => (case.expected.clone(), CheckStatus::Fail),
        };

        results.push(CheckResult {
            orth: case.orth.clone(),
            pron: case.pron.clone(),
            expected,
            actual,
            status,
            strategy: Some(resolution.strategy),
            note: case.note.clone(),
        });
    }

    let count = |want: fn(&CheckStatus) -> bool| results.iter().filter(|r| want(&r.status)).count();
    let pass = count(|s| matches!(s, CheckStatus::Pass));
    let fail = count(|s| matches!(s, CheckStatus::Fail));
    let skip = count(|s| matches!(s, CheckStatus::Skip));
    let total = results.len();
    let tested = total - skip;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };

    CheckReport {
        summary: CheckSummary {
            total,
            pass,
            fail,
            skip,
            pass_rate: format!("{rate:.1}%"),
        },
        results,
    }
}

pub fn check_cmd(dict_file: &str, cases_file: &str, verbose: bool, json: bool) {
    let dict = open_dict(dict_file);
    let content = die!(
        fs::read_to_string(cases_file),
        "Error reading {cases_file}: {}"
    );
    let corpus: CheckCorpus = die!(toml::from_str(&content), "Error parsing cases TOML: {}");
    if corpus.cases.is_empty() {
        eprintln!("No cases in {cases_file}");
        process::exit(1);
    }

    let report = run_checks(&dict, &corpus);

    if json {
        let text = die!(
            serde_json::to_string_pretty(&report),
            "Error serializing JSON: {}"
        );
        println!("{text}");
    } else {
        for r in &report.results {
            match r.status {
                CheckStatus::Pass => {
                    if verbose {
                        println!("  \u{2713} {}|{} \u{2192} {}", r.orth, r.pron, r.actual);
                    }
                }
                CheckStatus::Fail => {
                    println!("  \u{2717} {}|{} \u{2192} {}", r.orth, r.pron, r.expected);
                    println!("      got: {}", r.actual);
                }
                CheckStatus::Skip => {
                    let reason = r.note.as_deref().unwrap_or("known failure");
                    println!("  - {}|{} [skip: {reason}]", r.orth, r.pron);
                }
            }
        }

        let s = &report.summary;
        println!();
        println!("=== Summary ===");
        println!("  Total:     {}", s.total);
        println!("  Pass:      {:>3}", s.pass);
        println!("  Fail:      {:>3}", s.fail);
        println!("  Skip:      {:>3}", s.skip);
        println!("  Pass rate: {} ({}/{})", s.pass_rate, s.pass, s.total - s.skip);
    }

    if report.summary.fail > 0 {
        process::exit(1);
    }
}
