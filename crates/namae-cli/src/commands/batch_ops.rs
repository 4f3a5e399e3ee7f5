use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use unicode_width::UnicodeWidthStr;

use namae_core::segment::ReadingKind;
use namae_core::settings::settings;
use namae_core::stats::ReportTable;

use super::open_dict;
use crate::batch::{run_batch, BatchOutput};
use crate::corpus::read_corpus;

pub fn batch_cmd(
    dict_file: &str,
    corpus_file: &str,
    mapping_file: &str,
    report_file: Option<&str>,
    workers: Option<usize>,
) {
    let dict = open_dict(dict_file);
    let records = die!(
        read_corpus(Path::new(corpus_file)),
        "Error reading corpus {corpus_file}: {}"
    );

    let batch = &settings().batch;
    let workers = workers.unwrap_or_else(|| batch.effective_workers());
    let output = run_batch(&dict, &records, workers, batch.chunk_size);

    let file = die!(
        File::create(mapping_file),
        "Error creating {mapping_file}: {}"
    );
    die!(
        output.write_mappings(BufWriter::new(file)),
        "Error writing {mapping_file}: {}"
    );

    let precision = settings().report.proportion_precision;
    print!("{}", format_report(&output, precision));

    if let Some(path) = report_file {
        let tables = output.report.to_tables(precision);
        let json = die!(
            serde_json::to_string_pretty(&tables),
            "Error serializing report: {}"
        );
        die!(fs::write(path, json), "Error writing {path}: {}");
        println!("Report tables written to {path}");
    }
}

/// Human-readable summary of a batch run.
pub fn format_report(output: &BatchOutput, precision: usize) -> String {
    let overall = &output.report.overall;
    let mut out = String::new();
    out.push_str("=== Summary ===\n");
    out.push_str(&format!("  Names:      {}\n", overall.total));
    out.push_str(&format!(
        "  Irregular:  {} ({:.*})\n",
        overall.irregular,
        precision,
        overall.proportion()
    ));
    out.push_str(&format!(
        "  Fallbacks:  {} of {} distinct pairs\n",
        output.fallbacks,
        output.mappings.len()
    ));

    let tables = output.report.to_tables(precision);
    for table in [&tables.by_year, &tables.by_gender, &tables.by_year_gender] {
        out.push('\n');
        out.push_str(&render_table(table));
    }

    out.push_str("\n=== Characters by reading kind ===\n");
    let total = output.counts.total_characters;
    for kind in ReadingKind::ALL {
        let n = output.counts.count(kind);
        let share = if total == 0 { 0.0 } else { n as f64 / total as f64 };
        out.push_str(&format!(
            "  {:<11}{:>8}  {:.*}\n",
            kind.as_str(),
            n,
            precision,
            share
        ));
    }
    out
}

fn render_table(table: &ReportTable) -> String {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.width()).collect();
    for row in &table.rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let render_row = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell}{}", " ".repeat(w - cell.width())))
            .collect();
        format!("  {}\n", padded.join("  ").trim_end())
    };

    let mut out = format!("=== {} ===\n", table.caption);
    out.push_str(&render_row(&table.headers));
    for row in &table.rows {
        out.push_str(&render_row(row));
    }
    out
}
