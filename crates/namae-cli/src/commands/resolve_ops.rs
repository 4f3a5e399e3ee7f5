use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use namae_core::dict::ReadingDictionary;
use namae_core::resolver::{resolve_detailed, Resolution, Strategy};
use namae_core::segment::{format_mapping, has_irregular, ReadingKind, ReadingSegment, DICTIONARY_KINDS};

use super::open_dict;

#[derive(Debug, Serialize)]
struct ResolveOutput<'a> {
    orth: &'a str,
    pron: &'a str,
    strategy: Strategy,
    irregular: bool,
    annotation: String,
    segments: &'a [ReadingSegment],
}

pub fn resolve_cmd(dict_file: &str, orth: &str, pron: &str, json: bool) {
    let dict = open_dict(dict_file);
    let resolution = resolve_detailed(&dict, orth, pron);

    if json {
        let out = ResolveOutput {
            orth,
            pron,
            strategy: resolution.strategy,
            irregular: has_irregular(&resolution.segments),
            annotation: format_mapping(&resolution.segments),
            segments: &resolution.segments,
        };
        let text = die!(serde_json::to_string_pretty(&out), "Error serializing JSON: {}");
        println!("{text}");
    } else {
        print!("{}", format_resolution(&dict, orth, pron, &resolution));
    }
}

/// Pad `s` with spaces to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// Dictionary readings of `character`, grouped by kind, for irregular rows.
fn available_readings(dict: &dyn ReadingDictionary, character: char) -> String {
    let Some(entry) = dict.lookup(character) else {
        return "no readings".to_string();
    };
    let groups: Vec<String> = DICTIONARY_KINDS
        .iter()
        .filter(|&&kind| !entry.readings(kind).is_empty())
        .map(|&kind| {
            let readings: Vec<&str> = entry.readings(kind).iter().map(String::as_str).collect();
            format!("{}: {}", kind.as_str(), readings.join(", "))
        })
        .collect();
    if groups.is_empty() {
        "no readings".to_string()
    } else {
        groups.join("; ")
    }
}

/// One row per character: character, reading, kind, columns aligned.
/// Irregular rows also list what the dictionary offered.
pub fn format_resolution(
    dict: &dyn ReadingDictionary,
    orth: &str,
    pron: &str,
    resolution: &Resolution,
) -> String {
    let strategy = match resolution.strategy {
        Strategy::Exact => "exact",
        Strategy::Fallback => "fallback",
    };
    let mut out = format!("{orth} ({pron}) [{strategy}]\n");

    let readings: Vec<&str> = resolution
        .segments
        .iter()
        .map(|s| if s.reading.is_empty() { "-" } else { s.reading.as_str() })
        .collect();
    let width = readings
        .iter()
        .map(|r| UnicodeWidthStr::width(*r))
        .max()
        .unwrap_or(0);

    for (segment, reading) in resolution.segments.iter().zip(&readings) {
        let character = segment.character.to_string();
        let mut row = format!(
            "  {}  {}  {}",
            pad(&character, 2),
            pad(reading, width),
            segment.kind
        );
        if segment.kind == ReadingKind::Irregular {
            row.push_str(&format!(
                "  (available: {})",
                available_readings(dict, segment.character)
            ));
        }
        out.push_str(&row);
        out.push('\n');
    }
    out
}
