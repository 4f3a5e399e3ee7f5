use std::fs;
use std::path::Path;
use std::process;

use namae_core::dict::{KanjiDictionary, ReadingDictionary, MAGIC};
use namae_core::segment::DICTIONARY_KINDS;
use namae_core::settings::settings;

use super::open_dict;

pub fn compile(lexicon_file: &str, output_file: &str) {
    let text = die!(
        fs::read_to_string(lexicon_file),
        "Error reading {lexicon_file}: {}"
    );
    let dict = die!(
        KanjiDictionary::parse_lexicon(&text, &settings().lexicon),
        "Error parsing lexicon: {}"
    );
    die!(
        dict.save(Path::new(output_file)),
        "Error writing dictionary: {}"
    );
    println!(
        "Compiled {} kanji ({} readings) → {output_file}",
        dict.len(),
        dict.reading_count()
    );
}

pub fn info(file: &str) {
    let magic = fs::read(file)
        .ok()
        .and_then(|b| b.get(..4).map(|s| s.to_vec()));

    match magic.as_deref() {
        Some(m) if m == MAGIC => info_dict(file),
        Some(other) => {
            eprintln!(
                "Unknown file format (magic: {:?})",
                String::from_utf8_lossy(other)
            );
            process::exit(1);
        }
        None => {
            eprintln!("Error reading file: {file}");
            process::exit(1);
        }
    }
}

fn info_dict(dict_file: &str) {
    let dict = open_dict(dict_file);
    let file_size = fs::metadata(dict_file).map(|m| m.len()).unwrap_or(0);

    let mut per_kind = [0usize; 3];
    let mut empty = 0usize;
    for (_, entry) in dict.iter() {
        for (slot, kind) in per_kind.iter_mut().zip(DICTIONARY_KINDS) {
            *slot += entry.readings(kind).len();
        }
        if entry.is_empty() {
            empty += 1;
        }
    }

    println!("Dictionary: {dict_file}");
    println!("File size:  {:.1} KB", file_size as f64 / 1024.0);
    println!("Kanji:      {}", dict.len());
    println!("Readings:   {}", dict.reading_count());
    for (count, kind) in per_kind.iter().zip(DICTIONARY_KINDS) {
        println!("  {:<8}{count}", kind.as_str());
    }
    println!("No reading: {empty}");

    let sample_keys = ['子', '美', '翔', '大'];
    println!();
    println!("Sample lookups:");
    for key in sample_keys {
        match dict.lookup(key) {
            Some(entry) => {
                let all = DICTIONARY_KINDS
                    .iter()
                    .flat_map(|&kind| entry.readings(kind).iter())
                    .take(6);
                println!("  {key} → {}", format_readings(all));
            }
            None => println!("  {key} → (not found)"),
        }
    }
}

pub fn lookup(dict_file: &str, kanji: &str) {
    let mut chars = kanji.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        eprintln!("Error: expected a single character, got {kanji:?}");
        process::exit(1);
    };

    let dict = open_dict(dict_file);
    let Some(entry) = dict.lookup(c) else {
        println!("{c}: not in dictionary");
        return;
    };
    println!("{c}:");
    for kind in DICTIONARY_KINDS {
        println!("  {:<7} {}", kind.as_str(), format_readings(entry.readings(kind).iter()));
    }
}

fn format_readings<'a>(readings: impl Iterator<Item = &'a String>) -> String {
    let list: Vec<&str> = readings.map(String::as_str).collect();
    if list.is_empty() {
        "(none)".to_string()
    } else {
        list.join(", ")
    }
}
