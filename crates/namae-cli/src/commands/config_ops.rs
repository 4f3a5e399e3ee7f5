use std::fs;

use namae_core::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: lexicon.field_separator={:?}, batch.workers={}, batch.chunk_size={}, report.proportion_precision={}",
        s.lexicon.field_separator, s.batch.workers, s.batch.chunk_size, s.report.proportion_precision
    );
}

/// Install a custom settings file before anything reads `settings()`.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(&content), "Error in {file}: {}");
}
