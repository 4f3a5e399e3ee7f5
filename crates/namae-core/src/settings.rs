//! Process-wide settings.
//!
//! The embedded `default_settings.toml` applies unless a front end installs
//! its own file with [`init_custom`] before anything calls [`settings`].

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Upper bound for `report.proportion_precision`.
const MAX_PRECISION: usize = 10;

static ACTIVE: OnceLock<Settings> = OnceLock::new();

/// Validate and install custom settings. Fails once `settings()` has run.
pub fn init_custom(toml_content: &str) -> Result<(), SettingsError> {
    let parsed = parse_settings_toml(toml_content)?;
    ACTIVE
        .set(parsed)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

pub fn settings() -> &'static Settings {
    ACTIVE.get_or_init(|| {
        // build.rs rejects a malformed default file
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded default settings are valid")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub lexicon: LexiconSettings,
    pub batch: BatchSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexiconSettings {
    pub field_separator: String,
    pub reading_separator: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchSettings {
    /// 0 means one worker per available core.
    pub workers: usize,
    pub chunk_size: usize,
}

impl BatchSettings {
    /// Worker count with `0` resolved against the machine.
    pub fn effective_workers(&self) -> usize {
        if self.workers > 0 {
            self.workers
        } else {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    pub proportion_precision: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(lexicon.field_separator);
    check_non_empty!(lexicon.reading_separator);
    if s.lexicon.field_separator == s.lexicon.reading_separator {
        return Err(SettingsError::InvalidValue {
            field: "lexicon.reading_separator".to_string(),
            reason: "must differ from lexicon.field_separator".to_string(),
        });
    }

    if s.batch.chunk_size == 0 {
        return Err(SettingsError::InvalidValue {
            field: "batch.chunk_size".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    if s.report.proportion_precision > MAX_PRECISION {
        return Err(SettingsError::InvalidValue {
            field: "report.proportion_precision".to_string(),
            reason: format!("must be at most {MAX_PRECISION}"),
        });
    }

    Ok(())
}
