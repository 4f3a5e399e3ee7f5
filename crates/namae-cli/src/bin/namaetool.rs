use std::path::Path;

use clap::{Parser, Subcommand};

use namae_cli::commands::{batch_ops, check_ops, config_ops, dict_ops, resolve_ops};
use namae_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "namaetool", about = "Kanji name reading resolution tool")]
struct Cli {
    /// Custom settings TOML (defaults are embedded)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one name into per-character readings
    Resolve {
        /// Dictionary file (compiled or text lexicon)
        dict_file: String,
        /// Orthography (kanji/kana)
        orth: String,
        /// Pronunciation (hiragana)
        pron: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Resolve a whole name corpus and report irregularity
    Batch {
        /// Dictionary file (compiled or text lexicon)
        dict_file: String,
        /// Name corpus (TSV: nid, year, orth, pron, gender)
        corpus_file: String,
        /// Output mapping table (TSV: orth, pron, annotation)
        mapping_file: String,
        /// Also write the report tables as JSON
        #[arg(long)]
        report: Option<String>,
        /// Worker threads (default: batch.workers setting)
        #[arg(long)]
        workers: Option<usize>,
    },
    /// Run resolution regression cases from a TOML file
    Check {
        /// Dictionary file (compiled or text lexicon)
        dict_file: String,
        /// Cases TOML file
        cases_file: String,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compile a text lexicon into the binary dictionary format
    Compile {
        /// Lexicon file (kanji, kun, on, nanori columns)
        lexicon_file: String,
        /// Output file
        output_file: String,
    },
    /// Show compiled dictionary info
    Info {
        /// Compiled dictionary file
        file: String,
    },
    /// Show the readings of one kanji
    Lookup {
        /// Dictionary file (compiled or text lexicon)
        dict_file: String,
        /// Kanji to look up
        kanji: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let _guard = init_tracing(cli.log_json, cli.log_file.as_deref().map(Path::new));
    if let Some(ref file) = cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Resolve {
            dict_file,
            orth,
            pron,
            json,
        } => resolve_ops::resolve_cmd(&dict_file, &orth, &pron, json),
        Command::Batch {
            dict_file,
            corpus_file,
            mapping_file,
            report,
            workers,
        } => batch_ops::batch_cmd(
            &dict_file,
            &corpus_file,
            &mapping_file,
            report.as_deref(),
            workers,
        ),
        Command::Check {
            dict_file,
            cases_file,
            verbose,
            json,
        } => check_ops::check_cmd(&dict_file, &cases_file, verbose, json),
        Command::Compile {
            lexicon_file,
            output_file,
        } => dict_ops::compile(&lexicon_file, &output_file),
        Command::Info { file } => dict_ops::info(&file),
        Command::Lookup { dict_file, kanji } => dict_ops::lookup(&dict_file, &kanji),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
