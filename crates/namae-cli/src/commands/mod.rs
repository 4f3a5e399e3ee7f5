//! Subcommand implementations for `namaetool`.
//!
//! Each command prints to stdout and exits with status 1 on failure.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod batch_ops;
pub mod check_ops;
pub mod config_ops;
pub mod dict_ops;
pub mod resolve_ops;

use std::path::Path;

use namae_core::dict::KanjiDictionary;

fn open_dict(dict_file: &str) -> KanjiDictionary {
    die!(
        KanjiDictionary::open(Path::new(dict_file)),
        "Error opening dictionary {dict_file}: {}"
    )
}
