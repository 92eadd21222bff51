//! File logging. The terminal belongs to the TUI, so nothing is written to stdout.

use std::fs::{self, File};
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

pub fn initialize(path: &Path, level: LevelFilter) {
    let file = match create_log_file(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("warning: could not create log file at {}: {err}", path.display());
            return;
        }
    };

    let _ = WriteLogger::init(level, build_config(), file);
}

fn create_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
