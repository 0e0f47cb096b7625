use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LogSettings, default_log_path};

/// Send `tracing` output to the log file. The terminal belongs to the TUI,
/// so nothing is ever written to stdout or stderr after startup.
pub fn init_logging(log: &LogSettings) {
    let Some(path) = log.file.clone().or_else(default_log_path) else {
        eprintln!("playdeck: no log file location, logging disabled");
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!(
                "playdeck: cannot open log file {}, logging disabled: {e}",
                path.display()
            );
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_target(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init();
    if let Err(e) = result {
        eprintln!("playdeck: failed to install logger: {e}");
    }
}
