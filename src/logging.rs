use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const APP_DIR: &str = "assembly-endgame";
const LOG_FILE: &str = "assembly-endgame.log";

/// `<cache dir>/assembly-endgame/assembly-endgame.log`, or the temp dir if there is no cache dir.
#[must_use]
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join(LOG_FILE)
}

/// Route `log` records to a file so they never draw over the terminal UI.
/// Level defaults to `info` and follows `RUST_LOG` when set.
pub fn init_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;

    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    // A logger may already be installed (tests); keep it.
    if result.is_err() {
        log::debug!("Logger already initialised");
    }
    Ok(())
}
