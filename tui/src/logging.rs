use std::{
    env,
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Overrides where the log file is written.
const LOG_FILE_VAR: &str = "PREDICTOR_LOG_FILE";
const DEFAULT_LOG_FILE: &str = "heart-failure-predictor.log";

/// Initializes `env_logger`, honoring `RUST_LOG` and defaulting to `info`.
///
/// The terminal is owned by the form while it runs, so records go to a file instead of
/// stderr.
///
/// # Returns
/// The path of the log file.
pub fn init() -> Result<PathBuf> {
    let path = env::var_os(LOG_FILE_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join(DEFAULT_LOG_FILE));

    let file = open_log(&path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();

    Ok(path)
}

/// Opens the log file for appending, creating it if needed. Earlier runs are kept.
fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Write};

    use super::*;

    #[test]
    fn reopening_appends_instead_of_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_LOG_FILE);

        writeln!(open_log(&path).unwrap(), "first run").unwrap();
        writeln!(open_log(&path).unwrap(), "second run").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first run\nsecond run\n");
    }

    #[test]
    fn unopenable_path_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_LOG_FILE);

        let err = open_log(&path).unwrap_err();
        assert!(err.to_string().contains(&path.display().to_string()));
    }
}
