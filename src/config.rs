use std::{
    env, io,
    path::{Path, PathBuf},
};

/// Overrides the directory the artifacts are read from.
pub const ARTIFACTS_DIR_VAR: &str = "PREDICTOR_ARTIFACTS_DIR";
/// Overrides the model manifest path.
pub const MODEL_VAR: &str = "PREDICTOR_MODEL";
/// Overrides the scaler path.
pub const SCALER_VAR: &str = "PREDICTOR_SCALER";

pub const DEFAULT_MODEL_FILE: &str = "model.json";
pub const DEFAULT_SCALER_FILE: &str = "scaler.json";

/// The demo artifacts shipped with the source tree.
pub const BUNDLED_ARTIFACTS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/artifacts");

/// Where the pre-built artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
}

impl ArtifactPaths {
    /// Resolves the artifact paths.
    ///
    /// Individual overrides win over the directory override, which wins over `base_dir`.
    ///
    /// # Arguments
    /// * `base_dir` - The fallback directory, usually the executable's.
    /// * `dir` - An optional artifacts directory override.
    /// * `model` - An optional model manifest override.
    /// * `scaler` - An optional scaler override.
    ///
    /// # Returns
    /// The resolved paths.
    pub fn resolve(
        base_dir: &Path,
        dir: Option<PathBuf>,
        model: Option<PathBuf>,
        scaler: Option<PathBuf>,
    ) -> Self {
        let dir = dir.unwrap_or_else(|| base_dir.to_path_buf());

        Self {
            model: model.unwrap_or_else(|| dir.join(DEFAULT_MODEL_FILE)),
            scaler: scaler.unwrap_or_else(|| dir.join(DEFAULT_SCALER_FILE)),
        }
    }

    /// Resolves the artifact paths from the environment.
    ///
    /// Without a directory override, the base directory is the first of the executable's
    /// directory, `./artifacts` and [`BUNDLED_ARTIFACTS_DIR`] that holds a model manifest.
    /// When none does, the executable's directory is kept so load errors name it.
    ///
    /// # Errors
    /// Returns an io error if the executable's location can't be determined.
    pub fn from_env() -> io::Result<Self> {
        let exe = env::current_exe()?;
        let exe_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| io::Error::other("the executable has no parent directory"))?;

        let mut candidates = vec![exe_dir.clone()];
        if let Ok(cwd) = env::current_dir() {
            candidates.push(cwd.join("artifacts"));
        }
        candidates.push(PathBuf::from(BUNDLED_ARTIFACTS_DIR));

        let base_dir = first_with_model(candidates).unwrap_or(exe_dir);
        log::debug!("artifacts base directory: {}", base_dir.display());

        let var = |name: &str| env::var_os(name).filter(|v| !v.is_empty()).map(PathBuf::from);

        Ok(Self::resolve(
            &base_dir,
            var(ARTIFACTS_DIR_VAR),
            var(MODEL_VAR),
            var(SCALER_VAR),
        ))
    }
}

/// Returns the first directory that contains a model manifest.
pub fn first_with_model<I>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    candidates
        .into_iter()
        .find(|dir| dir.join(DEFAULT_MODEL_FILE).is_file())
}
