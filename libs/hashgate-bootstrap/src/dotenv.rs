use std::path::{Path, PathBuf};

use anyhow::Context;

/// Export the variables of a `.env` file into the process environment.
///
/// With `path` set, that file must exist. Without it, `.env` is searched for
/// in the working directory and its parents, and not finding one is fine.
/// Variables already present in the environment keep their values.
///
/// Returns the file that was loaded, if any.
///
/// # Errors
/// Returns an error if an explicit file is missing, or if a file is found but
/// cannot be read or parsed.
pub fn load_dotenv(path: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = path {
        dotenvy::from_path(path)
            .with_context(|| format!("failed to load env file {}", path.display()))?;
        return Ok(Some(path.to_path_buf()));
    }

    match dotenvy::dotenv() {
        Ok(found) => Ok(Some(found)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err).context("failed to load .env file"),
    }
}
