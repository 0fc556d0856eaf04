//! Layered configuration loading.
//!
//! Layers are merged in this order, later layers overriding earlier ones:
//! 1. `T::default()`
//! 2. YAML file (if a path is given)
//! 3. legacy environment variable aliases (e.g. `REDIS_HOST`)
//! 4. prefixed environment variables, `__` separating nested keys
//!    (e.g. `HASHING__STORE__HOST`)
//! 5. verbatim variables, taken as raw strings in declaration order
//!
//! Layers 3 and 4 parse values, so `0123` becomes the integer `123` and
//! `true` a boolean. Credentials must be listed as verbatim variables.

use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::value::{Uncased, UncasedStr};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Environment sources consulted for one service.
#[derive(Debug, Clone, Copy)]
pub struct EnvSource {
    /// Prefix of the structured variables, including the trailing separator
    /// (e.g. `"HASHING__"`).
    pub prefix: &'static str,
    /// `(VARIABLE, dotted.config.path)` pairs for variables that predate the
    /// prefixed scheme.
    pub aliases: &'static [(&'static str, &'static str)],
    /// `(VARIABLE, dotted.config.path)` pairs merged as unparsed strings
    /// after every other layer. Later entries win.
    pub verbatim: &'static [(&'static str, &'static str)],
}

impl EnvSource {
    #[must_use]
    pub const fn prefixed(prefix: &'static str) -> Self {
        Self {
            prefix,
            aliases: &[],
            verbatim: &[],
        }
    }

    #[must_use]
    pub const fn with_aliases(mut self, aliases: &'static [(&'static str, &'static str)]) -> Self {
        self.aliases = aliases;
        self
    }

    #[must_use]
    pub const fn with_verbatim(
        mut self,
        verbatim: &'static [(&'static str, &'static str)],
    ) -> Self {
        self.verbatim = verbatim;
        self
    }
}

/// Build the layered figment for `T` without extracting it.
///
/// # Errors
/// Returns an error if `path` is given but does not point to a file.
pub fn figment_for<T>(path: Option<&Path>, env: EnvSource) -> anyhow::Result<Figment>
where
    T: Serialize + Default,
{
    let mut figment = Figment::new().merge(Serialized::defaults(T::default()));

    if let Some(path) = path {
        if !path.is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
        figment = figment.merge(Yaml::file(path));
    }

    if !env.aliases.is_empty() {
        let aliases = env.aliases;
        figment = figment.merge(Env::raw().filter_map(move |key: &UncasedStr| {
            aliases
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map(|(_, target)| Uncased::from(*target))
        }));
    }

    figment = figment.merge(Env::prefixed(env.prefix).split("__"));

    for &(name, target) in env.verbatim {
        if let Ok(raw) = std::env::var(name) {
            figment = figment.merge(Serialized::default(target, raw));
        }
    }

    Ok(figment)
}

/// Load a typed configuration from defaults, an optional YAML file and the
/// environment.
///
/// # Errors
/// Returns an error if the file is missing or any layer fails to deserialize
/// into `T`.
pub fn load_config<T>(path: Option<&Path>, env: EnvSource) -> anyhow::Result<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    let figment = figment_for::<T>(path, env)?;
    let config = figment
        .extract::<T>()
        .context("failed to extract configuration")?;

    match path {
        Some(path) => tracing::debug!(path = %path.display(), "configuration loaded"),
        None => tracing::debug!("configuration loaded from defaults and environment"),
    }
    Ok(config)
}
