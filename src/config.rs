// src/config.rs

//! Configuration resolution.
//!
//! Settings are layered with `figment` (later layers win):
//! - one config file: the `--config` path, or `~/.playbook.<ext>`
//! - environment variables named after the key (`author` ← `AUTHOR`)
//! - pinned overrides (`verbose` is always `false`)
//!
//! A missing or broken config file is not an error; the run continues with
//! environment values only. Failing to find the home directory is.

use anyhow::{anyhow, bail, Result};
use figment::providers::{Format, Json, Serialized, Toml, Yaml};
use figment::value::Dict;
use figment::Figment;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::sinks::OutputSink;
use crate::util;

/// File name searched for in the home directory, without extension.
pub const CONFIG_NAME: &str = ".playbook";

/// Extensions tried, in order, when searching the home directory.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["json", "toml", "yaml", "yml", "dotenv", "env"];

/// Snapshot of the process environment.
///
/// Captured once at startup so resolution never reads ambient state.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Capture the current process environment. Non-UTF-8 entries are skipped.
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    #[cfg(test)]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Merge every non-empty variable into `figment` as a lower-cased key.
    ///
    /// Empty variables count as unset. A `.` in a name nests the key, so
    /// `LOG.LEVEL` answers `log.level`; `LOG_LEVEL` only answers `log_level`.
    fn layer_onto(&self, figment: Figment) -> Figment {
        self.vars
            .iter()
            .filter(|(name, value)| !name.is_empty() && !value.is_empty())
            .fold(figment, |figment, (name, value)| {
                figment.merge(Serialized::default(&name.to_lowercase(), value))
            })
    }
}

/// Where to look for the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Path given with `--config`, used verbatim.
    File(PathBuf),
    /// Search `dir` for `name.<ext>` over [`SUPPORTED_EXTENSIONS`].
    Search { dir: PathBuf, name: &'static str },
}

impl ConfigLocation {
    /// First existing file for this location, if any.
    fn find(&self) -> Option<PathBuf> {
        match self {
            ConfigLocation::File(path) => Some(path.clone()).filter(|p| p.is_file()),
            ConfigLocation::Search { dir, name } => SUPPORTED_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{}.{}", name, ext)))
                .find(|candidate| candidate.is_file()),
        }
    }
}

/// Resolved, read-only configuration.
#[derive(Debug)]
pub struct Settings {
    figment: Figment,
    file_keys: Vec<String>,
    file_used: Option<PathBuf>,
}

impl Settings {
    fn build(file_values: Dict, file_used: Option<PathBuf>, env: &Environment) -> Self {
        let file_keys = util::leaf_keys(&file_values);

        let figment = env
            .layer_onto(Figment::from(Serialized::defaults(file_values)))
            .merge(Serialized::default("verbose", false));

        Self {
            figment,
            file_keys,
            file_used,
        }
    }

    /// Look up a key (case-insensitive). Tables have no value.
    pub fn get(&self, key: &str) -> Option<String> {
        self.figment
            .find_value(&key.to_lowercase())
            .ok()
            .and_then(|value| util::value_text(&value))
    }

    /// Value of `key`, or an empty string when unset.
    pub fn get_string(&self, key: &str) -> String {
        self.get(key).unwrap_or_default()
    }

    /// Value of `key` as a boolean. Unset or unparseable values are `false`.
    pub fn get_bool(&self, key: &str) -> bool {
        matches!(
            self.get(key).map(|v| v.trim().to_lowercase()).as_deref(),
            Some("true" | "1" | "yes" | "on")
        )
    }

    /// Keys known from the config file and pinned overrides, sorted.
    ///
    /// Environment variables are not enumerated; they only answer lookups.
    pub fn keys(&self) -> Vec<String> {
        self.file_keys
            .iter()
            .cloned()
            .chain(std::iter::once("verbose".to_string()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The config file that was loaded, if any.
    pub fn config_file_used(&self) -> Option<&Path> {
        self.file_used.as_deref()
    }
}

/// Decide where the config file should come from.
///
/// An empty explicit path counts as absent. The home directory is only
/// looked up when no explicit path is given.
pub fn locate<H>(explicit: Option<&Path>, home_dir: H) -> Result<ConfigLocation>
where
    H: FnOnce() -> Option<PathBuf>,
{
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(ConfigLocation::File(path.to_path_buf()));
    }

    let home = home_dir().ok_or_else(|| anyhow!("could not determine home directory"))?;

    Ok(ConfigLocation::Search {
        dir: home,
        name: CONFIG_NAME,
    })
}

/// Resolve settings from the given location inputs and environment.
///
/// Emits `Using config file: <path>` through `sink` when a file was read.
pub fn resolve<H>(
    explicit: Option<&Path>,
    home_dir: H,
    env: Environment,
    sink: &mut dyn OutputSink,
) -> Result<Settings>
where
    H: FnOnce() -> Option<PathBuf>,
{
    let location = locate(explicit, home_dir)?;

    let Some(path) = location.find() else {
        tracing::debug!(?location, "no config file found");
        return Ok(Settings::build(Dict::new(), None, &env));
    };

    match load_file(&path) {
        Ok(values) => {
            tracing::debug!(path = %path.display(), keys = values.len(), "config file loaded");
            sink.info(&format!("Using config file: {}", path.display()));
            Ok(Settings::build(values, Some(path), &env))
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %format!("{:#}", err), "config file skipped");
            Ok(Settings::build(Dict::new(), None, &env))
        }
    }
}

/// Read and parse one config file, choosing the format by extension.
///
/// Keys come back lower-cased.
pub fn load_file(path: &Path) -> Result<Dict> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let figment = match ext.as_str() {
        "json" => Figment::from(Json::file(path)),
        "toml" => Figment::from(Toml::file(path)),
        "yaml" | "yml" => Figment::from(Yaml::file(path)),
        "dotenv" | "env" => util::read_dotenv(path)?
            .into_iter()
            .fold(Figment::new(), |figment, (key, value)| {
                figment.merge(Serialized::default(&key, value))
            }),
        "" => bail!("Config file {:?} has no extension", path),
        other => bail!("Unsupported config type {:?}", other),
    };

    let values: Dict = figment
        .extract()
        .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", path, e))?;

    Ok(util::lowercase_keys(values))
}
