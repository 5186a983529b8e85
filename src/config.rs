use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::Result;

/// Defaults read from a TOML file. Command-line flags take precedence.
#[derive(Debug, Default, Eq, PartialEq, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamsGenConfig {
    pub template: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// Parses a configuration file. Relative paths are resolved against the
/// directory containing the file.
pub fn parse_config(path: impl AsRef<Path>) -> Result<ParamsGenConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration file {path:?}"))?;
    let mut config: ParamsGenConfig = toml::from_str(&contents)
        .with_context(|| format!("failed to parse configuration file {path:?}"))?;

    if let Some(base) = path.parent() {
        config.template = config.template.map(|p| base.join(p));
        config.output_dir = config.output_dir.map(|p| base.join(p));
    }

    Ok(config)
}
