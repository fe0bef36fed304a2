use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const CONFIG_CANDIDATES: &[(&str, ConfigFormat)] = &[
    ("gong.yml", ConfigFormat::Yaml),
    ("gong.yaml", ConfigFormat::Yaml),
    ("gong.toml", ConfigFormat::Toml),
];

/// Overrides the toolchain executable, e.g. `GONG_GO=go1.22.4`.
pub const TOOLCHAIN_ENV: &str = "GONG_GO";
pub const DEFAULT_TOOLCHAIN: &str = "go";

#[derive(Debug, Clone)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Program to forward commands to instead of `go`.
    #[serde(default)]
    pub toolchain: Option<String>,
}

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub toolchain: String,
}

impl Settings {
    /// Resolve settings for the project at `root` (if any).
    ///
    /// `GONG_GO` wins over the project file, which wins over the default. A
    /// broken project file only produces a warning.
    pub fn resolve(root: Option<&Path>) -> Self {
        let project = match root.map(load_project_config_from_dir).transpose() {
            Ok(loaded) => loaded.flatten(),
            Err(e) => {
                eprintln!("warning: ignoring project config: {e:#}");
                None
            }
        };
        let env_override = std::env::var(TOOLCHAIN_ENV).ok();
        Self::from_sources(env_override.as_deref(), project.as_ref())
    }

    fn from_sources(env_override: Option<&str>, project: Option<&ProjectConfig>) -> Self {
        let toolchain = non_empty(env_override)
            .or_else(|| non_empty(project.and_then(|cfg| cfg.toolchain.as_deref())))
            .unwrap_or(DEFAULT_TOOLCHAIN)
            .to_string();
        Self { toolchain }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn load_project_config_from_dir(base_dir: &Path) -> Result<Option<ProjectConfig>> {
    for (file, format) in CONFIG_CANDIDATES {
        let path = base_dir.join(file);
        if !path.exists() {
            continue;
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading project config at {}", path.display()))?;
        let data = match format {
            ConfigFormat::Yaml => parse_yaml_str(&content)
                .with_context(|| format!("parsing YAML config at {}", path.display()))?,
            ConfigFormat::Toml => parse_toml_str(&content)
                .with_context(|| format!("parsing TOML config at {}", path.display()))?,
        };
        return Ok(Some(data));
    }
    Ok(None)
}

pub(crate) fn parse_yaml_str(content: &str) -> Result<ProjectConfig> {
    // an empty YAML document is `null`, not an empty mapping
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

pub(crate) fn parse_toml_str(content: &str) -> Result<ProjectConfig> {
    Ok(toml::from_str(content)?)
}
