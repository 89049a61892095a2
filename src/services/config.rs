use crate::cli::{BackendKind, ExpectedAnswer};
use crate::domain::constants::*;
use crate::domain::models::{BackendSettings, ConfigFile};
use crate::services::storage::config_dir;
use std::path::{Path, PathBuf};

/// Command-line overrides for a check run; `None` falls through to the config file.
#[derive(Debug, Default)]
pub struct CheckOverrides {
    pub images_dir: Option<PathBuf>,
    pub backend: Option<BackendKind>,
    pub output: Option<PathBuf>,
    pub model: Option<String>,
    pub api_base: Option<String>,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout_secs: Option<u64>,
    pub compliant_when: Option<ExpectedAnswer>,
}

#[derive(Debug)]
pub struct CheckPlan {
    pub images_dir: PathBuf,
    pub output: PathBuf,
    pub compliant_when: ExpectedAnswer,
    pub backend: BackendSettings,
}

fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads the TOML config. An explicit path must exist; the default one is optional.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = match explicit {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("config file not found: {}", p.display());
            }
            p.to_path_buf()
        }
        None => match default_config_path() {
            Ok(p) if p.exists() => p,
            _ => return Ok(ConfigFile::default()),
        },
    };
    let raw = std::fs::read_to_string(&path)?;
    toml::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))
}

/// Positional argument, then config file, then `./images`.
pub fn resolve_images_dir(cli_dir: Option<PathBuf>, config: &ConfigFile) -> PathBuf {
    cli_dir
        .or_else(|| config.images_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR))
}

pub fn resolve_check(o: CheckOverrides, config: &ConfigFile) -> anyhow::Result<CheckPlan> {
    let images_dir = resolve_images_dir(o.images_dir, config);
    let kind = o
        .backend
        .or(config.backend)
        .unwrap_or(BackendKind::Completion);
    let timeout_secs = o
        .timeout_secs
        .or(config.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let backend = match kind {
        BackendKind::Completion => {
            let api_key = o.api_key.filter(|k| !k.trim().is_empty()).ok_or_else(|| {
                anyhow::anyhow!(
                    "OpenAI API key not found. Please set the {} environment variable.",
                    API_KEY_ENV
                )
            })?;
            let c = &config.completion;
            BackendSettings {
                kind,
                base_url: o
                    .api_base
                    .or_else(|| c.api_base.clone())
                    .unwrap_or_else(|| DEFAULT_COMPLETION_API_BASE.to_string()),
                model: o
                    .model
                    .or_else(|| c.model.clone())
                    .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
                api_key: Some(api_key),
                max_tokens: o
                    .max_tokens
                    .or(c.max_tokens)
                    .unwrap_or(DEFAULT_COMPLETION_MAX_TOKENS),
                temperature: o
                    .temperature
                    .or(c.temperature)
                    .unwrap_or(DEFAULT_COMPLETION_TEMPERATURE),
                timeout_secs,
            }
        }
        BackendKind::Vision => {
            let v = &config.vision;
            BackendSettings {
                kind,
                base_url: o
                    .endpoint
                    .or_else(|| v.endpoint.clone())
                    .unwrap_or_else(|| DEFAULT_VISION_ENDPOINT.to_string()),
                model: o
                    .model
                    .or_else(|| v.model.clone())
                    .unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string()),
                api_key: o.api_key.filter(|k| !k.trim().is_empty()),
                max_tokens: o
                    .max_tokens
                    .or(v.max_tokens)
                    .unwrap_or(DEFAULT_VISION_MAX_TOKENS),
                temperature: o
                    .temperature
                    .or(v.temperature)
                    .unwrap_or(DEFAULT_VISION_TEMPERATURE),
                timeout_secs,
            }
        }
    };

    Ok(CheckPlan {
        images_dir,
        output: o
            .output
            .or_else(|| config.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH)),
        compliant_when: o
            .compliant_when
            .or(config.compliant_when)
            .unwrap_or(ExpectedAnswer::Yes),
        backend,
    })
}
