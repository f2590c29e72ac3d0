use std::path::{Path, PathBuf};
use std::time::Duration;

use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use twinhealth_export::styles::ReportStyles;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwinHealthConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Simulated processing latency before each analysis.
    #[serde(default)]
    pub simulated_latency_ms: u64,
    /// Where reports are written when no `--out` is given. Defaults to the
    /// working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Printed on clinician reports in place of the placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinician_name: Option<String>,
    #[serde(default)]
    pub styles: ReportStyles,
}

impl Default for TwinHealthConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            simulated_latency_ms: 0,
            output_dir: None,
            clinician_name: None,
            styles: ReportStyles::default(),
        }
    }
}

impl TwinHealthConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("twinhealth").join("config.json"))
}

/// Load the config at `path`, or defaults when the file does not exist.
pub fn load_config(path: &Path) -> eyre::Result<TwinHealthConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(TwinHealthConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config at {}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("config at {} is not valid JSON", path.display()))?;
    let raw_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version = u32::try_from(raw_version).map_err(|_| {
        eyre::eyre!(
            "config version {raw_version} is newer than supported version {CURRENT_VERSION}"
        )
    })?;

    let migrated = migrate(json, on_disk_version)?;
    let config: TwinHealthConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        eyre::bail!(
            "config version {from_version} is newer than supported version {CURRENT_VERSION}"
        );
    }

    // v0 -> v1: same shape, just stamp the version.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &TwinHealthConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
