use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, MarkerArg};

pub const CONFIG_DIR_ENV: &str = "WEATHERFX_CONFIG_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MotionSetting {
    #[default]
    Full,
    Reduced,
    Off,
}

impl MotionSetting {
    /// Multiplier applied to wall-clock time before it reaches the effect clock.
    #[must_use]
    pub fn time_scale(self) -> f32 {
        match self {
            Self::Full => 1.0,
            Self::Reduced => 0.5,
            Self::Off => 0.0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Reduced => "reduced",
            Self::Off => "off",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuntimeSettings {
    pub motion: MotionSetting,
    pub marker: MarkerArg,
    pub no_flash: bool,
}

impl RuntimeSettings {
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        let mut settings = Self::default();
        settings.apply_cli_overrides(cli);
        settings
    }

    /// Flags given on the command line win over anything loaded from disk.
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if cli.no_animation {
            self.motion = MotionSetting::Off;
        } else if cli.reduced_motion {
            self.motion = MotionSetting::Reduced;
        }
        if cli.no_flash {
            self.no_flash = true;
        }
        if let Some(marker) = cli.marker {
            self.marker = marker;
        }
    }
}

pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    if !enable_disk {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    }
    match settings_path() {
        Some(path) => (load_runtime_settings_from(cli, &path), Some(path)),
        None => (RuntimeSettings::from_cli_defaults(cli), None),
    }
}

/// Reads saved settings from `path` and layers the CLI flags on top. A missing or unreadable
/// file falls back to defaults.
pub fn load_runtime_settings_from(cli: &Cli, path: &Path) -> RuntimeSettings {
    let mut settings = match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<RuntimeSettings>(&content) {
            Ok(saved) => saved,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring unreadable settings");
                RuntimeSettings::default()
            }
        },
        Err(_) => RuntimeSettings::default(),
    };
    settings.apply_cli_overrides(cli);
    settings
}

pub fn save_runtime_settings(path: &Path, settings: RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(&settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("weatherfx")
            .join("settings.json"),
    )
}
