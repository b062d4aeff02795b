// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Designer style constants.
//!
//! All sizes are in diagram pixels. Missing sections and keys keep the built-in defaults,
//! except that a width/height pair must be given whole.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable naming a JSON file to load instead of the defaults.
pub const DESIGNER_CONFIG_ENV: &str = "CATCHBOX_DESIGNER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerConfig {
    pub compound_statement: CompoundStatementStyle,
    pub statement: StatementStyle,
    pub action_box: Size,
    pub breakpoint: BreakpointStyle,
    pub hover: HoverStyle,
    pub activation: ActivationConfig,
}

/// A width/height pair. Both keys are required when the object is present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            compound_statement: CompoundStatementStyle::default(),
            statement: StatementStyle::default(),
            action_box: Size::new(120.0, 35.0),
            breakpoint: BreakpointStyle::default(),
            hover: HoverStyle::default(),
            activation: ActivationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self { left: 10.0, top: 5.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub padding: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { padding: 5.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompoundStatementStyle {
    pub heading: Size,
    pub padding: Padding,
    pub text: TextStyle,
}

impl Default for CompoundStatementStyle {
    fn default() -> Self {
        Self { heading: Size::new(60.0, 30.0), padding: Padding::default(), text: TextStyle::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementStyle {
    pub height: f64,
}

impl Default for StatementStyle {
    fn default() -> Self {
        Self { height: 30.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointStyle {
    pub size: f64,
}

impl Default for BreakpointStyle {
    fn default() -> Self {
        Self { size: 14.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverStyle {
    pub action_region: Size,
    pub main_region: Size,
}

impl Default for HoverStyle {
    fn default() -> Self {
        Self { action_region: Size::new(50.0, 25.0), main_region: Size::new(50.0, 50.0) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationConfig {
    pub delay_ms: u64,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self { delay_ms: 300 }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Json { path: Option<PathBuf>, source: serde_json::Error },
    Invalid { key: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read designer config {}: {source}", path.display())
            }
            Self::Json { path: Some(path), source } => {
                write!(f, "invalid designer config {}: {source}", path.display())
            }
            Self::Json { path: None, source } => write!(f, "invalid designer config: {source}"),
            Self::Invalid { key, value } => {
                write!(f, "designer config `{key}` must be finite and non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}

impl DesignerConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Json { path: None, source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|source| ConfigError::Json { path: Some(path.to_path_buf()), source })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file named by [`DESIGNER_CONFIG_ENV`], or the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var_os(DESIGNER_CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_path(PathBuf::from(path)),
            _ => {
                tracing::debug!(var = DESIGNER_CONFIG_ENV, "using built-in designer config");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let cs = &self.compound_statement;
        let checks: [(&'static str, f64); 13] = [
            ("compound_statement.heading.width", cs.heading.width),
            ("compound_statement.heading.height", cs.heading.height),
            ("compound_statement.padding.left", cs.padding.left),
            ("compound_statement.padding.top", cs.padding.top),
            ("compound_statement.text.padding", cs.text.padding),
            ("statement.height", self.statement.height),
            ("action_box.width", self.action_box.width),
            ("action_box.height", self.action_box.height),
            ("breakpoint.size", self.breakpoint.size),
            ("hover.action_region.width", self.hover.action_region.width),
            ("hover.action_region.height", self.hover.action_region.height),
            ("hover.main_region.width", self.hover.main_region.width),
            ("hover.main_region.height", self.hover.main_region.height),
        ];
        for (key, value) in checks {
            check_size(key, value)?;
        }
        Ok(())
    }

    pub fn activation_delay(&self) -> Duration {
        Duration::from_millis(self.activation.delay_ms)
    }
}

fn check_size(key: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { key, value })
    }
}
