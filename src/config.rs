// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Render configuration.
//!
//! Configuration files are TOML with a single `[render]` table:
//!
//! ```toml
//! [render]
//! max_depth = 128
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Default nesting limit for trees and sequence blocks.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Largest accepted `max_depth`; recursion past this risks exhausting the stack.
pub const MAX_DEPTH_LIMIT: usize = 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("max_depth must be between 1 and {limit}, got {0}", limit = MAX_DEPTH_LIMIT)]
    InvalidMaxDepth(usize),
}

/// Limits applied while rendering a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Deepest tree node (root = 0) or block nesting level (top level = 0) that renders.
    max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl RenderConfig {
    pub fn new(max_depth: usize) -> Result<Self, ConfigError> {
        Self { max_depth }.validated()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::InvalidMaxDepth(self.max_depth));
        }
        Ok(self)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    render: RenderConfig,
}

/// Parses configuration from TOML source.
pub fn parse_config(source: &str) -> Result<RenderConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(source)?;
    file.render.validated()
}

/// Loads configuration from a TOML file.
pub fn load_config(path: impl AsRef<Path>) -> Result<RenderConfig, ConfigError> {
    let path = path.as_ref();
    debug!(path = path.display().to_string(); "Loading render configuration");

    let source = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    parse_config(&source)
}
