// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// User story map: activities, their tasks, and the stories under each task.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct UserStoryMap {
    /// Release labels; emitted as a `#labels:` header line when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Activity {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Activity {
    pub fn new(name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self { name: name.into(), tasks }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Task {
    pub name: String,
    #[serde(default)]
    pub stories: Vec<Story>,
}

impl Task {
    pub fn new(name: impl Into<String>, stories: Vec<Story>) -> Self {
        Self { name: name.into(), stories }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Story {
    pub name: String,
    /// Release index; the story is indented `release + 1` levels.
    #[serde(default)]
    pub release: u32,
}

impl Story {
    pub fn new(name: impl Into<String>, release: u32) -> Self {
        Self { name: name.into(), release }
    }
}
