// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Gantt chart spanning `from..to`.
///
/// Dates are kept as the editor wrote them (`YYYY-MM-DD`) and are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GanttChart {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub chart_items: Vec<ChartItem>,
}

/// A section of the chart grouping related schedules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ChartItem {
    pub title: String,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

impl ChartItem {
    pub fn new(title: impl Into<String>, schedules: Vec<Schedule>) -> Self {
        Self { title: title.into(), schedules }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Schedule {
    pub from: String,
    pub to: String,
    pub title: String,
}

impl Schedule {
    pub fn new(title: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into(), title: title.into() }
    }
}
