// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::lines::Lines;
use super::RenderError;
use crate::config::RenderConfig;
use crate::model::{DiagramKind, UserStoryMap};

/// Export a user story map.
///
/// Activities are unindented, tasks sit one level in, and each story is indented
/// `release + 1` levels. A non-empty label list is emitted first as `#labels: a,b,c`.
/// Input order is kept as-is. A story whose indent would exceed [`RenderConfig::max_depth`] is
/// rejected.
pub fn render_user_story_map(
    map: &UserStoryMap,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let mut out = String::new();

    if let Some(labels) = map.labels.as_deref().filter(|labels| !labels.is_empty()) {
        out.push_str("#labels: ");
        out.push_str(&labels.join(","));
        out.push('\n');
    }

    let mut lines = Lines::new();
    for activity in &map.activities {
        lines.push(0, &activity.name);
        for task in &activity.tasks {
            lines.push(1, &task.name);
            for story in &task.stories {
                let depth = usize::try_from(story.release).unwrap_or(usize::MAX).saturating_add(1);
                if depth > config.max_depth() {
                    return Err(RenderError::depth_exceeded(
                        DiagramKind::UserStoryMap,
                        config.max_depth(),
                    ));
                }
                lines.push(depth, &story.name);
            }
        }
    }

    out.push_str(&lines.finish());
    Ok(out)
}
