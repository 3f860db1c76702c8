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
use crate::model::{DiagramKind, TreeNode};

fn render_node(
    lines: &mut Lines,
    node: &TreeNode,
    depth: usize,
    kind: DiagramKind,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    if depth > config.max_depth() {
        return Err(RenderError::depth_exceeded(kind, config.max_depth()));
    }

    lines.push(depth, &node.text);
    for child in &node.children {
        render_node(lines, child, depth + 1, kind, config)?;
    }
    Ok(())
}

/// Export a mind map, site map or impact map as a pre-order walk, one indent level per depth.
///
/// `kind` only labels a [`RenderError::DepthExceeded`]; all three kinds share this format.
pub fn render_tree(
    root: &TreeNode,
    kind: DiagramKind,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let mut lines = Lines::new();
    render_node(&mut lines, root, 0, kind, config)?;
    Ok(lines.finish())
}
