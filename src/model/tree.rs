// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A node of a mind map, site map or impact map.
///
/// Children are owned, so a tree cannot contain cycles; depth is bounded at render time instead.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct TreeNode {
    pub text: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), children: Vec::new() }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }
}

/// Shared shape of `MindMap`, `SiteMap` and `ImpactMap`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct TreeDiagram {
    pub node: TreeNode,
}

impl TreeDiagram {
    pub fn new(node: TreeNode) -> Self {
        Self { node }
    }
}
