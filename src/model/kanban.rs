// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Kanban {
    #[serde(default)]
    pub lists: Vec<KanbanList>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct KanbanList {
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl KanbanList {
    pub fn new<I, S>(name: impl Into<String>, cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), cards: cards.into_iter().map(Card::new).collect() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Card {
    pub text: String,
}

impl Card {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
