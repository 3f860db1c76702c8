// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::lines::Lines;
use crate::model::Kanban;

/// Export a kanban board: each list name followed directly by its cards, one level in.
pub fn render_kanban(kanban: &Kanban) -> String {
    let mut lines = Lines::new();
    for list in &kanban.lists {
        lines.push(0, &list.name);
        for card in &list.cards {
            lines.push(1, &card.text);
        }
    }
    lines.finish()
}
