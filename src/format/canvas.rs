// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canvas export. Unlike the other formats every line, including the last, ends with `\n`.

use super::lines::INDENT;
use crate::model::canvas::{CanvasItem, EmpathyMap, UserPersona};

fn write_canvas_item(out: &mut String, item: &CanvasItem) {
    out.push_str(&item.title);
    out.push('\n');
    for line in &item.text {
        out.push_str(INDENT);
        out.push_str(line);
        out.push('\n');
    }
}

/// Export a single titled block: the title, then each text line one level deeper.
pub fn render_canvas_item(item: &CanvasItem) -> String {
    let mut out = String::new();
    write_canvas_item(&mut out, item);
    out
}

/// Export canvas blocks in the given order, back to back.
pub fn render_canvas<'a>(items: impl IntoIterator<Item = &'a CanvasItem>) -> String {
    let mut out = String::new();
    for item in items {
        write_canvas_item(&mut out, item);
    }
    out
}

pub fn render_empathy_map(map: &EmpathyMap) -> String {
    let mut out = String::new();
    out.push_str(&map.image_url);
    out.push('\n');
    for item in map.items() {
        write_canvas_item(&mut out, item);
    }
    out
}

pub fn render_user_persona(persona: &UserPersona) -> String {
    let mut out = String::new();
    out.push_str(&persona.url.title);
    out.push('\n');
    out.push_str(INDENT);
    out.push_str(&persona.url.url);
    out.push('\n');
    for item in persona.items() {
        write_canvas_item(&mut out, item);
    }
    out
}
