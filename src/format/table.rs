// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Generic table and entity-relation export.

use super::lines::Lines;
use crate::model::table::{Column, ErDiagram, Table};

fn push_row(lines: &mut Lines, row: &[String]) {
    let Some((first, rest)) = row.split_first() else {
        lines.blank();
        return;
    };
    lines.push(0, first);
    for cell in rest {
        lines.push(1, cell);
    }
}

/// Export a table: each row's first cell unindented, the remaining cells one level in.
///
/// A table without a header exports as an empty string, whatever its rows.
pub fn render_table(table: &Table) -> String {
    if table.header.is_empty() {
        return String::new();
    }

    let mut lines = Lines::new();
    push_row(&mut lines, &table.header);
    for row in &table.items {
        push_row(&mut lines, row);
    }
    lines.finish()
}

fn write_column(out: &mut String, column: &Column) {
    out.push_str(&column.name);
    out.push(' ');
    out.push_str(column.column_type.name.as_str());
    if let Some(length) = column.column_type.display_length() {
        let mut buf = itoa::Buffer::new();
        out.push('(');
        out.push_str(buf.format(length));
        out.push(')');
    }
    out.push(' ');
    out.push_str(column.attribute.name());
    if let Some(value) = column.attribute.value() {
        out.push(' ');
        out.push_str(value);
    }
}

/// Export an ER schema as a `relations` section followed by a `tables` section.
pub fn render_er(er: &ErDiagram) -> String {
    let mut lines = Lines::new();

    lines.push(0, "relations");
    for relation in &er.relations {
        lines.push_with(1, |out| {
            out.push_str(&relation.table1);
            out.push(' ');
            out.push_str(relation.relation.as_token());
            out.push(' ');
            out.push_str(&relation.table2);
        });
    }

    lines.push(0, "tables");
    for table in &er.tables {
        lines.push(1, &table.name);
        for column in &table.columns {
            lines.push_with(2, |out| write_column(out, column));
        }
    }

    lines.finish()
}
