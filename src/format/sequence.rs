// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::lines::{Lines, INDENT};
use super::RenderError;
use crate::config::RenderConfig;
use crate::model::sequence::{Fragment, Message, SequenceBlockKind, SequenceDiagram, SequenceItem};
use crate::model::DiagramKind;

/// Walk state shared by every item of one diagram.
struct SequenceExport<'a> {
    lines: Lines,
    config: &'a RenderConfig,
}

impl SequenceExport<'_> {
    fn messages(&mut self, messages: &[Message], indent: usize) {
        // An empty group still occupies one (empty) line, like an empty segment of a join.
        if messages.is_empty() {
            self.lines.blank();
            return;
        }
        for message in messages {
            self.lines.push_with(indent, |out| {
                out.push_str(&message.from);
                out.push(' ');
                out.push_str(message.kind.as_token());
                out.push(' ');
                out.push_str(&message.to);
            });
            self.lines.push(indent + 1, &message.text);
        }
    }

    /// Fragment label one level in, its items two levels in.
    fn fragment(
        &mut self,
        fragment: &Fragment,
        indent: usize,
        nesting: usize,
    ) -> Result<(), RenderError> {
        self.lines.push(indent + 1, &fragment.text);
        for item in &fragment.items {
            self.item(item, indent + 2, nesting)?;
        }
        Ok(())
    }

    fn block(
        &mut self,
        kind: SequenceBlockKind,
        indent: usize,
        nesting: usize,
    ) -> Result<usize, RenderError> {
        let nesting = nesting + 1;
        if nesting > self.config.max_depth() {
            return Err(RenderError::depth_exceeded(
                DiagramKind::SequenceDiagram,
                self.config.max_depth(),
            ));
        }
        self.lines.push(indent, kind.keyword());
        Ok(nesting)
    }

    /// `nesting` counts enclosing blocks; top-level items are at `0`.
    fn item(
        &mut self,
        item: &SequenceItem,
        indent: usize,
        nesting: usize,
    ) -> Result<(), RenderError> {
        match item {
            SequenceItem::Messages(group) => self.messages(&group.messages, indent),
            SequenceItem::Alt(alt) => {
                let nesting = self.block(SequenceBlockKind::Alt, indent, nesting)?;
                self.fragment(&alt.if_message, indent, nesting)?;
                self.fragment(&alt.else_message, indent, nesting)?;
            }
            SequenceItem::Par(par) => {
                let nesting = self.block(SequenceBlockKind::Par, indent, nesting)?;
                for fragment in &par.par_messages {
                    self.fragment(fragment, indent, nesting)?;
                }
            }
            SequenceItem::Opt(fragment) => {
                self.single(SequenceBlockKind::Opt, fragment, indent, nesting)?;
            }
            SequenceItem::Loop(fragment) => {
                self.single(SequenceBlockKind::Loop, fragment, indent, nesting)?;
            }
            SequenceItem::Break(fragment) => {
                self.single(SequenceBlockKind::Break, fragment, indent, nesting)?;
            }
            SequenceItem::Critical(fragment) => {
                self.single(SequenceBlockKind::Critical, fragment, indent, nesting)?;
            }
            SequenceItem::Assert(fragment) => {
                self.single(SequenceBlockKind::Assert, fragment, indent, nesting)?;
            }
            SequenceItem::Neg(fragment) => {
                self.single(SequenceBlockKind::Neg, fragment, indent, nesting)?;
            }
            SequenceItem::Ignore(fragment) => {
                self.single(SequenceBlockKind::Ignore, fragment, indent, nesting)?;
            }
            SequenceItem::Consider(fragment) => {
                self.single(SequenceBlockKind::Consider, fragment, indent, nesting)?;
            }
        }
        Ok(())
    }

    fn single(
        &mut self,
        kind: SequenceBlockKind,
        fragment: &Fragment,
        indent: usize,
        nesting: usize,
    ) -> Result<(), RenderError> {
        let nesting = self.block(kind, indent, nesting)?;
        self.fragment(fragment, indent, nesting)
    }
}

/// Export a sequence diagram.
///
/// The output starts with a `participants` section, followed by the body items at indent 0.
/// Block nesting deeper than [`RenderConfig::max_depth`] is rejected.
pub fn render_sequence_diagram(
    diagram: &SequenceDiagram,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let mut out = String::from("participants\n");
    for (idx, participant) in diagram.participants.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(INDENT);
        out.push_str(participant);
    }
    out.push('\n');

    let mut export = SequenceExport { lines: Lines::new(), config };
    for item in &diagram.items {
        export.item(item, 0, 0)?;
    }
    out.push_str(&export.lines.finish());
    Ok(out)
}
