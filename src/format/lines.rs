// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// One level of nesting in every text format.
pub const INDENT: &str = "    ";

pub(crate) fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Builds `\n`-joined output one indented line at a time, without a trailing newline.
#[derive(Debug, Default)]
pub(crate) struct Lines {
    out: String,
    started: bool,
}

impl Lines {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, depth: usize, text: &str) {
        self.push_with(depth, |out| out.push_str(text));
    }

    pub(crate) fn push_with(&mut self, depth: usize, write: impl FnOnce(&mut String)) {
        self.separate();
        push_indent(&mut self.out, depth);
        write(&mut self.out);
    }

    /// An empty line with no indentation, matching an empty segment in a `\n` join.
    pub(crate) fn blank(&mut self) {
        self.separate();
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    fn separate(&mut self) {
        if self.started {
            self.out.push('\n');
        }
        self.started = true;
    }
}
