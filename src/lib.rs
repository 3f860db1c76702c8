// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Textmap: canonical text serialization for editor diagrams.
//!
//! Story maps, canvases, mind maps, tables, ER schemas, kanban boards, sequence diagrams and Gantt
//! charts are modelled as variants of [`model::Diagram`] and exported by [`format::render`] to
//! the indentation-based text the editor displays, shares and re-parses.

pub mod config;
pub mod format;
pub mod model;

pub use config::RenderConfig;
pub use format::{render, render_all, render_with, type_name, RenderError};
pub use model::{Diagram, DiagramKind};
