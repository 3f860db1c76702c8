// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram-to-text export.
//!
//! Every diagram kind has a canonical, indentation-significant text form (four spaces per level).
//! [`render`] picks the exporter for a [`Diagram`]; [`type_name`] reports the tag consumers use to
//! choose a tokenizer. Output is deterministic: the same value always exports to the same bytes.

pub mod canvas;
pub mod gantt;
pub mod kanban;
mod lines;
pub mod sequence;
pub mod story_map;
pub mod table;
pub mod tree;

use log::{debug, trace, warn};
use rayon::prelude::*;
use thiserror::Error;

use crate::config::RenderConfig;
use crate::model::{Diagram, DiagramKind};

pub use canvas::{render_canvas, render_canvas_item, render_empathy_map, render_user_persona};
pub use gantt::render_gantt_chart;
pub use kanban::render_kanban;
pub use lines::INDENT;
pub use sequence::render_sequence_diagram;
pub use story_map::render_user_story_map;
pub use table::{render_er, render_table};
pub use tree::render_tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{kind} nesting exceeds the maximum supported depth of {max_depth}")]
    DepthExceeded { kind: DiagramKind, max_depth: usize },
}

impl RenderError {
    pub(crate) fn depth_exceeded(kind: DiagramKind, max_depth: usize) -> Self {
        warn!(
            kind = kind.as_str(),
            max_depth = max_depth;
            "Diagram nesting exceeds configured maximum"
        );
        Self::DepthExceeded { kind, max_depth }
    }
}

/// The canonical type name of a diagram, e.g. `"Kpt"` or `"4Ls"`.
pub fn type_name(diagram: &Diagram) -> &'static str {
    diagram.kind().as_str()
}

/// Export a diagram with the default [`RenderConfig`].
pub fn render(diagram: &Diagram) -> Result<String, RenderError> {
    render_with(diagram, &RenderConfig::default())
}

/// Export a diagram to its text form.
///
/// Only trees, sequence diagrams and story maps can fail, when nested deeper than the configured
/// maximum.
pub fn render_with(diagram: &Diagram, config: &RenderConfig) -> Result<String, RenderError> {
    let kind = diagram.kind();
    trace!(kind = kind.as_str(); "Rendering diagram");

    let text = match diagram {
        Diagram::UserStoryMap(map) => render_user_story_map(map, config)?,
        Diagram::BusinessModelCanvas(canvas) => render_canvas(canvas.items()),
        Diagram::OpportunityCanvas(canvas) => render_canvas(canvas.items()),
        Diagram::FourLs(canvas) => render_canvas(canvas.items()),
        Diagram::StartStopContinue(canvas) => render_canvas(canvas.items()),
        Diagram::Kpt(canvas) => render_canvas(canvas.items()),
        Diagram::UserPersona(persona) => render_user_persona(persona),
        Diagram::MindMap(tree) | Diagram::SiteMap(tree) | Diagram::ImpactMap(tree) => {
            render_tree(&tree.node, kind, config)?
        }
        Diagram::EmpathyMap(map) => render_empathy_map(map),
        Diagram::Table(table) => render_table(table),
        Diagram::GanttChart(chart) => render_gantt_chart(chart),
        Diagram::Er(er) => render_er(er),
        Diagram::Kanban(kanban) => render_kanban(kanban),
        Diagram::SequenceDiagram(sequence) => render_sequence_diagram(sequence, config)?,
    };

    Ok(text)
}

/// Export many diagrams in parallel. Results are returned in input order.
pub fn render_all(diagrams: &[Diagram], config: &RenderConfig) -> Vec<Result<String, RenderError>> {
    debug!(count = diagrams.len(); "Rendering diagram batch");
    diagrams.par_iter().map(|diagram| render_with(diagram, config)).collect()
}
