// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Typed diagram models.
//!
//! Every diagram is one variant of the closed [`Diagram`] type. Values are produced by the editor's
//! parser (or deserialized from JSON) and consumed read-only by [`crate::format`].

pub mod canvas;
pub mod diagram;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod gantt;
pub mod kanban;
pub mod sequence;
pub mod story_map;
pub mod table;
pub mod tree;

pub use canvas::{
    BusinessModelCanvas, CanvasItem, EmpathyMap, FourLs, Kpt, OpportunityCanvas, PersonaUrl,
    StartStopContinue, UserPersona,
};
pub use diagram::{diagram_schema, Diagram, DiagramKind, UnknownDiagramKind};
pub use gantt::{ChartItem, GanttChart, Schedule};
pub use kanban::{Card, Kanban, KanbanList};
pub use sequence::{
    AltBlock, Fragment, Message, MessageGroup, MessageKind, ParBlock, SequenceBlockKind,
    SequenceDiagram, SequenceItem,
};
pub use story_map::{Activity, Story, Task, UserStoryMap};
pub use table::{
    Column, ColumnAttribute, ColumnType, ColumnTypeName, ErDiagram, ErTable, Relation,
    RelationKind, Table,
};
pub use tree::{TreeDiagram, TreeNode};
