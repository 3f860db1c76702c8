// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::canvas::{
    BusinessModelCanvas, EmpathyMap, FourLs, Kpt, OpportunityCanvas, StartStopContinue,
    UserPersona,
};
use super::gantt::GanttChart;
use super::kanban::Kanban;
use super::sequence::SequenceDiagram;
use super::story_map::UserStoryMap;
use super::table::{ErDiagram, Table};
use super::tree::TreeDiagram;

/// The type of diagram, as named by the `name` tag of a [`Diagram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagramKind {
    UserStoryMap,
    BusinessModelCanvas,
    OpportunityCanvas,
    FourLs,
    StartStopContinue,
    Kpt,
    UserPersona,
    MindMap,
    EmpathyMap,
    Table,
    SiteMap,
    ImpactMap,
    GanttChart,
    Er,
    Kanban,
    SequenceDiagram,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 16] = [
        Self::UserStoryMap,
        Self::BusinessModelCanvas,
        Self::OpportunityCanvas,
        Self::FourLs,
        Self::StartStopContinue,
        Self::Kpt,
        Self::UserPersona,
        Self::MindMap,
        Self::EmpathyMap,
        Self::Table,
        Self::SiteMap,
        Self::ImpactMap,
        Self::GanttChart,
        Self::Er,
        Self::Kanban,
        Self::SequenceDiagram,
    ];

    /// The canonical type name consumers use to pick a tokenizer or renderer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserStoryMap => "UserStoryMap",
            Self::BusinessModelCanvas => "BusinessModelCanvas",
            Self::OpportunityCanvas => "OpportunityCanvas",
            Self::FourLs => "4Ls",
            Self::StartStopContinue => "StartStopContinue",
            Self::Kpt => "Kpt",
            Self::UserPersona => "UserPersona",
            Self::MindMap => "MindMap",
            Self::EmpathyMap => "EmpathyMap",
            Self::Table => "Table",
            Self::SiteMap => "SiteMap",
            Self::ImpactMap => "ImpactMap",
            Self::GanttChart => "GanttChart",
            Self::Er => "ER",
            Self::Kanban => "Kanban",
            Self::SequenceDiagram => "SequenceDiagram",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown diagram type name: {name:?}")]
pub struct UnknownDiagramKind {
    name: String,
}

impl UnknownDiagramKind {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for DiagramKind {
    type Err = UnknownDiagramKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownDiagramKind { name: s.to_owned() })
    }
}

/// A single typed diagram, tagged by `name` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "name")]
pub enum Diagram {
    UserStoryMap(UserStoryMap),
    BusinessModelCanvas(BusinessModelCanvas),
    OpportunityCanvas(OpportunityCanvas),
    #[serde(rename = "4Ls")]
    FourLs(FourLs),
    StartStopContinue(StartStopContinue),
    Kpt(Kpt),
    UserPersona(UserPersona),
    MindMap(TreeDiagram),
    EmpathyMap(EmpathyMap),
    Table(Table),
    SiteMap(TreeDiagram),
    ImpactMap(TreeDiagram),
    GanttChart(GanttChart),
    #[serde(rename = "ER")]
    Er(ErDiagram),
    Kanban(Kanban),
    SequenceDiagram(SequenceDiagram),
}

impl Diagram {
    pub fn kind(&self) -> DiagramKind {
        match self {
            Self::UserStoryMap(_) => DiagramKind::UserStoryMap,
            Self::BusinessModelCanvas(_) => DiagramKind::BusinessModelCanvas,
            Self::OpportunityCanvas(_) => DiagramKind::OpportunityCanvas,
            Self::FourLs(_) => DiagramKind::FourLs,
            Self::StartStopContinue(_) => DiagramKind::StartStopContinue,
            Self::Kpt(_) => DiagramKind::Kpt,
            Self::UserPersona(_) => DiagramKind::UserPersona,
            Self::MindMap(_) => DiagramKind::MindMap,
            Self::EmpathyMap(_) => DiagramKind::EmpathyMap,
            Self::Table(_) => DiagramKind::Table,
            Self::SiteMap(_) => DiagramKind::SiteMap,
            Self::ImpactMap(_) => DiagramKind::ImpactMap,
            Self::GanttChart(_) => DiagramKind::GanttChart,
            Self::Er(_) => DiagramKind::Er,
            Self::Kanban(_) => DiagramKind::Kanban,
            Self::SequenceDiagram(_) => DiagramKind::SequenceDiagram,
        }
    }

    /// Parses a diagram from its JSON form (as handed over by the editor or embedding library).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// JSON Schema describing the wire form of [`Diagram`].
pub fn diagram_schema() -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(schemars::schema_for!(Diagram))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::{diagram_schema, Diagram, DiagramKind};
    use crate::model::fixtures;

    #[rstest]
    #[case(DiagramKind::FourLs, "4Ls")]
    #[case(DiagramKind::Er, "ER")]
    #[case(DiagramKind::Kpt, "Kpt")]
    #[case(DiagramKind::SequenceDiagram, "SequenceDiagram")]
    fn kind_names_match_wire_tags(#[case] kind: DiagramKind, #[case] name: &str) {
        assert_eq!(kind.as_str(), name);
        assert_eq!(kind.to_string(), name);
        assert_eq!(DiagramKind::from_str(name), Ok(kind));
    }

    #[test]
    fn every_kind_round_trips_through_its_name() {
        for kind in DiagramKind::ALL {
            assert_eq!(kind.as_str().parse::<DiagramKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_name_is_rejected() {
        let err = "Freeform".parse::<DiagramKind>().expect_err("unknown kind");
        assert_eq!(err.name(), "Freeform");
        assert_eq!(err.to_string(), "unknown diagram type name: \"Freeform\"");
    }

    #[test]
    fn diagram_kind_follows_variant() {
        assert_eq!(Diagram::Kpt(fixtures::kpt()).kind(), DiagramKind::Kpt);
        assert_eq!(Diagram::MindMap(fixtures::tree()).kind(), DiagramKind::MindMap);
        assert_eq!(Diagram::SiteMap(fixtures::tree()).kind(), DiagramKind::SiteMap);
    }

    #[test]
    fn from_json_dispatches_on_name_tag() {
        let diagram = Diagram::from_json(
            r#"{"name":"4Ls","liked":{"title":"l"},"learned":{"title":"le"},"lacked":{"title":"la"},"longedFor":{"title":"lo"}}"#,
        )
        .expect("4Ls diagram");
        assert_eq!(diagram.kind(), DiagramKind::FourLs);

        let err = Diagram::from_json(r#"{"name":"Freeform"}"#).expect_err("unknown tag");
        assert!(err.to_string().contains("Freeform"), "unexpected error: {err}");
    }

    #[test]
    fn json_round_trip_preserves_the_diagram() {
        let diagram = Diagram::SequenceDiagram(fixtures::sequence_with_nested_blocks());
        let json = serde_json::to_string(&diagram).expect("serialize");
        assert_eq!(Diagram::from_json(&json).expect("deserialize"), diagram);
    }

    #[test]
    fn schema_lists_every_wire_tag() {
        let schema = diagram_schema().expect("schema").to_string();
        for kind in DiagramKind::ALL {
            assert!(
                schema.contains(&format!("\"{}\"", kind.as_str())),
                "schema is missing {kind}"
            );
        }
    }
}
