// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::canvas::{BusinessModelCanvas, CanvasItem, Kpt};
use super::sequence::{Fragment, Message, MessageKind, SequenceDiagram, SequenceItem};
use super::story_map::{Activity, Story, Task, UserStoryMap};
use super::tree::{TreeDiagram, TreeNode};

/// `{ title: name, text: [name, "text"] }`, the item every canvas fixture is built from.
pub(crate) fn named_item(name: &str) -> CanvasItem {
    CanvasItem::new(name).with_text([name, "text"])
}

pub(crate) fn kpt() -> Kpt {
    Kpt { keep: named_item("keep"), problem: named_item("problem"), try_: named_item("try") }
}

pub(crate) fn business_model_canvas() -> BusinessModelCanvas {
    BusinessModelCanvas {
        key_partners: named_item("keyPartners"),
        customer_segments: named_item("customerSegments"),
        value_proposition: named_item("valueProposition"),
        key_activities: named_item("keyActivities"),
        channels: named_item("channels"),
        revenue_streams: named_item("revenueStreams"),
        cost_structure: named_item("costStructure"),
        key_resources: named_item("keyResources"),
        customer_relationships: named_item("customerRelationships"),
    }
}

/// test1 with three children, each carrying a single grandchild.
pub(crate) fn tree() -> TreeDiagram {
    TreeDiagram::new(TreeNode::new("test1").with_children([
        TreeNode::new("test2").with_children([TreeNode::new("test22")]),
        TreeNode::new("test3").with_children([TreeNode::new("test33")]),
        TreeNode::new("test4").with_children([TreeNode::new("test44")]),
    ]))
}

/// A chain of `depth + 1` nodes, so the deepest node sits at `depth`.
pub(crate) fn tree_chain(depth: usize) -> TreeNode {
    let mut node = TreeNode::new(format!("n{depth}"));
    for level in (0..depth).rev() {
        node = TreeNode::new(format!("n{level}")).with_children([node]);
    }
    node
}

pub(crate) fn story_map() -> UserStoryMap {
    UserStoryMap {
        labels: None,
        activities: vec![Activity::new(
            "activity",
            vec![Task::new("task", vec![Story::new("story1", 1), Story::new("story2", 2)])],
        )],
    }
}

pub(crate) fn sequence_with_nested_blocks() -> SequenceDiagram {
    SequenceDiagram {
        participants: vec!["A".to_owned(), "B".to_owned()],
        items: vec![
            SequenceItem::messages(vec![Message::new(MessageKind::Sync, "A", "B", "hi")]),
            SequenceItem::Loop(Fragment::new(
                "retry",
                vec![SequenceItem::Opt(Fragment::new(
                    "if idle",
                    vec![SequenceItem::messages(vec![Message::new(
                        MessageKind::Reply,
                        "B",
                        "A",
                        "ack",
                    )])],
                ))],
            )),
        ],
    }
}

/// Blocks nested `depth` levels deep, innermost holding a single message.
pub(crate) fn sequence_nesting(depth: usize) -> SequenceDiagram {
    let mut item = SequenceItem::messages(vec![Message::new(MessageKind::Sync, "A", "B", "m")]);
    for level in (0..depth).rev() {
        item = SequenceItem::Opt(Fragment::new(format!("level {level}"), vec![item]));
    }
    SequenceDiagram { participants: vec!["A".to_owned(), "B".to_owned()], items: vec![item] }
}
