// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use textmap::model::{
    Activity, AltBlock, Diagram, Fragment, Message, MessageKind, SequenceDiagram, SequenceItem,
    Story, Task, TreeDiagram, TreeNode, UserStoryMap,
};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Wide,
    Deep,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Wide => "wide",
            Self::Deep => "deep",
        }
    }
}

pub mod tree {
    use super::{Case, Diagram, TreeDiagram, TreeNode};

    fn build(label: &str, fanout: usize, depth: usize) -> TreeNode {
        let node = TreeNode::new(label);
        if depth == 0 {
            return node;
        }
        node.with_children(
            (0..fanout).map(|idx| build(&format!("{label}.{idx}"), fanout, depth - 1)),
        )
    }

    pub fn fixture(case: Case) -> Diagram {
        let root = match case {
            Case::Small => build("root", 3, 2),
            Case::Wide => build("root", 12, 3),
            Case::Deep => build("root", 2, 12),
        };
        Diagram::MindMap(TreeDiagram::new(root))
    }
}

pub mod story_map {
    use super::{Activity, Case, Diagram, Story, Task, UserStoryMap};

    pub fn fixture(case: Case) -> Diagram {
        let (activities, tasks, stories) = match case {
            Case::Small => (3, 3, 3),
            Case::Wide => (40, 10, 8),
            Case::Deep => (4, 4, 64),
        };

        let activities = (0..activities)
            .map(|a| {
                let tasks = (0..tasks)
                    .map(|t| {
                        let stories = (0..stories)
                            .map(|s| Story::new(format!("story {a}.{t}.{s}"), (s % 6) as u32))
                            .collect();
                        Task::new(format!("task {a}.{t}"), stories)
                    })
                    .collect();
                Activity::new(format!("activity {a}"), tasks)
            })
            .collect();

        Diagram::UserStoryMap(UserStoryMap {
            labels: Some((1..=6).map(|r| format!("R{r}")).collect()),
            activities,
        })
    }
}

pub mod seq {
    use super::{
        AltBlock, Case, Diagram, Fragment, Message, MessageKind, SequenceDiagram, SequenceItem,
    };

    fn exchange(idx: usize) -> SequenceItem {
        SequenceItem::messages(vec![
            Message::new(MessageKind::Sync, "Client", "Server", format!("request {idx}")),
            Message::new(MessageKind::Reply, "Server", "Client", format!("response {idx}")),
        ])
    }

    fn nested(depth: usize, idx: usize) -> SequenceItem {
        let mut item = exchange(idx);
        for level in 0..depth {
            item = match level % 3 {
                0 => SequenceItem::Loop(Fragment::new(format!("loop {level}"), vec![item])),
                1 => SequenceItem::Opt(Fragment::new(format!("opt {level}"), vec![item])),
                _ => SequenceItem::Alt(AltBlock {
                    if_message: Fragment::new("ok", vec![item]),
                    else_message: Fragment::new("error", vec![exchange(idx)]),
                }),
            };
        }
        item
    }

    pub fn fixture(case: Case) -> Diagram {
        let (items, depth) = match case {
            Case::Small => (4, 1),
            Case::Wide => (200, 2),
            Case::Deep => (8, 40),
        };
        Diagram::SequenceDiagram(SequenceDiagram {
            participants: vec!["Client".to_owned(), "Server".to_owned()],
            items: (0..items).map(|idx| nested(depth, idx)).collect(),
        })
    }
}

pub fn batch(count: usize) -> Vec<Diagram> {
    (0..count)
        .map(|idx| match idx % 3 {
            0 => tree::fixture(Case::Small),
            1 => story_map::fixture(Case::Small),
            _ => seq::fixture(Case::Small),
        })
        .collect()
}
