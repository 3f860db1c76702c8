// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SequenceDiagram {
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub items: Vec<SequenceItem>,
}

/// One entry of a sequence diagram body: a run of messages or a (possibly nested) block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SequenceItem {
    Messages(MessageGroup),
    Alt(AltBlock),
    Par(ParBlock),
    Opt(Fragment),
    Loop(Fragment),
    Break(Fragment),
    Critical(Fragment),
    Assert(Fragment),
    Neg(Fragment),
    Ignore(Fragment),
    Consider(Fragment),
}

impl SequenceItem {
    pub fn messages(messages: Vec<Message>) -> Self {
        Self::Messages(MessageGroup { messages })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceBlockKind {
    Alt,
    Par,
    Opt,
    Loop,
    Break,
    Critical,
    Assert,
    Neg,
    Ignore,
    Consider,
}

impl SequenceBlockKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Alt => "alt",
            Self::Par => "par",
            Self::Opt => "opt",
            Self::Loop => "loop",
            Self::Break => "break",
            Self::Critical => "critical",
            Self::Assert => "assert",
            Self::Neg => "neg",
            Self::Ignore => "ignore",
            Self::Consider => "consider",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct MessageGroup {
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// A labelled section of a block together with the items nested in it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Fragment {
    pub text: String,
    #[serde(default)]
    pub items: Vec<SequenceItem>,
}

impl Fragment {
    pub fn new(text: impl Into<String>, items: Vec<SequenceItem>) -> Self {
        Self { text: text.into(), items }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AltBlock {
    pub if_message: Fragment,
    pub else_message: Fragment,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParBlock {
    #[serde(default)]
    pub par_messages: Vec<Fragment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum MessageKind {
    #[serde(rename = "->")]
    Sync,
    #[serde(rename = "->>")]
    Async,
    #[serde(rename = "-->")]
    Reply,
    #[serde(rename = "o->")]
    Found,
    #[serde(rename = "->o")]
    Lost,
}

impl MessageKind {
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Sync => "->",
            Self::Async => "->>",
            Self::Reply => "-->",
            Self::Found => "o->",
            Self::Lost => "->o",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Message {
    pub kind: MessageKind,
    pub from: String,
    pub to: String,
    pub text: String,
}

impl Message {
    pub fn new(
        kind: MessageKind,
        from: impl Into<String>,
        to: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self { kind, from: from.into(), to: to.into(), text: text.into() }
    }
}
