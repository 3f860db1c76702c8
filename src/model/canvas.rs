// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canvas-style diagrams: fixed, ordered tuples of titled text blocks.
//!
//! The order returned by each `items()` accessor is the order the blocks are serialized in and is
//! part of the text format; it is not alphabetical.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A titled block of text lines, the atomic unit of every canvas diagram.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct CanvasItem {
    pub title: String,
    /// Absent in the input means no lines.
    #[serde(default)]
    pub text: Vec<String>,
}

impl CanvasItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), text: Vec::new() }
    }

    pub fn with_text<I, S>(mut self, text: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text = text.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessModelCanvas {
    pub key_partners: CanvasItem,
    pub customer_segments: CanvasItem,
    pub value_proposition: CanvasItem,
    pub key_activities: CanvasItem,
    pub channels: CanvasItem,
    pub revenue_streams: CanvasItem,
    pub cost_structure: CanvasItem,
    pub key_resources: CanvasItem,
    pub customer_relationships: CanvasItem,
}

impl BusinessModelCanvas {
    pub fn items(&self) -> [&CanvasItem; 9] {
        [
            &self.key_partners,
            &self.customer_segments,
            &self.value_proposition,
            &self.key_activities,
            &self.channels,
            &self.revenue_streams,
            &self.cost_structure,
            &self.key_resources,
            &self.customer_relationships,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityCanvas {
    pub problems: CanvasItem,
    pub solution_ideas: CanvasItem,
    pub users_and_customers: CanvasItem,
    pub solutions_today: CanvasItem,
    pub business_challenges: CanvasItem,
    pub how_will_users_use_solution: CanvasItem,
    pub user_metrics: CanvasItem,
    pub adoption_strategy: CanvasItem,
    pub business_benefits: CanvasItem,
    pub budget: CanvasItem,
}

impl OpportunityCanvas {
    pub fn items(&self) -> [&CanvasItem; 10] {
        [
            &self.problems,
            &self.solution_ideas,
            &self.users_and_customers,
            &self.solutions_today,
            &self.business_challenges,
            &self.how_will_users_use_solution,
            &self.user_metrics,
            &self.adoption_strategy,
            &self.business_benefits,
            &self.budget,
        ]
    }
}

/// Liked / learned / lacked / longed-for retrospective.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FourLs {
    pub liked: CanvasItem,
    pub learned: CanvasItem,
    pub lacked: CanvasItem,
    pub longed_for: CanvasItem,
}

impl FourLs {
    pub fn items(&self) -> [&CanvasItem; 4] {
        [&self.liked, &self.learned, &self.lacked, &self.longed_for]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct StartStopContinue {
    pub start: CanvasItem,
    pub stop: CanvasItem,
    #[serde(rename = "continue")]
    pub continue_: CanvasItem,
}

impl StartStopContinue {
    pub fn items(&self) -> [&CanvasItem; 3] {
        [&self.start, &self.stop, &self.continue_]
    }
}

/// Keep / problem / try retrospective.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Kpt {
    pub keep: CanvasItem,
    pub problem: CanvasItem,
    #[serde(rename = "try")]
    pub try_: CanvasItem,
}

impl Kpt {
    pub fn items(&self) -> [&CanvasItem; 3] {
        [&self.keep, &self.problem, &self.try_]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmpathyMap {
    /// Emitted as a bare line ahead of the blocks.
    pub image_url: String,
    pub says: CanvasItem,
    pub thinks: CanvasItem,
    pub does: CanvasItem,
    pub feels: CanvasItem,
    pub pains: CanvasItem,
    pub gains: CanvasItem,
}

impl EmpathyMap {
    pub fn items(&self) -> [&CanvasItem; 6] {
        [&self.says, &self.thinks, &self.does, &self.feels, &self.pains, &self.gains]
    }
}

/// Link shown at the top of a user persona (typically the persona's picture).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PersonaUrl {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPersona {
    pub url: PersonaUrl,
    pub who_am_i: CanvasItem,
    pub three_reasons_to_use_your_product: CanvasItem,
    pub three_reasons_to_buy_your_product: CanvasItem,
    pub my_interests: CanvasItem,
    pub my_personality: CanvasItem,
    pub my_skills: CanvasItem,
    pub my_dreams: CanvasItem,
    pub my_relationship_with_technology: CanvasItem,
}

impl UserPersona {
    pub fn items(&self) -> [&CanvasItem; 8] {
        [
            &self.who_am_i,
            &self.three_reasons_to_use_your_product,
            &self.three_reasons_to_buy_your_product,
            &self.my_interests,
            &self.my_personality,
            &self.my_skills,
            &self.my_dreams,
            &self.my_relationship_with_technology,
        ]
    }
}
