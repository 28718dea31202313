//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! UI-facing node projection of a persona

use crate::persona::Persona;
use crate::reaction::Sentiment;
use serde::{Deserialize, Serialize};

/// Display color of a focused node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeColor {
    Green,
    Yellow,
    Red,
}

impl From<Sentiment> for NodeColor {
    fn from(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => NodeColor::Green,
            Sentiment::Neutral => NodeColor::Yellow,
            Sentiment::Negative => NodeColor::Red,
        }
    }
}

/// Visibility state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "color", rename_all = "kebab-case")]
pub enum NodeStatus {
    Unanalyzed,
    /// Shown in white, no score revealed
    ShownUnscored,
    /// Focus group member, colored by sentiment
    FocusedScored(NodeColor),
}

impl NodeStatus {
    pub fn color(&self) -> Option<NodeColor> {
        match self {
            NodeStatus::FocusedScored(color) => Some(*color),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub persona_id: String,
    pub lat: f64,
    pub lon: f64,
    pub status: NodeStatus,
}

impl Node {
    pub fn from_persona(persona: &Persona, status: NodeStatus) -> Self {
        Self {
            persona_id: persona.id.clone(),
            lat: persona.location.coordinates.lat,
            lon: persona.location.coordinates.lon,
            status,
        }
    }
}
