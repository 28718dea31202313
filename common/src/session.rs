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

//! Simulation session identity and lifecycle states

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a simulation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Stage of the node lifecycle for one submitted idea.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    /// No population shown
    #[default]
    Idle,
    /// Full population shown, unscored
    Surveyed,
    /// Focus group shown with sentiment colors
    Focused,
    /// Impact score computed over the focus group
    Analyzed,
}

/// User-facing action that drives the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleAction {
    /// Submitting an idea; always legal and always restarts the pipeline
    Submit,
    Focus,
    Analyze,
    Reset,
}

impl LifecycleState {
    /// State reached by applying `action`, or `None` when the action is illegal here.
    pub fn next(self, action: LifecycleAction) -> Option<LifecycleState> {
        use LifecycleAction::*;
        use LifecycleState::*;

        match (self, action) {
            (_, Submit) => Some(Surveyed),
            (_, Reset) => Some(Idle),
            (Surveyed, Focus) => Some(Focused),
            (Focused, Analyze) | (Analyzed, Analyze) => Some(Analyzed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Idle => "idle",
            LifecycleState::Surveyed => "surveyed",
            LifecycleState::Focused => "focused",
            LifecycleState::Analyzed => "analyzed",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleAction::Submit => "submit",
            LifecycleAction::Focus => "focus",
            LifecycleAction::Analyze => "analyze",
            LifecycleAction::Reset => "reset",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_round_trips_through_string() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }

    #[test]
    fn test_lifecycle_transitions() {
        use LifecycleAction::*;
        use LifecycleState::*;

        // Valid transitions
        assert_eq!(Idle.next(Submit), Some(Surveyed));
        assert_eq!(Surveyed.next(Focus), Some(Focused));
        assert_eq!(Focused.next(Analyze), Some(Analyzed));
        assert_eq!(Analyzed.next(Analyze), Some(Analyzed));

        // Submission restarts from anywhere
        assert_eq!(Analyzed.next(Submit), Some(Surveyed));
        assert_eq!(Focused.next(Reset), Some(Idle));

        // Invalid transitions
        assert_eq!(Idle.next(Focus), None);
        assert_eq!(Idle.next(Analyze), None);
        assert_eq!(Surveyed.next(Analyze), None);
        assert_eq!(Focused.next(Focus), None);
        assert_eq!(Analyzed.next(Focus), None);
    }
}
