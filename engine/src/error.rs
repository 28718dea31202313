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

//! Engine error types

use personasim_common::{LifecycleAction, LifecycleState};
use thiserror::Error;

/// Errors raised by the synchronous simulation core.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Population size must be at least one.
    #[error("Invalid population size: {0} (must be at least 1)")]
    InvalidPopulationSize(usize),

    /// Focus group size must be at least one.
    #[error("Invalid focus group size: {0} (must be at least 1)")]
    InvalidFocusCount(usize),

    /// The lifecycle controller refused an action in its current state.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

/// A lifecycle action was attempted from a state that does not allow it.
///
/// The controller state is left untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot {action} while {state}")]
pub struct LifecycleError {
    pub state: LifecycleState,
    pub action: LifecycleAction,
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidPopulationSize(0);
        assert_eq!(
            err.to_string(),
            "Invalid population size: 0 (must be at least 1)"
        );

        let err: EngineError = LifecycleError {
            state: LifecycleState::Surveyed,
            action: LifecycleAction::Analyze,
        }
        .into();
        assert_eq!(err.to_string(), "Cannot analyze while surveyed");
    }
}
