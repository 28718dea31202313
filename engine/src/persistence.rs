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

//! Storage of generated populations and analysis results
//!
//! The simulation never depends on a store being reachable: every call site treats a
//! [`StoreError`] as "not stored" and carries on.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use personasim_common::{AnalysisResult, Persona, SessionId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence collaborator keyed by session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PopulationStore: Send + Sync {
    /// `None` when nothing was saved for this session.
    async fn load_population(&self, session: SessionId) -> Result<Option<Vec<Persona>>, StoreError>;

    /// Replaces any population already saved for this session.
    async fn save_population(&self, session: SessionId, population: &[Persona]) -> Result<(), StoreError>;

    /// Keeps only the latest result per session.
    async fn save_analysis_result(
        &self,
        session: SessionId,
        result: &AnalysisResult,
    ) -> Result<(), StoreError>;

    async fn load_analysis_result(&self, session: SessionId) -> Result<Option<AnalysisResult>, StoreError>;
}
