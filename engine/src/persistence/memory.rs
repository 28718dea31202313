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

use super::{PopulationStore, StoreError};
use async_trait::async_trait;
use personasim_common::{AnalysisResult, Persona, SessionId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local store, used when no database is configured
#[derive(Debug, Default)]
pub struct MemoryStore {
    populations: RwLock<HashMap<SessionId, Vec<Persona>>>,
    analyses: RwLock<HashMap<SessionId, AnalysisResult>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PopulationStore for MemoryStore {
    async fn load_population(&self, session: SessionId) -> Result<Option<Vec<Persona>>, StoreError> {
        Ok(self.populations.read().await.get(&session).cloned())
    }

    async fn save_population(&self, session: SessionId, population: &[Persona]) -> Result<(), StoreError> {
        self.populations
            .write()
            .await
            .insert(session, population.to_vec());
        Ok(())
    }

    async fn save_analysis_result(
        &self,
        session: SessionId,
        result: &AnalysisResult,
    ) -> Result<(), StoreError> {
        self.analyses.write().await.insert(session, result.clone());
        Ok(())
    }

    async fn load_analysis_result(&self, session: SessionId) -> Result<Option<AnalysisResult>, StoreError> {
        Ok(self.analyses.read().await.get(&session).cloned())
    }
}
