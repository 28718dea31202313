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

//! PostgreSQL store keeping populations and results as JSONB

use super::{PopulationStore, StoreError};
use async_trait::async_trait;
use personasim_common::{AnalysisResult, Persona, SessionId};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;

const SCHEMA: &[&str] = &[
    "CREATE SCHEMA IF NOT EXISTS personasim",
    "CREATE TABLE IF NOT EXISTS personasim.populations (
        session_id UUID PRIMARY KEY,
        personas JSONB NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE TABLE IF NOT EXISTS personasim.analyses (
        session_id UUID PRIMARY KEY,
        result JSONB NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
];

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and make sure the tables exist.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(*statement).execute(&self.pool).await?;
        }
        tracing::debug!("personasim schema ready");
        Ok(())
    }
}

#[async_trait]
impl PopulationStore for PgStore {
    async fn load_population(&self, session: SessionId) -> Result<Option<Vec<Persona>>, StoreError> {
        let row: Option<(Json<Vec<Persona>>,)> = sqlx::query_as(
            "SELECT personas FROM personasim.populations WHERE session_id = $1",
        )
        .bind(session.as_uuid())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(Json(personas),)| personas))
    }

    async fn save_population(&self, session: SessionId, population: &[Persona]) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO personasim.populations (session_id, personas, updated_at)
             VALUES ($1, $2, NOW())
             ON CONFLICT (session_id)
             DO UPDATE SET personas = EXCLUDED.personas, updated_at = NOW()",
        )
        .bind(session.as_uuid())
        .bind(Json(population))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save_analysis_result(
        &self,
        session: SessionId,
        result: &AnalysisResult,
    ) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO personasim.analyses (session_id, result, updated_at)
             VALUES ($1, $2, NOW())
             ON CONFLICT (session_id)
             DO UPDATE SET result = EXCLUDED.result, updated_at = NOW()",
        )
        .bind(session.as_uuid())
        .bind(Json(result))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn load_analysis_result(&self, session: SessionId) -> Result<Option<AnalysisResult>, StoreError> {
        let row: Option<(Json<AnalysisResult>,)> = sqlx::query_as(
            "SELECT result FROM personasim.analyses WHERE session_id = $1",
        )
        .bind(session.as_uuid())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(Json(result),)| result))
    }
}
