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


use clap::Parser;
use personasim_common::{AnalysisResult, ScoredReaction, Sentiment, SentimentHistogram, SessionId};
use personasim_engine::aggregate::share;
use personasim_engine::config::{Arguments, Configuration};
use personasim_engine::embellish::{Embellisher, LlmEmbellisher, NoopEmbellisher};
use personasim_engine::llm::LlmManager;
use personasim_engine::persistence::{MemoryStore, PgStore, PopulationStore};
use personasim_engine::simulation::Simulation;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load arguments from the command line
    let arguments: Arguments = Parser::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    if let Some(ref env_file) = arguments.env_file {
        if std::path::Path::new(env_file).exists() {
            tracing::debug!("Loading environment variables from file: {}", env_file);
            dotenv::from_filename(env_file).ok();
        }
    } else {
        dotenv::dotenv().ok();
    }

    let mut config = match arguments.config_file {
        Some(ref path) => Configuration::load(path)?,
        None => Configuration::default(),
    };
    config.apply_arguments(&arguments);
    tracing::debug!("Configuration loaded: {:?}", config);

    let store = open_store(&config).await;
    let embellisher = open_embellisher(&config).await;
    let session = arguments.session.unwrap_or_default();

    let mut simulation = Simulation::open(
        session,
        config.simulation.population_size,
        config.simulation.seed,
        store,
        embellisher,
    )
    .await?;

    simulation.submit_idea(&arguments.idea);
    let histogram = simulation
        .controller()
        .population_histogram()
        .unwrap_or_default();
    let focused = simulation.focus(config.simulation.focus_group_size).await?;
    let result = simulation.analyze().await?;

    if arguments.json {
        println!("{}", serde_json::to_string_pretty(simulation.state())?);
    } else {
        print_report(session, &arguments.idea, &histogram, &focused, &result);
    }
    Ok(())
}

/// PostgreSQL when configured and reachable, otherwise in memory.
async fn open_store(config: &Configuration) -> Arc<dyn PopulationStore> {
    let Some(database) = config.database.as_ref() else {
        return Arc::new(MemoryStore::new());
    };

    tracing::info!("Connecting to Database at {}", database.url.as_str());
    match PgStore::connect(&database.url, database.max_connections).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!("Database unavailable, keeping populations in memory: {}", e);
            Arc::new(MemoryStore::new())
        }
    }
}

async fn open_embellisher(config: &Configuration) -> Arc<dyn Embellisher> {
    let Some(llm) = config.llm_config() else {
        return Arc::new(NoopEmbellisher);
    };

    let model = llm.model.clone();
    let timeout = Duration::from_secs(llm.timeout_seconds);
    let provider = llm.provider;
    let manager = LlmManager::new();
    if let Err(e) = manager.register_config(provider.as_str(), llm).await {
        tracing::warn!("LLM provider unavailable, using template feedback: {}", e);
        return Arc::new(NoopEmbellisher);
    }
    if !manager.is_available().await {
        tracing::warn!("LLM provider {} is not answering, using template feedback", provider);
        return Arc::new(NoopEmbellisher);
    }

    tracing::info!("Embellishing focus group feedback with {} ({})", provider, model);
    Arc::new(LlmEmbellisher::new(Arc::new(manager), model).with_timeout(timeout))
}

fn print_report(
    session: SessionId,
    idea: &str,
    population: &SentimentHistogram,
    focused: &[ScoredReaction],
    result: &AnalysisResult,
) {
    println!("Session {}", session);
    println!("Idea: {}", idea);
    println!(
        "Population ({}): {} positive ({:.0}%), {} neutral ({:.0}%), {} negative ({:.0}%)",
        population.total(),
        population.positive,
        share(population, Sentiment::Positive) * 100.0,
        population.neutral,
        share(population, Sentiment::Neutral) * 100.0,
        population.negative,
        share(population, Sentiment::Negative) * 100.0,
    );
    println!();
    println!("Focus group:");
    for reaction in focused {
        println!(
            "  [{:>8}] {:>6.1} {} / {} ({})",
            reaction.sentiment.as_str(),
            reaction.numeric_score,
            reaction.industry,
            reaction.country,
            reaction.persona_id
        );
        println!("             {}", reaction.feedback_text);
    }
    println!();
    println!("Impact score: {}/100", result.impact_score);
    println!(
        "Average score {:.1}, average confidence {:.2}",
        result.average_score, result.average_confidence
    );
    if !result.top_concerns.is_empty() {
        println!("Top concerns:");
        for concern in &result.top_concerns {
            println!("  - {}", concern);
        }
    }
    if !result.top_suggestions.is_empty() {
        println!("Top suggestions:");
        for suggestion in &result.top_suggestions {
            println!("  - {}", suggestion);
        }
    }
}
