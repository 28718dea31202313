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

use crate::llm::{LlmConfig, LlmProviderKind};
use clap::Parser;
use personasim_common::SessionId;
use serde::{Deserialize, Serialize};
use serde_env_field::EnvField;

pub const DEFAULT_POPULATION_SIZE: usize = 100;
pub const DEFAULT_FOCUS_GROUP_SIZE: usize = 10;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    /// Idea to put in front of the population
    pub idea: String,

    #[arg(short = 'c', long = "config", help = "Path to configuration file")]
    pub config_file: Option<String>,

    #[arg(short = 'e', long = "env", help = "Path to environment file")]
    pub env_file: Option<String>,

    #[arg(short = 's', long = "seed", help = "Seed for reproducible runs")]
    pub seed: Option<u64>,

    #[arg(short = 'p', long = "population", help = "Number of personas to generate")]
    pub population: Option<usize>,

    #[arg(short = 'f', long = "focus", help = "Focus group size")]
    pub focus: Option<usize>,

    #[arg(long = "session", help = "Session id to load or save the population under")]
    pub session: Option<SessionId>,

    #[arg(long = "json", help = "Print the session state as JSON")]
    pub json: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// No database means an in-memory store
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub llm: Option<LlmSettings>,
}

impl Configuration {
    pub fn load(path: &str) -> Result<Configuration, String> {
        let conf = serde_yaml::from_reader(
            std::fs::File::open(path).map_err(|e| format!("Failed to open config file: {}", e))?,
        )
        .map_err(|e| format!("Failed to parse config file: {}", e))?;

        Ok(conf)
    }

    /// Command line values win over file values.
    pub fn apply_arguments(&mut self, arguments: &Arguments) {
        if let Some(seed) = arguments.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(population) = arguments.population {
            self.simulation.population_size = population;
        }
        if let Some(focus) = arguments.focus {
            self.simulation.focus_group_size = focus;
        }
    }

    /// LLM settings, only when present and enabled.
    pub fn llm_config(&self) -> Option<LlmConfig> {
        self.llm
            .as_ref()
            .filter(|llm| llm.enabled)
            .map(LlmSettings::to_llm_config)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    #[serde(default = "default_focus_group_size")]
    pub focus_group_size: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            focus_group_size: DEFAULT_FOCUS_GROUP_SIZE,
            seed: None,
        }
    }
}

fn default_population_size() -> usize {
    DEFAULT_POPULATION_SIZE
}

fn default_focus_group_size() -> usize {
    DEFAULT_FOCUS_GROUP_SIZE
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: EnvField<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub enabled: bool,
    pub provider: LlmProviderKind,
    /// Defaults to the provider's usual local or public endpoint
    #[serde(default)]
    pub endpoint: Option<EnvField<String>>,
    #[serde(default)]
    pub api_key: Option<EnvField<String>>,
    pub model: EnvField<String>,
    #[serde(default = "default_llm_timeout")]
    pub timeout_seconds: u64,
}

fn default_llm_timeout() -> u64 {
    10
}

impl LlmSettings {
    pub fn to_llm_config(&self) -> LlmConfig {
        LlmConfig {
            provider: self.provider,
            endpoint: self
                .endpoint
                .as_ref()
                .map(|e| String::clone(e))
                .unwrap_or_else(|| self.provider.default_endpoint().to_string()),
            api_key: self
                .api_key
                .as_ref()
                .map(|k| String::clone(k))
                .filter(|k| !k.is_empty()),
            model: String::clone(&self.model),
            timeout_seconds: self.timeout_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn write_config(contents: &str) -> (tempfile::TempDir, String) {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("config.yaml");
        std::fs::write(&file_path, contents).unwrap();
        let path = file_path.to_str().unwrap().to_string();
        (temp_dir, path)
    }

    fn arguments(args: &[&str]) -> Arguments {
        Arguments::parse_from(std::iter::once("personasim").chain(args.iter().copied()))
    }

    #[test]
    fn test_configuration_default() {
        let config = Configuration::default();
        assert_eq!(config.simulation.population_size, 100);
        assert_eq!(config.simulation.focus_group_size, 10);
        assert!(config.simulation.seed.is_none());
        assert!(config.database.is_none());
        assert!(config.llm_config().is_none());
    }

    #[test]
    fn test_configuration_load_missing_file() {
        let result = Configuration::load("non_existent.yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_configuration_load_from_file() {
        let (_dir, path) = write_config(
            "simulation:\n  population_size: 250\n  seed: 42\n\
             database:\n  url: \"postgres://localhost/personasim\"\n\
             llm:\n  enabled: true\n  provider: ollama\n  model: \"llama3\"\n",
        );
        let config = Configuration::load(&path).unwrap();

        assert_eq!(config.simulation.population_size, 250);
        assert_eq!(config.simulation.focus_group_size, 10);
        assert_eq!(config.simulation.seed, Some(42));

        let database = config.database.as_ref().unwrap();
        assert_eq!(database.url.as_str(), "postgres://localhost/personasim");
        assert_eq!(database.max_connections, 5);

        let llm = config.llm_config().unwrap();
        assert_eq!(llm.provider, LlmProviderKind::Ollama);
        assert_eq!(llm.endpoint, "http://localhost:11434/api/chat");
        assert_eq!(llm.model, "llama3");
        assert!(llm.api_key.is_none());
    }

    #[test]
    fn test_disabled_llm_is_ignored() {
        let (_dir, path) =
            write_config("llm:\n  enabled: false\n  provider: openai\n  model: \"gpt-4o-mini\"\n");
        let config = Configuration::load(&path).unwrap();
        assert!(config.llm.is_some());
        assert!(config.llm_config().is_none());
    }

    #[test]
    fn test_environment_substitution() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            std::env::set_var("PERSONASIM_TEST_OPENAI_KEY", "sk-from-env");
        }

        let (_dir, path) = write_config(
            "llm:\n  enabled: true\n  provider: openai\n  api_key: \"${PERSONASIM_TEST_OPENAI_KEY}\"\n  model: \"gpt-4o-mini\"\n",
        );
        let config = Configuration::load(&path).unwrap();

        unsafe {
            std::env::remove_var("PERSONASIM_TEST_OPENAI_KEY");
        }

        let llm = config.llm_config().unwrap();
        assert_eq!(llm.api_key.as_deref(), Some("sk-from-env"));
        assert_eq!(llm.endpoint, "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_arguments_override_file() {
        let (_dir, path) = write_config("simulation:\n  population_size: 50\n  focus_group_size: 8\n");
        let mut config = Configuration::load(&path).unwrap();

        let args = arguments(&["--population", "20", "--seed", "7", "a bakery"]);
        config.apply_arguments(&args);

        assert_eq!(config.simulation.population_size, 20);
        assert_eq!(config.simulation.focus_group_size, 8);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(args.idea, "a bakery");
        assert!(!args.json);
    }

    #[test]
    fn test_session_argument_parses() {
        let args = arguments(&[
            "--session",
            "6f1c2a4e-0000-4000-8000-000000000001",
            "--json",
            "idea",
        ]);
        assert_eq!(
            args.session.unwrap().to_string(),
            "6f1c2a4e-0000-4000-8000-000000000001"
        );
        assert!(args.json);
    }
}
