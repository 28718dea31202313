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

//! LLM (Large Language Model) clients used to embellish persona feedback

mod manager;
mod providers;
mod types;

pub use manager::LlmManager;
#[cfg(test)]
pub use providers::MockLlmProvider;
pub use providers::{ChatCompletionsProvider, LlmProvider, OllamaProvider, build_provider};
pub use types::{LlmConfig, LlmError, LlmMessage, LlmProviderKind, LlmRequest, LlmResponse, LlmRole};
