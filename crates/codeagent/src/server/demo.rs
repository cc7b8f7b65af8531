//! Demo-mode backend: canned responses after a simulated processing delay.

use super::cli::Delays;
use codeagent_core::requests::{ChatRequest, CodeAnalysisRequest, CodeGenerationRequest};
use codeagent_core::responses::{
    analysis_result, chat_result, generation_result, AnalysisResult, ChatResult, GenerationResult,
};

/// Local time formatted like `2025-01-31T14:03:59.123456`
pub fn timestamp() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

#[derive(Debug, Clone)]
pub struct DemoEngine {
    delays: Delays,
}

impl DemoEngine {
    pub fn new(delays: Delays) -> Self {
        Self { delays }
    }

    /// Every response is a template; there is no live model behind this engine.
    pub fn demo_mode(&self) -> bool {
        true
    }

    pub async fn generate_code(&self, request: &CodeGenerationRequest) -> GenerationResult {
        tokio::time::sleep(self.delays.generate).await;
        generation_result(request, timestamp())
    }

    pub async fn analyze_code(&self, request: &CodeAnalysisRequest) -> AnalysisResult {
        tokio::time::sleep(self.delays.analyze).await;
        analysis_result(request, timestamp())
    }

    pub async fn chat(&self, request: &ChatRequest) -> ChatResult {
        tokio::time::sleep(self.delays.chat).await;
        chat_result(request, timestamp())
    }
}
