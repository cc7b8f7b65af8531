//! Request bodies accepted by the `/api/v2` endpoints.
//!
//! Validation is shape-only: required fields must be present with the right
//! JSON type, everything else falls back to the defaults below.

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "python".to_string()
}

fn default_complexity() -> String {
    "standard".to_string()
}

fn default_analysis_type() -> String {
    "general".to_string()
}

fn default_true() -> bool {
    true
}

/// Body of `POST /api/v2/generate-code`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeGenerationRequest {
    pub prompt: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_complexity")]
    pub complexity: String,
    #[serde(default)]
    pub include_tests: bool,
}

/// Body of `POST /api/v2/analyze-code`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAnalysisRequest {
    pub code: String,
    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
    #[serde(default = "default_true")]
    pub include_suggestions: bool,
}

/// Body of `POST /api/v2/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: Option<String>,
}
