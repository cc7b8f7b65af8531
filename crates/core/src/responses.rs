//! Payloads returned by the `/api/v2` endpoints.
//!
//! Builders take the request and a pre-formatted timestamp so the output is
//! fully determined by their arguments.

use crate::requests::{ChatRequest, CodeAnalysisRequest, CodeGenerationRequest};
use crate::status::StatusReport;
use crate::templates::{analysis_report, analysis_suggestions, chat_reply, demo_code};
use crate::{DEMO_MODEL, ENVELOPE_INFRASTRUCTURE};
use serde::{Deserialize, Serialize};

/// Quality score attached to every demo analysis
pub const DEMO_QUALITY_SCORE: f64 = 9.2;

/// Wrapper around every code-generation, analysis and chat result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    pub infrastructure: String,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            infrastructure: ENVELOPE_INFRASTRUCTURE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub model: String,
    pub timestamp: String,
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}

impl Metadata {
    fn demonstration(timestamp: String) -> Self {
        Self {
            model: DEMO_MODEL.to_string(),
            timestamp,
            mode: "demonstration".to_string(),
            infrastructure: None,
            cost: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    pub code: String,
    pub reasoning: String,
    pub language: String,
    pub complexity: String,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub success: bool,
    pub analysis: String,
    #[serde(rename = "type")]
    pub analysis_type: String,
    pub suggestions: Vec<String>,
    pub quality_score: f64,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResult {
    pub success: bool,
    pub response: String,
    pub context: Option<String>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub code_generation: String,
    pub code_analysis: String,
    pub chat: String,
    pub project_upload: String,
}

/// Body of `GET /api/v2/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub success: bool,
    pub system_status: String,
    pub vllm_server: StatusReport,
    pub infrastructure: String,
    pub demo_mode: bool,
    pub features: Features,
    pub cost: String,
    pub timestamp: String,
}

pub fn generation_result(request: &CodeGenerationRequest, timestamp: String) -> GenerationResult {
    let mut metadata = Metadata::demonstration(timestamp);
    metadata.infrastructure = Some("production-ready".to_string());
    metadata.cost = Some("free".to_string());

    GenerationResult {
        success: true,
        code: demo_code(&request.language, &request.prompt),
        reasoning: format!(
            "Demo response for {} code generation: {}",
            request.language, request.prompt
        ),
        language: request.language.clone(),
        complexity: request.complexity.clone(),
        metadata,
    }
}

pub fn analysis_result(request: &CodeAnalysisRequest, timestamp: String) -> AnalysisResult {
    AnalysisResult {
        success: true,
        analysis: analysis_report(&request.analysis_type),
        analysis_type: request.analysis_type.clone(),
        suggestions: analysis_suggestions(),
        quality_score: DEMO_QUALITY_SCORE,
        metadata: Metadata::demonstration(timestamp),
    }
}

pub fn chat_result(request: &ChatRequest, timestamp: String) -> ChatResult {
    let mut metadata = Metadata::demonstration(timestamp);
    metadata.cost = Some("free".to_string());

    ChatResult {
        success: true,
        response: chat_reply(&request.message),
        context: request.context.clone(),
        metadata,
    }
}

pub fn system_status(vllm_server: StatusReport, demo_mode: bool, timestamp: String) -> SystemStatus {
    let active = || "active".to_string();

    SystemStatus {
        success: true,
        system_status: "operational".to_string(),
        vllm_server,
        infrastructure: "production-ready".to_string(),
        demo_mode,
        features: Features {
            code_generation: active(),
            code_analysis: active(),
            chat: active(),
            project_upload: active(),
        },
        cost: "free-demo-mode".to_string(),
        timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{status_report, ServerStatus};

    const TS: &str = "2025-03-04T05:06:07.123456";

    fn generation_request(language: &str) -> CodeGenerationRequest {
        CodeGenerationRequest {
            prompt: "reverse a string".to_string(),
            language: language.to_string(),
            complexity: "advanced".to_string(),
            include_tests: true,
        }
    }

    #[test]
    fn test_generation_result_echoes_input() {
        let result = generation_result(&generation_request("javascript"), TS.to_string());

        assert!(result.success);
        assert_eq!(result.language, "javascript");
        assert_eq!(result.complexity, "advanced");
        assert_eq!(
            result.reasoning,
            "Demo response for javascript code generation: reverse a string"
        );
        assert!(result.code.contains("Generated for: reverse a string"));
    }

    #[test]
    fn test_generation_metadata_json() {
        let result = generation_result(&generation_request("python"), TS.to_string());
        let value = serde_json::to_value(&result.metadata).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "model": "demo-mode-vllm-ready",
                "timestamp": TS,
                "mode": "demonstration",
                "infrastructure": "production-ready",
                "cost": "free"
            })
        );
    }

    #[test]
    fn test_analysis_result_uses_type_key() {
        let request = CodeAnalysisRequest {
            code: "print(1)".to_string(),
            analysis_type: "security".to_string(),
            include_suggestions: false,
        };
        let value = serde_json::to_value(analysis_result(&request, TS.to_string())).unwrap();

        assert_eq!(value["type"], "security");
        assert_eq!(value["quality_score"], 9.2);
        assert_eq!(value["suggestions"].as_array().unwrap().len(), 3);
        assert!(value["analysis"]
            .as_str()
            .unwrap()
            .starts_with("## Security Analysis Report"));
        // Analysis metadata carries neither cost nor infrastructure
        assert!(value["metadata"].get("cost").is_none());
        assert!(value["metadata"].get("infrastructure").is_none());
    }

    #[test]
    fn test_chat_result_echoes_context() {
        let request = ChatRequest {
            message: "hello".to_string(),
            context: Some("project-x".to_string()),
        };
        let result = chat_result(&request, TS.to_string());

        assert_eq!(result.context.as_deref(), Some("project-x"));
        assert!(result.response.contains("Your question: hello"));
        assert_eq!(result.metadata.cost.as_deref(), Some("free"));
    }

    #[test]
    fn test_chat_result_null_context_serialized() {
        let request = ChatRequest {
            message: "hello".to_string(),
            context: None,
        };
        let value = serde_json::to_value(chat_result(&request, TS.to_string())).unwrap();

        assert!(value["context"].is_null());
        assert!(value.as_object().unwrap().contains_key("context"));
    }

    #[test]
    fn test_envelope_wraps_data() {
        let envelope = Envelope::new(42);
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "success": true,
                "data": 42,
                "infrastructure": "vllm-production-ready"
            })
        );
    }

    #[test]
    fn test_system_status_snapshot() {
        let snapshot = system_status(status_report(ServerStatus::Running), true, TS.to_string());
        let value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(value["system_status"], "operational");
        assert_eq!(value["vllm_server"]["status"], "running");
        assert_eq!(value["vllm_server"]["running"], true);
        assert_eq!(value["demo_mode"], true);
        assert_eq!(value["features"]["project_upload"], "active");
        assert_eq!(value["cost"], "free-demo-mode");
        assert_eq!(value["timestamp"], TS);
    }
}
