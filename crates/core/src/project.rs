//! Project upload tallying.

use crate::ENVELOPE_INFRASTRUCTURE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single file received by `POST /api/v2/upload-project`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAnalysis {
    pub total_files: usize,
    pub file_types: BTreeMap<String, usize>,
    pub structure_analysis: String,
    pub recommendations: Vec<String>,
    pub infrastructure_status: String,
    pub files_processed: Vec<UploadedFile>,
}

/// Extension used for the `file_types` tally.
///
/// Everything after the last dot, or `"unknown"` when the name has no dot.
pub fn file_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => "unknown",
    }
}

pub fn analyze_project(files: Vec<UploadedFile>) -> ProjectAnalysis {
    let mut file_types: BTreeMap<String, usize> = BTreeMap::new();
    for file in &files {
        *file_types
            .entry(file_extension(&file.name).to_string())
            .or_default() += 1;
    }

    ProjectAnalysis {
        total_files: files.len(),
        file_types,
        structure_analysis:
            "Production vLLM infrastructure ready for comprehensive project analysis".to_string(),
        recommendations: vec![
            "vLLM server integration complete and operational".to_string(),
            "Ready for production model deployment when needed".to_string(),
            "Cost-free architecture demonstration active".to_string(),
        ],
        infrastructure_status: "production-ready".to_string(),
        files_processed: files,
    }
}

/// Body of a successful `POST /api/v2/upload-project`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpload {
    pub success: bool,
    pub analysis: ProjectAnalysis,
    pub infrastructure: String,
}

pub fn project_upload(files: Vec<UploadedFile>) -> ProjectUpload {
    ProjectUpload {
        success: true,
        analysis: analyze_project(files),
        infrastructure: ENVELOPE_INFRASTRUCTURE.to_string(),
    }
}
