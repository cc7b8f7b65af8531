mod cli;

pub use cli::App;

use crate::prelude::{eprintln, *};
use cli::Commands;
use codeagent_core::project::ProjectUpload;
use codeagent_core::requests::{ChatRequest, CodeAnalysisRequest, CodeGenerationRequest};
use codeagent_core::responses::{
    AnalysisResult, ChatResult, Envelope, GenerationResult, SystemStatus,
};
use codeagent_core::status::{StartOutcome, StopOutcome};
use prettytable::row;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Thin typed wrapper over the `/api/v2` endpoints
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v2/{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(eyre!("Server returned {status}: {body}"));
        }

        response
            .json::<T>()
            .await
            .context("Failed to parse server response")
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.base_url))?;

        Self::decode(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .post(self.url(path))
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.base_url))?;

        Self::decode(response).await
    }

    pub async fn status(&self) -> Result<SystemStatus> {
        let response = self
            .http
            .get(self.url("status"))
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.base_url))?;

        Self::decode(response).await
    }

    pub async fn start(&self) -> Result<StartOutcome> {
        self.post_empty("vllm/start").await
    }

    pub async fn stop(&self) -> Result<StopOutcome> {
        self.post_empty("vllm/stop").await
    }

    pub async fn generate_code(
        &self,
        request: &CodeGenerationRequest,
    ) -> Result<Envelope<GenerationResult>> {
        self.post_json("generate-code", request).await
    }

    pub async fn analyze_code(
        &self,
        request: &CodeAnalysisRequest,
    ) -> Result<Envelope<AnalysisResult>> {
        self.post_json("analyze-code", request).await
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<Envelope<ChatResult>> {
        self.post_json("chat", request).await
    }

    pub async fn upload_project(&self, paths: &[impl AsRef<Path>]) -> Result<ProjectUpload> {
        let mut form = reqwest::multipart::Form::new();

        for path in paths {
            let path = path.as_ref();
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .ok_or_else(|| eyre!("{} is not a file path", path.display()))?;

            form = form.part(
                "files",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name),
            );
        }

        let response = self
            .http
            .post(self.url("upload-project"))
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.base_url))?;

        Self::decode(response).await
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Server: {}", app.url);
        eprintln!();
    }

    let client = ApiClient::new(app.url.as_str());
    let mut stdout = anstream::stdout();

    execute(&client, app.command, app.json, &mut stdout).await
}

/// Runs one client command, writing its result to `out`.
///
/// With `json` set, `out` receives exactly one pretty-printed JSON document.
/// Progress messages go to stderr.
async fn execute(
    client: &ApiClient,
    command: Commands,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Status => {
            let status = client.status().await?;
            if json {
                return write_json(out, &status);
            }

            let mut table = new_table();
            table.add_row(row!["System", status.system_status]);
            table.add_row(row!["Model server", status.vllm_server.status]);
            table.add_row(row!["Demo mode", status.demo_mode]);
            table.add_row(row!["Infrastructure", status.infrastructure]);
            table.add_row(row!["Cost", status.cost]);
            table.add_row(row!["Timestamp", status.timestamp]);
            table.print(out)?;
        }
        Commands::Start => {
            if !json {
                eprintln!("Starting model server...");
            }
            let outcome = client.start().await?;
            if json {
                return write_json(out, &outcome);
            }
            writeln!(out, "{} ({})", outcome.message, outcome.status)?;
        }
        Commands::Stop => {
            let outcome = client.stop().await?;
            if json {
                return write_json(out, &outcome);
            }
            writeln!(out, "{} ({})", outcome.message, outcome.status)?;
        }
        Commands::Generate(options) => {
            let request = CodeGenerationRequest {
                prompt: options.prompt,
                language: options.language,
                complexity: options.complexity,
                include_tests: options.include_tests,
            };
            let envelope = client.generate_code(&request).await?;
            if json {
                return write_json(out, &envelope);
            }
            writeln!(out, "{}", envelope.data.code)?;
        }
        Commands::Analyze(options) => {
            let code = tokio::fs::read_to_string(&options.path)
                .await
                .with_context(|| format!("Failed to read {}", options.path.display()))?;
            let request = CodeAnalysisRequest {
                code,
                analysis_type: options.analysis_type,
                include_suggestions: !options.no_suggestions,
            };
            let envelope = client.analyze_code(&request).await?;
            if json {
                return write_json(out, &envelope);
            }
            writeln!(out, "{}", envelope.data.analysis)?;
            if request.include_suggestions {
                writeln!(out)?;
                for suggestion in &envelope.data.suggestions {
                    writeln!(out, "- {suggestion}")?;
                }
            }
        }
        Commands::Chat(options) => {
            let request = ChatRequest {
                message: options.message,
                context: options.context,
            };
            let envelope = client.chat(&request).await?;
            if json {
                return write_json(out, &envelope);
            }
            writeln!(out, "{}", envelope.data.response)?;
        }
        Commands::Upload(options) => {
            let upload = client.upload_project(&options.paths).await?;
            if json {
                return write_json(out, &upload);
            }

            writeln!(out, "Files: {}", upload.analysis.total_files)?;
            let mut table = new_table();
            table.set_titles(row!["Extension", "Count"]);
            for (ext, count) in &upload.analysis.file_types {
                table.add_row(row![ext, count]);
            }
            table.print(out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::testing;
    use codeagent_core::status::ServerStatus;

    #[test]
    fn test_url_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:12000/");
        assert_eq!(client.url("status"), "http://localhost:12000/api/v2/status");
    }

    #[tokio::test]
    async fn test_lifecycle_round_trip() {
        let client = ApiClient::new(testing::spawn(testing::config()).await);

        assert_eq!(
            client.status().await.unwrap().vllm_server.status,
            ServerStatus::Stopped
        );
        assert_eq!(client.start().await.unwrap().status, ServerStatus::Running);
        assert!(client.status().await.unwrap().vllm_server.running);
        assert_eq!(client.stop().await.unwrap().status, ServerStatus::Stopped);
    }

    #[tokio::test]
    async fn test_generate_code_typed() {
        let client = ApiClient::new(testing::spawn(testing::config()).await);
        let envelope = client
            .generate_code(&CodeGenerationRequest {
                prompt: "hash a password".to_string(),
                language: "kotlin".to_string(),
                complexity: "standard".to_string(),
                include_tests: false,
            })
            .await
            .unwrap();

        assert!(envelope.success);
        assert!(envelope
            .data
            .code
            .contains("Enhanced Kotlin Implementation"));
    }

    #[tokio::test]
    async fn test_upload_project_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();
        for name in ["a.rs", "b.rs", "Cargo.toml"] {
            let path = dir.path().join(name);
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "// {name}").unwrap();
            paths.push(path);
        }

        let client = ApiClient::new(testing::spawn(testing::config()).await);
        let upload = client.upload_project(&paths).await.unwrap();

        assert_eq!(upload.analysis.total_files, 3);
        assert_eq!(upload.analysis.file_types.get("rs"), Some(&2));
        assert_eq!(upload.analysis.file_types.get("toml"), Some(&1));
    }

    #[tokio::test]
    async fn test_error_status_surfaces_detail() {
        let base = testing::spawn(testing::config()).await;
        let client = ApiClient::new(format!("{base}/missing"));
        let err = client.status().await.unwrap_err();

        assert!(err.to_string().contains("404"));
    }

    // ============================================================================
    // output tests
    // ============================================================================

    async fn execute_to_string(client: &ApiClient, command: Commands, json: bool) -> String {
        let mut out = Vec::new();
        execute(client, command, json, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_json_output_is_a_single_document() {
        let client = ApiClient::new(testing::spawn(testing::config()).await);

        let output = execute_to_string(&client, Commands::Start, true).await;
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "running");

        let output = execute_to_string(&client, Commands::Status, true).await;
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["vllm_server"]["status"], "running");

        let output = execute_to_string(&client, Commands::Stop, true).await;
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "stopped");
    }

    #[tokio::test]
    async fn test_text_output_for_start() {
        let client = ApiClient::new(testing::spawn(testing::config()).await);
        let output = execute_to_string(&client, Commands::Start, false).await;

        assert_eq!(
            output,
            "vLLM server started successfully (demo mode) (running)\n"
        );
    }

    #[tokio::test]
    async fn test_status_table_output() {
        let client = ApiClient::new(testing::spawn(testing::config()).await);
        let output = execute_to_string(&client, Commands::Status, false).await;

        assert!(output.contains("Model server"));
        assert!(output.contains("stopped"));
        assert!(serde_json::from_str::<serde_json::Value>(&output).is_err());
    }
}
