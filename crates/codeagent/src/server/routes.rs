use super::demo::timestamp;
use super::AppState;
use crate::prelude::*;
use axum::{
    extract::{DefaultBodyLimit, Multipart, Request, State},
    middleware::{self, Next},
    response::{Html, Response},
    routing::{get, post},
    Json, Router,
};
use codeagent_core::project::{project_upload, ProjectUpload, UploadedFile};
use codeagent_core::requests::{ChatRequest, CodeAnalysisRequest, CodeGenerationRequest};
use codeagent_core::responses::{
    system_status, AnalysisResult, ChatResult, Envelope, GenerationResult, SystemStatus,
};
use codeagent_core::status::{StartOutcome, StopOutcome};
use codeagent_core::templates::FALLBACK_INDEX_HTML;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;

pub fn router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    let api = Router::new()
        .route("/status", get(status))
        .route("/vllm/start", post(start_server))
        .route("/vllm/stop", post(stop_server))
        .route("/generate-code", post(generate_code))
        .route("/analyze-code", post(analyze_code))
        .route("/chat", post(chat))
        .route(
            "/upload-project",
            post(upload_project).layer(DefaultBodyLimit::max(max_upload_bytes)),
        );

    Router::new()
        .route("/", get(index))
        .nest("/api/v2", api)
        .layer(middleware::from_fn(access_log))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{} {} {} ({:?})",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );

    response
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    match tokio::fs::read_to_string(&state.frontend).await {
        Ok(html) => Html(html),
        Err(e) => {
            log::debug!(
                "Frontend {} unavailable ({e}), serving fallback page",
                state.frontend.display()
            );
            Html(FALLBACK_INDEX_HTML.to_string())
        }
    }
}

async fn status(State(state): State<Arc<AppState>>) -> Json<SystemStatus> {
    Json(system_status(
        state.manager.report().await,
        state.engine.demo_mode(),
        timestamp(),
    ))
}

async fn start_server(State(state): State<Arc<AppState>>) -> Json<StartOutcome> {
    Json(state.manager.start().await)
}

async fn stop_server(State(state): State<Arc<AppState>>) -> Json<StopOutcome> {
    Json(state.manager.stop().await)
}

async fn generate_code(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CodeGenerationRequest>,
) -> Json<Envelope<GenerationResult>> {
    Json(Envelope::new(state.engine.generate_code(&request).await))
}

async fn analyze_code(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CodeAnalysisRequest>,
) -> Json<Envelope<AnalysisResult>> {
    Json(Envelope::new(state.engine.analyze_code(&request).await))
}

async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Json<Envelope<ChatResult>> {
    Json(Envelope::new(state.engine.chat(&request).await))
}

async fn upload_project(mut multipart: Multipart) -> Result<Json<ProjectUpload>, Error> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("files") {
            continue;
        }

        let name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| Error::Upload("file part has no filename".to_string()))?;
        let content_type = field.content_type().map(str::to_string);
        let size = field.bytes().await?.len() as u64;

        files.push(UploadedFile {
            name,
            size,
            content_type,
        });
    }

    if files.is_empty() {
        return Err(Error::MissingField("files"));
    }

    log::info!("Received project upload with {} files", files.len());

    Ok(Json(project_upload(files)))
}
