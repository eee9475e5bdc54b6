//! API routes for tunisbotd

use crate::server::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::error;
use tunisbot_shared::{BotError, ConversationTurn};

type AppStateArc = Arc<AppState>;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    /// Exact method label, e.g. `tfidf (score: 0.42)`
    pub method: String,
    pub score: Option<f64>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    fn new(status: StatusCode, error: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                success: false,
                error: error.into(),
            }),
        )
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    pub total_messages: usize,
    pub methods_distribution: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub knowledge_entries: usize,
    pub vocabulary: usize,
    /// Embedding model, or `null` when running lexical-only
    pub embeddings: Option<String>,
}

// ============================================================================
// Chat Routes
// ============================================================================

pub fn chat_routes() -> Router<AppStateArc> {
    Router::new().route("/api/chat", post(chat))
}

async fn chat(
    State(state): State<AppStateArc>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = body.map_err(|rejection| {
        ErrorResponse::new(rejection.status(), rejection.body_text())
    })?;
    let message = req.message.trim().to_string();
    if message.is_empty() {
        return Err(ErrorResponse::new(
            StatusCode::BAD_REQUEST,
            BotError::EmptyInput.to_string(),
        ));
    }

    // Embedding requests block, keep them off the async workers
    let bot = Arc::clone(&state.bot);
    let resolution = tokio::task::spawn_blocking(move || bot.chat(&message))
        .await
        .map_err(|e| {
            error!("Chat task failed: {}", e);
            ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(Json(ChatResponse {
        success: true,
        method: resolution.label(),
        score: resolution.score,
        response: resolution.answer,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

// ============================================================================
// History Routes
// ============================================================================

pub fn history_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/history", get(history))
        .route("/api/reset", post(reset))
        .route("/api/stats", get(stats))
}

async fn history(State(state): State<AppStateArc>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        success: true,
        history: state.bot.history(),
    })
}

async fn reset(State(state): State<AppStateArc>) -> Json<ResetResponse> {
    state.bot.clear_history();
    Json(ResetResponse {
        success: true,
        message: "Conversation réinitialisée".to_string(),
    })
}

async fn stats(State(state): State<AppStateArc>) -> Json<StatsResponse> {
    let stats = state.bot.stats();
    Json(StatsResponse {
        success: true,
        total_messages: stats.total,
        methods_distribution: stats.by_label,
    })
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/api/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: tunisbot_shared::VERSION.to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        knowledge_entries: state.bot.knowledge().len(),
        vocabulary: state.bot.vocabulary_size(),
        embeddings: state.bot.semantic_model().map(str::to_string),
    })
}
