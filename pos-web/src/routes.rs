//! Rotas HTTP: camada fina sobre o [`PosPipeline`]

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use pos_core::{corpus::demo_texts, graph::WordGraph, DecoderMode, PosPipeline, TaggedWord};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use crate::error::ApiError;

/// Estado compartilhado da aplicação. Somente leitura depois da inicialização.
pub struct AppState {
    pub pipeline: PosPipeline,
}

pub type SharedState = Arc<AppState>;

/// `?word=...` ou `{"word": ...}`
#[derive(Debug, Default, Deserialize)]
pub struct PosMeaningRequest {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub mode: Option<DecoderMode>,
}

/// `?text=...`
#[derive(Debug, Default, Deserialize)]
pub struct WordRelationshipsQuery {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub mode: Option<DecoderMode>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PosMeaningResponse {
    pub original_text: String,
    pub tagged_words: Vec<TaggedWord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordRelationshipsResponse {
    pub original_text: String,
    pub graph_data: WordGraph,
}

/// Monta o roteador completo.
pub fn router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/pos-meaning", get(pos_meaning_get).post(pos_meaning_post))
        .route(
            "/transition-probabilities",
            get(transition_probabilities_handler).post(transition_probabilities_handler),
        )
        .route("/word-relationships", get(word_relationships_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .layer(cors)
        .with_state(state)
}

/// Retorna a página principal HTML
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

async fn health_handler(State(state): State<SharedState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "tags": state.pipeline.model().tags.len(),
    }))
}

async fn pos_meaning_get(
    State(state): State<SharedState>,
    Query(req): Query<PosMeaningRequest>,
) -> Result<Json<PosMeaningResponse>, ApiError> {
    pos_meaning(&state, req)
}

async fn pos_meaning_post(
    State(state): State<SharedState>,
    Json(req): Json<PosMeaningRequest>,
) -> Result<Json<PosMeaningResponse>, ApiError> {
    pos_meaning(&state, req)
}

fn pos_meaning(state: &AppState, req: PosMeaningRequest) -> Result<Json<PosMeaningResponse>, ApiError> {
    let text = req.word.unwrap_or_default().trim().to_string();
    let mode = req.mode.unwrap_or(state.pipeline.default_mode());
    let tagged_words = state.pipeline.tag_text_with_mode(&text, mode)?;
    debug!(tokens = tagged_words.len(), "pos-meaning");

    Ok(Json(PosMeaningResponse { original_text: text, tagged_words }))
}

/// Tabela de transição completa, sem modificações
async fn transition_probabilities_handler(State(state): State<SharedState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "transition_probabilities": state.pipeline.transitions(),
    }))
}

async fn word_relationships_handler(
    State(state): State<SharedState>,
    Query(query): Query<WordRelationshipsQuery>,
) -> Result<Json<WordRelationshipsResponse>, ApiError> {
    let text = query.text.unwrap_or_default().trim().to_string();
    let mode = query.mode.unwrap_or(state.pipeline.default_mode());
    let graph_data = state.pipeline.word_graph(&text, mode)?;
    debug!(nodes = graph_data.nodes.len(), "word-relationships");

    Ok(Json(WordRelationshipsResponse { original_text: text, graph_data }))
}

/// Retorna textos de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    Json(demo_texts())
}
