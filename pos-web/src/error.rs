//! Erros da API e conversão para resposta HTTP

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pos_core::PosError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Pos(#[from] PosError),

    #[error("configuração inválida: {0}")]
    Config(String),
}

impl ApiError {
    /// Texto vazio é erro do cliente; o resto é falha do servidor.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Pos(PosError::EmptyText) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::warn!("requisição rejeitada: {self}");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
