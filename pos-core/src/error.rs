//! # Erros do etiquetador POS
//!
//! Três famílias de falha convivem aqui:
//!
//! - **Entrada vazia** na inferência ([`PosError::EmptyText`]): recuperável, o
//!   chamador decide como reportar (o servidor devolve HTTP 400).
//! - **Corpus malformado** no treinamento ([`PosError::MalformedRow`],
//!   [`PosError::MissingColumn`]): fatal, um modelo parcial não deve ser servido.
//! - **E/S e serialização** do pacote de modelo ([`PosError::Io`], [`PosError::Json`],
//!   [`PosError::Csv`]).
//!
//! Palavras desconhecidas NÃO são erro: recebem a tag [`crate::tagger::UNKNOWN_TAG`].

use thiserror::Error;

/// Erro único do crate.
#[derive(Debug, Error)]
pub enum PosError {
    /// Texto vazio ou só com espaços.
    #[error("No text provided")]
    EmptyText,

    /// Linha de corpus sem palavra ou sem tag. `row` é 1-based, sem contar o cabeçalho.
    #[error("linha {row} do corpus sem o campo '{field}'")]
    MalformedRow { row: usize, field: String },

    /// O cabeçalho do CSV não tem a coluna esperada.
    #[error("coluna '{0}' ausente no cabeçalho do corpus")]
    MissingColumn(String),

    #[error("erro de CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("erro de serialização do modelo: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias de resultado usado em todo o crate.
pub type Result<T> = std::result::Result<T, PosError>;
