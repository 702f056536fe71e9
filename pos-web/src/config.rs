//! Configuração do servidor via variáveis de ambiente

use std::path::PathBuf;

use pos_core::DecoderMode;

use crate::error::ApiError;

/// Endereço padrão (mesma porta do serviço original)
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5051";
/// Caminho padrão do modelo gerado por `pos-train`
pub const DEFAULT_MODEL_PATH: &str = "marathi_pos_model.json";

/// Configuração do servidor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `POS_BIND_ADDR`
    pub bind_addr: String,
    /// `POS_MODEL_PATH`
    pub model_path: PathBuf,
    /// `POS_DEFAULT_DECODER` (`greedy` ou `viterbi`)
    pub default_mode: DecoderMode,
}

impl Config {
    /// Lê a configuração do ambiente do processo.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lê a configuração de uma função de consulta (permite testar sem mexer no ambiente).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let bind_addr = lookup("POS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let model_path = lookup("POS_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));
        let default_mode = match lookup("POS_DEFAULT_DECODER") {
            Some(raw) => raw.parse::<DecoderMode>().map_err(ApiError::Config)?,
            None => DecoderMode::default(),
        };

        Ok(Self { bind_addr, model_path, default_mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(config.default_mode, DecoderMode::Greedy);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("POS_BIND_ADDR", "127.0.0.1:8080"),
            ("POS_MODEL_PATH", "/srv/modelo.json"),
            ("POS_DEFAULT_DECODER", "viterbi"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.model_path, PathBuf::from("/srv/modelo.json"));
        assert_eq!(config.default_mode, DecoderMode::Viterbi);
    }

    #[test]
    fn test_invalid_decoder() {
        let err = Config::from_lookup(lookup_from(&[("POS_DEFAULT_DECODER", "beam")])).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
