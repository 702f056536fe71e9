//! # Etiquetagem POS e Decodificadores
//!
//! A decisão "qual tag dar a cada token" fica atrás do trait [`Decoder`], de
//! modo que o algoritmo pode ser trocado sem mexer na tokenização nem no
//! treinamento.
//!
//! | Modo       | Implementação            | Usa transições? |
//! |------------|--------------------------|-----------------|
//! | `greedy`   | [`Greedy`] (padrão)      | não             |
//! | `viterbi`  | [`crate::viterbi::Viterbi`] | sim          |
//!
//! ## Etiquetagem gulosa
//!
//! Cada token é etiquetado isoladamente com a tag de maior $P(palavra | tag)$.
//! Empates ficam com a tag que aparece primeiro no [`TagSet`](crate::model::TagSet),
//! ou seja, a primeira vista no corpus de treino. Um token sem nenhuma emissão
//! conhecida recebe [`UNKNOWN_TAG`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::ModelBundle;
use crate::tokenizer::Token;
use crate::viterbi::Viterbi;

/// Tag devolvida quando nenhuma tag conhecida emite o token.
pub const UNKNOWN_TAG: &str = "Unknown";

/// Um token etiquetado, no formato exposto à camada de apresentação.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub pos_tag: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, pos_tag: impl Into<String>) -> Self {
        Self { word: word.into(), pos_tag: pos_tag.into() }
    }
}

/// Estratégia de decodificação: recebe os tokens e devolve uma tag por token.
///
/// Implementações devem ser puras sobre `(model, tokens)`; o modelo é
/// compartilhado entre threads e nunca é alterado.
pub trait Decoder: Send + Sync {
    /// Nome curto, usado em logs.
    fn name(&self) -> &'static str;

    /// Devolve exatamente `tokens.len()` tags, na mesma ordem.
    fn decode(&self, model: &ModelBundle, tokens: &[Token]) -> Vec<String>;
}

/// Arg-max de emissão para um único token.
///
/// A comparação é estrita (`>`), então em caso de empate vence a tag que veio
/// antes no conjunto de tags.
pub fn best_tag<'a>(model: &'a ModelBundle, token: &str) -> &'a str {
    let mut best = UNKNOWN_TAG;
    let mut best_prob = 0.0;
    for tag in model.tags.iter() {
        let prob = model.emissions.prob(tag, token);
        if prob > best_prob {
            best_prob = prob;
            best = tag;
        }
    }
    best
}

/// Decodificador guloso: cada token independente dos vizinhos.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Decoder for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn decode(&self, model: &ModelBundle, tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| best_tag(model, &t.text).to_string())
            .collect()
    }
}

static GREEDY: Greedy = Greedy;
static VITERBI: Viterbi = Viterbi;

/// Seleção do decodificador em tempo de execução.
///
/// Desserializa pelo mesmo caminho de [`FromStr`]: sem diferenciar
/// maiúsculas e ignorando espaços nas pontas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum DecoderMode {
    /// **Guloso**: arg-max de emissão por token.
    #[default]
    Greedy,
    /// **Viterbi**: melhor sequência usando transições e emissões.
    Viterbi,
}

impl DecoderMode {
    pub fn decoder(self) -> &'static dyn Decoder {
        match self {
            DecoderMode::Greedy => &GREEDY,
            DecoderMode::Viterbi => &VITERBI,
        }
    }
}

impl FromStr for DecoderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "greedy" => Ok(DecoderMode::Greedy),
            "viterbi" => Ok(DecoderMode::Viterbi),
            other => Err(format!("decodificador desconhecido: {other} (use greedy ou viterbi)")),
        }
    }
}

impl TryFrom<String> for DecoderMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
