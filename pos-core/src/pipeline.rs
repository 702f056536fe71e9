//! # Pipeline POS — ponto de entrada da etiquetagem
//!
//! O pipeline possui o [`ModelBundle`] carregado na inicialização e expõe as
//! operações consumidas pela camada de apresentação:
//!
//! 1. [`PosPipeline::tag_text`]: texto bruto → lista ordenada de `{word, pos_tag}`.
//! 2. [`PosPipeline::transitions`]: tabela de transição, sem modificações.
//! 3. [`PosPipeline::word_graph`]: grafo de palavras vizinhas.
//!
//! Todos os métodos recebem `&self` e nunca alteram o modelo; um mesmo
//! pipeline pode atender qualquer número de requisições em paralelo.

use rayon::prelude::*;
use tracing::debug;

use crate::error::{PosError, Result};
use crate::graph::{build_graph, WordGraph};
use crate::model::{ModelBundle, ProbTable};
use crate::tagger::{best_tag, DecoderMode, TaggedWord};
use crate::tokenizer::{tokenize, Token};

/// O pipeline POS principal.
#[derive(Debug, Clone)]
pub struct PosPipeline {
    model: ModelBundle,
    default_mode: DecoderMode,
}

impl PosPipeline {
    /// Cria o pipeline com o decodificador guloso como padrão.
    pub fn new(model: ModelBundle) -> Self {
        Self { model, default_mode: DecoderMode::Greedy }
    }

    /// Troca o decodificador usado por [`tag_text`](Self::tag_text).
    pub fn with_default_mode(mut self, mode: DecoderMode) -> Self {
        self.default_mode = mode;
        self
    }

    pub fn model(&self) -> &ModelBundle {
        &self.model
    }

    pub fn default_mode(&self) -> DecoderMode {
        self.default_mode
    }

    /// Tabela de transição completa, para exibição.
    pub fn transitions(&self) -> &ProbTable {
        &self.model.transitions
    }

    /// Tag gulosa de um único token.
    pub fn tag_token(&self, token: &str) -> &str {
        best_tag(&self.model, token)
    }

    /// Etiqueta um texto com o decodificador padrão.
    ///
    /// # Erros
    /// [`PosError::EmptyText`] se o texto for vazio ou só tiver espaços.
    pub fn tag_text(&self, text: &str) -> Result<Vec<TaggedWord>> {
        self.tag_text_with_mode(text, self.default_mode)
    }

    /// Etiqueta um texto escolhendo o decodificador.
    pub fn tag_text_with_mode(&self, text: &str, mode: DecoderMode) -> Result<Vec<TaggedWord>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PosError::EmptyText);
        }
        let tokens = tokenize(text);
        debug!(tokens = tokens.len(), decoder = mode.decoder().name(), "etiquetando texto");
        Ok(self.tag_tokens(&tokens, mode))
    }

    /// Etiqueta tokens já separados. A saída tem o mesmo tamanho da entrada.
    pub fn tag_tokens(&self, tokens: &[Token], mode: DecoderMode) -> Vec<TaggedWord> {
        let tags = mode.decoder().decode(&self.model, tokens);
        tokens
            .iter()
            .zip(tags)
            .map(|(token, tag)| TaggedWord { word: token.text.clone(), pos_tag: tag })
            .collect()
    }

    /// Etiqueta e monta o grafo de relações.
    pub fn word_graph(&self, text: &str, mode: DecoderMode) -> Result<WordGraph> {
        let tagged = self.tag_text_with_mode(text, mode)?;
        Ok(build_graph(&tagged))
    }

    /// Etiqueta vários textos em paralelo (rayon). Um resultado por texto, na mesma ordem.
    pub fn tag_batch<S>(&self, texts: &[S], mode: DecoderMode) -> Vec<Result<Vec<TaggedWord>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.tag_text_with_mode(text.as_ref(), mode))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{sample_corpus, Observation};
    use crate::estimator::train;
    use crate::tagger::UNKNOWN_TAG;

    fn toy_pipeline() -> PosPipeline {
        let corpus = vec![
            Observation::new("राम", "NNP"),
            Observation::new("जातो", "VM"),
            Observation::new("शाळेत", "NN"),
        ];
        PosPipeline::new(train(&corpus))
    }

    #[test]
    fn test_end_to_end_toy_corpus() {
        let pipeline = toy_pipeline();
        let tagged = pipeline.tag_text("राम जातो").unwrap();
        assert_eq!(
            tagged,
            vec![TaggedWord::new("राम", "NNP"), TaggedWord::new("जातो", "VM")]
        );
        // A última linha do corpus não gerou emissão
        assert_eq!(pipeline.tag_token("शाळेत"), UNKNOWN_TAG);
    }

    #[test]
    fn test_empty_text_is_distinct_error() {
        let pipeline = toy_pipeline();
        assert!(matches!(pipeline.tag_text(""), Err(PosError::EmptyText)));
        assert!(matches!(pipeline.tag_text("   \n"), Err(PosError::EmptyText)));
        // Texto presente mas desconhecido: sucesso com fallback
        let tagged = pipeline.tag_text("पाऊस").unwrap();
        assert_eq!(tagged, vec![TaggedWord::new("पाऊस", UNKNOWN_TAG)]);
    }

    #[test]
    fn test_output_length_equals_token_count() {
        let pipeline = PosPipeline::new(train(&sample_corpus()));
        let text = "राम, सीता आणि मी (घरी) गेलो!";
        let tagged = pipeline.tag_text(text).unwrap();
        assert_eq!(tagged.len(), tokenize(text).len());
    }

    #[test]
    fn test_deterministic() {
        let pipeline = PosPipeline::new(train(&sample_corpus()));
        let text = "राम शाळेत जातो. तो खूप हुशार आहे।";
        for mode in [DecoderMode::Greedy, DecoderMode::Viterbi] {
            let a = pipeline.tag_text_with_mode(text, mode).unwrap();
            let b = pipeline.tag_text_with_mode(text, mode).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_transitions_accessor_is_unmodified() {
        let model = train(&sample_corpus());
        let pipeline = PosPipeline::new(model.clone());
        assert_eq!(pipeline.transitions(), &model.transitions);
    }

    #[test]
    fn test_batch_matches_sequential() {
        let pipeline = PosPipeline::new(train(&sample_corpus()));
        let texts = ["राम शाळेत जातो.", "", "सीता घरी आहे।"];
        let batch = pipeline.tag_batch(&texts, DecoderMode::Greedy);

        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].as_ref().unwrap(), &pipeline.tag_text(texts[0]).unwrap());
        assert!(matches!(batch[1], Err(PosError::EmptyText)));
        assert_eq!(batch[2].as_ref().unwrap(), &pipeline.tag_text(texts[2]).unwrap());
    }

    #[test]
    fn test_word_graph() {
        let pipeline = toy_pipeline();
        let graph = pipeline.word_graph("राम जातो", DecoderMode::Greedy).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.links.len(), 1);
        assert_eq!(graph.nodes[0].group, 1);
        assert!(pipeline.word_graph(" ", DecoderMode::Greedy).is_err());
    }
}
