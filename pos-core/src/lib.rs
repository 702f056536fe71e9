//! # pos-core — Etiquetador Morfossintático (POS) para Marathi
//!
//! Este crate atribui uma classe gramatical (tag POS) a cada token de uma frase
//! em Marathi, usando probabilidades estimadas por frequência relativa a partir
//! de um corpus anotado.
//!
//! ## Arquitetura do Sistema
//!
//! ```text
//! corpus CSV ──► estimator ──► ModelBundle ──(JSON)──► servidor
//!                                               │
//!                       texto ──► tokenizer ──► tagger ──► [{word, pos_tag}] ──► graph
//! ```
//!
//! 1.  **Corpus** ([`corpus`]): observações `(palavra, tag)` na ordem do arquivo.
//! 2.  **Treinamento** ([`estimator`]): tabelas de transição e emissão + conjunto de tags.
//! 3.  **Modelo** ([`model`]): o pacote imutável, serializado em JSON.
//! 4.  **Tokenização** ([`tokenizer`]): palavras e pontuação isolada.
//! 5.  **Etiquetagem** ([`tagger`], [`viterbi`]): um decodificador por trás do trait [`Decoder`].
//! 6.  **Apresentação** ([`graph`]): grafo de palavras vizinhas para a UI.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use pos_core::{corpus::Observation, estimator::train, PosPipeline, TaggedWord};
//!
//! let corpus = vec![
//!     Observation::new("राम", "NNP"),
//!     Observation::new("जातो", "VM"),
//!     Observation::new("शाळेत", "NN"),
//! ];
//! let pipeline = PosPipeline::new(train(&corpus));
//!
//! let tagged = pipeline.tag_text("राम जातो").unwrap();
//! assert_eq!(tagged, vec![TaggedWord::new("राम", "NNP"), TaggedWord::new("जातो", "VM")]);
//! ```

pub mod corpus;
pub mod error;
pub mod estimator;
pub mod graph;
pub mod model;
pub mod pipeline;
pub mod tagger;
pub mod tokenizer;
pub mod viterbi;

pub use error::{PosError, Result};
pub use model::{ModelBundle, ProbTable, TagSet};
pub use pipeline::PosPipeline;
pub use tagger::{Decoder, DecoderMode, TaggedWord, UNKNOWN_TAG};
pub use tokenizer::Token;
