//! # Algoritmo de Viterbi sobre as tabelas de frequência relativa
//!
//! Alternativa ao decodificador guloso: procura a sequência de tags que
//! maximiza
//!
//! ```text
//! Π_i P(palavra_i | tag_i) · Π_i P(tag_i | tag_{i-1})
//! ```
//!
//! usando programação dinâmica em `O(N × T²)`. As contas são feitas em
//! log-space para evitar underflow.
//!
//! ## Diferenças para um HMM clássico
//!
//! - **Sem suavização**: probabilidade 0 vira `-inf` e o caminho é descartado.
//! - **Sem probabilidade inicial**: o modelo não tem tabela de início, então
//!   todas as tags começam empatadas.
//! - **Palavras desconhecidas** (nenhuma tag as emite) recebem
//!   [`UNKNOWN_TAG`] e quebram a frase em segmentos decodificados de forma
//!   independente.
//! - Se um segmento não tem nenhum caminho com probabilidade > 0 (por exemplo,
//!   uma transição nunca vista no corpus), ele cai no decodificador guloso.

use crate::model::ModelBundle;
use crate::tagger::{best_tag, Decoder, UNKNOWN_TAG};
use crate::tokenizer::Token;

/// Decodificador de sequência ótima.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viterbi;

impl Decoder for Viterbi {
    fn name(&self) -> &'static str {
        "viterbi"
    }

    fn decode(&self, model: &ModelBundle, tokens: &[Token]) -> Vec<String> {
        let mut tags = Vec::with_capacity(tokens.len());
        let mut segment: Vec<&str> = Vec::new();

        for token in tokens {
            if is_known(model, &token.text) {
                segment.push(&token.text);
            } else {
                tags.extend(decode_segment(model, &segment));
                segment.clear();
                tags.push(UNKNOWN_TAG.to_string());
            }
        }
        tags.extend(decode_segment(model, &segment));
        tags
    }
}

fn is_known(model: &ModelBundle, word: &str) -> bool {
    model.tags.iter().any(|tag| model.emissions.prob(tag, word) > 0.0)
}

fn ln(p: f64) -> f64 {
    if p > 0.0 {
        p.ln()
    } else {
        f64::NEG_INFINITY
    }
}

/// Decodifica um segmento em que todas as palavras têm alguma emissão.
fn decode_segment(model: &ModelBundle, words: &[&str]) -> Vec<String> {
    if words.is_empty() {
        return Vec::new();
    }

    let all_tags: Vec<&str> = model.tags.iter().collect();
    let n_words = words.len();
    let n_tags = all_tags.len();

    // viterbi[t][s] = log-prob do melhor caminho terminando na palavra t com a tag s
    let mut viterbi = vec![vec![f64::NEG_INFINITY; n_tags]; n_words];
    // backptr[t][s] = tag anterior que maximizou viterbi[t][s]
    let mut backptr = vec![vec![0usize; n_tags]; n_words];

    // 1. Inicialização (t=0): só emissão
    for (s, tag) in all_tags.iter().enumerate() {
        viterbi[0][s] = ln(model.emissions.prob(tag, words[0]));
    }

    // 2. Recursão
    for t in 1..n_words {
        for (s, curr_tag) in all_tags.iter().enumerate() {
            let emit_p = ln(model.emissions.prob(curr_tag, words[t]));
            if emit_p == f64::NEG_INFINITY {
                continue;
            }

            let mut best_prob = f64::NEG_INFINITY;
            let mut best_prev = 0;
            for (prev_s, prev_tag) in all_tags.iter().enumerate() {
                let trans_p = ln(model.transitions.prob(prev_tag, curr_tag));
                let prob = viterbi[t - 1][prev_s] + trans_p;
                if prob > best_prob {
                    best_prob = prob;
                    best_prev = prev_s;
                }
            }

            viterbi[t][s] = best_prob + emit_p;
            backptr[t][s] = best_prev;
        }
    }

    // 3. Terminação
    let mut best_last_prob = f64::NEG_INFINITY;
    let mut best_last_idx = 0;
    for (s, &score) in viterbi[n_words - 1].iter().enumerate() {
        if score > best_last_prob {
            best_last_prob = score;
            best_last_idx = s;
        }
    }

    if best_last_prob == f64::NEG_INFINITY {
        return words.iter().map(|w| best_tag(model, w).to_string()).collect();
    }

    // 4. Backtracking
    let mut path = vec![String::new(); n_words];
    let mut curr = best_last_idx;
    path[n_words - 1] = all_tags[curr].to_string();
    for t in (1..n_words).rev() {
        curr = backptr[t][curr];
        path[t - 1] = all_tags[curr].to_string();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Observation;
    use crate::estimator::train;
    use crate::tagger::Greedy;
    use crate::tokenizer::tokenize;

    fn obs(rows: &[(&str, &str)]) -> Vec<Observation> {
        rows.iter().copied().map(Observation::from).collect()
    }

    /// "आहे" emite 1.0 em VM e em VAUX; o guloso desempata por ordem (VM),
    /// mas depois de JJ o corpus só viu VAUX.
    fn ambiguous_model() -> ModelBundle {
        train(&obs(&[
            ("राम", "NNP"), ("घरी", "NN"), ("आहे", "VM"), ("।", "SYM"),
            ("सीता", "NNP"), ("बागेत", "NN"), ("आहे", "VM"), ("।", "SYM"),
            ("तो", "PRP"), ("हुशार", "JJ"), ("आहे", "VAUX"), ("।", "SYM"),
            ("end", "SYM"),
        ]))
    }

    #[test]
    fn test_viterbi_uses_transitions() {
        let model = ambiguous_model();
        let tokens = tokenize("तो हुशार आहे");

        assert_eq!(Greedy.decode(&model, &tokens), vec!["PRP", "JJ", "VM"]);
        assert_eq!(Viterbi.decode(&model, &tokens), vec!["PRP", "JJ", "VAUX"]);
    }

    #[test]
    fn test_unknown_word_splits_segments() {
        let model = ambiguous_model();
        let tokens = tokenize("राम पाऊस हुशार आहे");
        let tags = Viterbi.decode(&model, &tokens);
        assert_eq!(tags, vec!["NNP", UNKNOWN_TAG, "JJ", "VAUX"]);
    }

    #[test]
    fn test_impossible_path_falls_back_to_greedy() {
        let model = ambiguous_model();
        // NNP → SYM nunca foi vista: nenhum caminho com probabilidade > 0
        let tokens = tokenize("राम ।");
        assert_eq!(Viterbi.decode(&model, &tokens), Greedy.decode(&model, &tokens));
    }

    #[test]
    fn test_output_length_matches_input() {
        let model = ambiguous_model();
        for text in ["", "आहे", "राम घरी आहे। तो हुशार आहे।", "x y z"] {
            let tokens = tokenize(text);
            assert_eq!(Viterbi.decode(&model, &tokens).len(), tokens.len());
        }
    }
}
