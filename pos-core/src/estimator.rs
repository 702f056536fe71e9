//! # Estimador de Probabilidades (treinamento)
//!
//! Converte a sequência de observações `(palavra, tag)` do corpus nas tabelas
//! do [`ModelBundle`] por **frequência relativa**, sem suavização:
//!
//! ```text
//! P(próxima | tag) = count(tag → próxima) / Σ count(tag → *)
//! P(palavra | tag) = count(tag, palavra)  / count(tag)
//! ```
//!
//! ## Varredura por pares adjacentes
//!
//! As contagens são feitas sobre cada par `(i, i+1)` do corpus. A observação `i`
//! é a "atual": conta a transição `tag_i → tag_{i+1}`, a emissão `(tag_i, palavra_i)`
//! e uma ocorrência de `tag_i`. Consequência: a **última linha do corpus nunca é
//! contada como atual**, só como destino de transição. Ela ainda entra no
//! conjunto de tags.
//!
//! Uma tag sem nenhuma contagem não ganha linha nas tabelas (nada de divisão
//! por zero). Quem consulta trata a linha ausente como probabilidade 0.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::corpus::Observation;
use crate::model::{ModelBundle, ProbRow, ProbTable, TagSet};

/// Resumo de um treinamento, para log e para a CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingStats {
    /// Observações lidas do corpus
    pub observations: usize,
    /// Pares adjacentes efetivamente contados (`observations - 1`)
    pub counted_pairs: usize,
    /// Tags distintas
    pub tags: usize,
    /// Tags com pelo menos uma transição de saída
    pub transition_rows: usize,
    /// Tags com pelo menos uma emissão
    pub emission_rows: usize,
}

/// Treina o modelo a partir das observações, na ordem do corpus.
///
/// # Exemplo
/// ```rust
/// use pos_core::corpus::Observation;
/// use pos_core::estimator::train;
///
/// let corpus = vec![
///     Observation::new("राम", "NNP"),
///     Observation::new("जातो", "VM"),
///     Observation::new("शाळेत", "NN"),
/// ];
/// let model = train(&corpus);
/// assert_eq!(model.emissions.prob("NNP", "राम"), 1.0);
/// // "शाळेत" é a última linha: nunca contada como observação atual
/// assert!(model.emissions.row("NN").is_none());
/// ```
pub fn train(observations: &[Observation]) -> ModelBundle {
    train_with_stats(observations).0
}

/// Como [`train`], devolvendo também o resumo do treinamento.
pub fn train_with_stats(observations: &[Observation]) -> (ModelBundle, TrainingStats) {
    let mut transition_counts: HashMap<&str, HashMap<&str, u32>> = HashMap::new();
    let mut emission_counts: HashMap<&str, HashMap<&str, u32>> = HashMap::new();
    let mut tag_counts: HashMap<&str, u32> = HashMap::new();

    let tags: TagSet = observations.iter().map(|o| o.tag.as_str()).collect();

    // 1. Contagem sobre pares adjacentes
    for pair in observations.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        let tag = current.tag.as_str();

        *transition_counts
            .entry(tag)
            .or_default()
            .entry(next.tag.as_str())
            .or_insert(0) += 1;

        *emission_counts
            .entry(tag)
            .or_default()
            .entry(current.word.as_str())
            .or_insert(0) += 1;

        *tag_counts.entry(tag).or_insert(0) += 1;
    }

    // 2. Normalização
    let mut transitions = ProbTable::new();
    for (tag, nexts) in &transition_counts {
        let total: u32 = nexts.values().sum();
        if total == 0 {
            continue;
        }
        transitions.insert_row(*tag, normalize(nexts, total));
    }

    let mut emissions = ProbTable::new();
    for (tag, words) in &emission_counts {
        let total = tag_counts.get(tag).copied().unwrap_or(0);
        if total == 0 {
            continue;
        }
        emissions.insert_row(*tag, normalize(words, total));
    }

    let stats = TrainingStats {
        observations: observations.len(),
        counted_pairs: observations.len().saturating_sub(1),
        tags: tags.len(),
        transition_rows: transitions.len(),
        emission_rows: emissions.len(),
    };

    if let Some(last) = observations.last() {
        debug!(word = %last.word, tag = %last.tag, "última observação usada apenas como destino de transição");
    }
    info!(
        observations = stats.observations,
        tags = stats.tags,
        transition_rows = stats.transition_rows,
        emission_rows = stats.emission_rows,
        "treinamento concluído"
    );

    (ModelBundle::new(transitions, emissions, tags), stats)
}

fn normalize(counts: &HashMap<&str, u32>, total: u32) -> ProbRow {
    let total = total as f64;
    counts
        .iter()
        .map(|(key, &count)| (key.to_string(), count as f64 / total))
        .collect()
}
