//! # Grafo de Relações entre Palavras
//!
//! Transforma a saída etiquetada em um grafo para visualização (force-directed
//! na interface web): um nó por token e uma aresta entre cada par de tokens
//! consecutivos, todas com peso 1.
//!
//! Cada nó carrega um **grupo** numérico derivado da tag, usado pela UI para
//! colorir classes gramaticais parecidas com a mesma cor.

use serde::{Deserialize, Serialize};

use crate::tagger::TaggedWord;

/// Grupo reservado para tags não classificadas.
pub const UNCLASSIFIED_GROUP: u8 = 0;

/// Nó do grafo: um token da frase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Posição do token na frase
    pub id: usize,
    pub word: String,
    pub pos_tag: String,
    /// Grupo de cor (ver [`pos_group`])
    pub group: u8,
}

/// Aresta entre dois tokens vizinhos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,
    pub value: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// Grupo de cor de uma tag.
///
/// | Grupo | Tags              | Classe                |
/// |-------|-------------------|-----------------------|
/// | 1     | NN, NNP           | Substantivo           |
/// | 2     | PRP               | Pronome               |
/// | 3     | JJ                | Adjetivo              |
/// | 4     | RB                | Advérbio              |
/// | 5     | VB, VM, VAUX      | Verbo                 |
/// | 6     | CC                | Conjunção             |
/// | 7     | PSP               | Posposição            |
/// | 8     | QF, QC, QO        | Quantificador/numeral |
/// | 9     | SYM               | Símbolo               |
/// | 10    | RDP               | Reduplicação          |
/// | 11    | ECH               | Eco                   |
/// | 12    | UNK               | Desconhecido          |
/// | 0     | qualquer outra    | Não classificado      |
pub fn pos_group(pos_tag: &str) -> u8 {
    match pos_tag {
        "NN" | "NNP" => 1,
        "PRP" => 2,
        "JJ" => 3,
        "RB" => 4,
        "VB" | "VM" | "VAUX" => 5,
        "CC" => 6,
        "PSP" => 7,
        "QF" | "QC" | "QO" => 8,
        "SYM" => 9,
        "RDP" => 10,
        "ECH" => 11,
        "UNK" => 12,
        _ => UNCLASSIFIED_GROUP,
    }
}

/// Monta o grafo a partir da lista etiquetada (na ordem dos tokens).
pub fn build_graph(tagged: &[TaggedWord]) -> WordGraph {
    let nodes = tagged
        .iter()
        .enumerate()
        .map(|(id, tw)| GraphNode {
            id,
            word: tw.word.clone(),
            pos_tag: tw.pos_tag.clone(),
            group: pos_group(&tw.pos_tag),
        })
        .collect();

    let links = (1..tagged.len())
        .map(|i| GraphLink { source: i - 1, target: i, value: 1 })
        .collect();

    WordGraph { nodes, links }
}
