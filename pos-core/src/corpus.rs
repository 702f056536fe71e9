//! # Corpus Marathi anotado com tags POS
//!
//! O corpus de treino é uma sequência ordenada de observações `(palavra, tag)`.
//! A ordem importa: observações vizinhas definem as transições entre tags.
//!
//! ## Formato CSV
//!
//! Uma linha de cabeçalho e uma observação por linha. Por padrão as colunas se
//! chamam `Word` e `Pos_meaning`; outras colunas são ignoradas.
//!
//! ```text
//! Word,Pos_meaning
//! राम,NNP
//! शाळेत,NN
//! जातो,VM
//! ```
//!
//! Uma linha sem palavra ou sem tag aborta a leitura com
//! [`PosError::MalformedRow`]: um modelo treinado sobre dados parciais não é
//! seguro para servir.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PosError, Result};

/// Uma observação do corpus: a palavra e sua tag POS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub word: String,
    pub tag: String,
}

impl Observation {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self { word: word.into(), tag: tag.into() }
    }
}

impl<W: Into<String>, T: Into<String>> From<(W, T)> for Observation {
    fn from((word, tag): (W, T)) -> Self {
        Self::new(word, tag)
    }
}

/// Nomes das colunas de palavra e de tag no cabeçalho do CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusColumns {
    pub word: String,
    pub tag: String,
}

impl Default for CorpusColumns {
    fn default() -> Self {
        Self {
            word: "Word".to_string(),
            tag: "Pos_meaning".to_string(),
        }
    }
}

/// Lê observações de um CSV em qualquer `Read`.
pub fn read_csv<R: Read>(reader: R, columns: &CorpusColumns) -> Result<Vec<Observation>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column_index = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| PosError::MissingColumn(name.to_string()))
    };
    let word_idx = column_index(columns.word.as_str())?;
    let tag_idx = column_index(columns.tag.as_str())?;
    debug!(word_idx, tag_idx, "colunas do corpus localizadas");

    let mut observations = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;
        let field = |idx: usize, name: &str| {
            record
                .get(idx)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| PosError::MalformedRow { row, field: name.to_string() })
        };
        let word = field(word_idx, columns.word.as_str())?;
        let tag = field(tag_idx, columns.tag.as_str())?;
        observations.push(Observation::new(word, tag));
    }

    Ok(observations)
}

/// Lê observações de um arquivo CSV.
pub fn load_csv(path: impl AsRef<Path>, columns: &CorpusColumns) -> Result<Vec<Observation>> {
    let path = path.as_ref();
    let observations = read_csv(File::open(path)?, columns)?;
    info!(path = %path.display(), observations = observations.len(), "corpus carregado");
    Ok(observations)
}

/// Pequeno corpus embutido, útil para demonstração e testes.
///
/// Frases simples do cotidiano escolar, já tokenizadas e anotadas com o tagset
/// BIS usado pelos corpora indianos (NN, NNP, PRP, VM, VAUX, PSP, JJ, RB, QC, SYM...).
pub fn sample_corpus() -> Vec<Observation> {
    const ROWS: &[(&str, &str)] = &[
        // "राम शाळेत जातो ।"
        ("राम", "NNP"), ("शाळेत", "NN"), ("जातो", "VM"), ("।", "SYM"),
        // "सीता घरी आहे ।"
        ("सीता", "NNP"), ("घरी", "NN"), ("आहे", "VM"), ("।", "SYM"),
        // "तो खूप हुशार आहे ।"
        ("तो", "PRP"), ("खूप", "QF"), ("हुशार", "JJ"), ("आहे", "VAUX"), ("।", "SYM"),
        // "मी दोन पुस्तके वाचली ।"
        ("मी", "PRP"), ("दोन", "QC"), ("पुस्तके", "NN"), ("वाचली", "VM"), ("।", "SYM"),
        // "राम आणि सीता बागेत गेले ।"
        ("राम", "NNP"), ("आणि", "CC"), ("सीता", "NNP"), ("बागेत", "NN"), ("गेले", "VM"), ("।", "SYM"),
        // "ती लवकर घरी आली ।"
        ("ती", "PRP"), ("लवकर", "RB"), ("घरी", "NN"), ("आली", "VM"), ("।", "SYM"),
        // "शाळेच्या समोर मोठे झाड आहे ।"
        ("शाळेच्या", "NN"), ("समोर", "PSP"), ("मोठे", "JJ"), ("झाड", "NN"), ("आहे", "VM"), ("।", "SYM"),
    ];
    ROWS.iter().copied().map(Observation::from).collect()
}

/// Textos de demonstração para a interface web
pub fn demo_texts() -> Vec<&'static str> {
    vec![
        "राम शाळेत जातो.",
        "सीता आणि राम बागेत गेले।",
        "तो खूप हुशार आहे!",
        "मी दोन पुस्तके वाचली, ती लवकर घरी आली.",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_from_pair() {
        assert_eq!(Observation::from(("राम", "NNP")), Observation::new("राम", "NNP"));
        assert_eq!(sample_corpus()[0], Observation::new("राम", "NNP"));
    }

    #[test]
    fn test_read_csv_default_columns() {
        let data = "Word,Pos_meaning\nराम,NNP\nजातो,VM\n";
        let obs = read_csv(data.as_bytes(), &CorpusColumns::default()).unwrap();
        assert_eq!(obs, vec![Observation::new("राम", "NNP"), Observation::new("जातो", "VM")]);
    }

    #[test]
    fn test_read_csv_ignores_extra_columns_and_order() {
        let data = "Id,Pos_meaning,Word\n1,NN,शाळेत\n2,VM, जातो \n";
        let obs = read_csv(data.as_bytes(), &CorpusColumns::default()).unwrap();
        assert_eq!(obs[0], Observation::new("शाळेत", "NN"));
        assert_eq!(obs[1], Observation::new("जातो", "VM"));
    }

    #[test]
    fn test_missing_tag_reports_row() {
        let data = "Word,Pos_meaning\nराम,NNP\nजातो,\nशाळेत,NN\n";
        let err = read_csv(data.as_bytes(), &CorpusColumns::default()).unwrap_err();
        match err {
            PosError::MalformedRow { row, field } => {
                assert_eq!(row, 2);
                assert_eq!(field, "Pos_meaning");
            }
            other => panic!("erro inesperado: {other:?}"),
        }
    }

    #[test]
    fn test_short_row_reports_missing_field() {
        let data = "Pos_meaning,Word\nNNP\n";
        let err = read_csv(data.as_bytes(), &CorpusColumns::default()).unwrap_err();
        assert!(matches!(err, PosError::MalformedRow { row: 1, ref field } if field == "Word"));
    }

    #[test]
    fn test_missing_column() {
        let data = "Word,Tag\nराम,NNP\n";
        let err = read_csv(data.as_bytes(), &CorpusColumns::default()).unwrap_err();
        assert!(matches!(err, PosError::MissingColumn(ref c) if c == "Pos_meaning"));
    }

    #[test]
    fn test_custom_columns_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "token,pos").unwrap();
        writeln!(file, "मी,PRP").unwrap();
        let columns = CorpusColumns { word: "token".into(), tag: "pos".into() };
        let obs = load_csv(file.path(), &columns).unwrap();
        assert_eq!(obs, vec![Observation::new("मी", "PRP")]);
    }

    #[test]
    fn test_sample_corpus_is_well_formed() {
        let corpus = sample_corpus();
        assert!(corpus.len() > 20);
        assert!(corpus.iter().all(|o| !o.word.is_empty() && !o.tag.is_empty()));
    }
}
