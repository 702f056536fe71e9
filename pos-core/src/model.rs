//! # Pacote de Modelo (Model Bundle)
//!
//! O modelo treinado é a tripla:
//! - **Tabela de Transição**: `tag → próxima_tag → P(próxima | tag)`
//! - **Tabela de Emissão**: `tag → palavra → P(palavra | tag)`
//! - **Conjunto de Tags**: todas as tags vistas no treino, na ordem em que apareceram
//!
//! Depois de carregado, o pacote é somente leitura. O servidor o compartilha
//! entre requisições sem nenhum lock.
//!
//! ## Persistência
//!
//! O formato em disco é JSON ([`ModelBundle::save`] / [`ModelBundle::load`]).
//! As tabelas usam `BTreeMap`, então o arquivo gerado é estável entre execuções.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Uma linha da tabela: `chave_interna → probabilidade`.
pub type ProbRow = BTreeMap<String, f64>;

/// Mapa de dois níveis com semântica explícita de "ausente ⇒ probabilidade 0".
///
/// Usado tanto para transições (`tag → próxima_tag`) quanto para emissões
/// (`tag → palavra`). Uma tag sem contagens simplesmente não tem linha.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbTable {
    rows: BTreeMap<String, ProbRow>,
}

impl ProbTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probabilidade de `inner` dado `outer`. Linha ou entrada ausente → `0.0`.
    pub fn prob(&self, outer: &str, inner: &str) -> f64 {
        self.rows
            .get(outer)
            .and_then(|row| row.get(inner))
            .copied()
            .unwrap_or(0.0)
    }

    /// A linha completa de `outer`, se houver alguma informação para ela.
    pub fn row(&self, outer: &str) -> Option<&ProbRow> {
        self.rows.get(outer)
    }

    /// Insere uma linha inteira (substitui a anterior, se existir).
    pub fn insert_row(&mut self, outer: impl Into<String>, row: ProbRow) {
        self.rows.insert(outer.into(), row);
    }

    /// Itera sobre `(outer, linha)` em ordem lexicográfica.
    pub fn rows(&self) -> impl Iterator<Item = (&String, &ProbRow)> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Conjunto de tags conhecidas, na ordem da primeira ocorrência no corpus.
///
/// A ordem importa: é ela que desempata o arg-max na etiquetagem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona a tag se ainda não estiver presente. Retorna `true` se foi inserida.
    pub fn insert(&mut self, tag: &str) -> bool {
        if self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Tags em ordem de primeira ocorrência.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}

/// O modelo completo produzido pelo treinamento.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelBundle {
    /// $P(tag_{i+1} | tag_i)$
    pub transitions: ProbTable,
    /// $P(palavra | tag)$
    pub emissions: ProbTable,
    /// Tags conhecidas (ordem de primeira ocorrência)
    pub tags: TagSet,
}

impl ModelBundle {
    pub fn new(transitions: ProbTable, emissions: ProbTable, tags: TagSet) -> Self {
        Self { transitions, emissions, tags }
    }

    /// Serializa o pacote como JSON em qualquer `Write`.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Desserializa um pacote JSON de qualquer `Read`.
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Grava o pacote em `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        info!(path = %path.display(), tags = self.tags.len(), "modelo salvo");
        Ok(())
    }

    /// Carrega o pacote de `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let model = Self::read_from(BufReader::new(File::open(path)?))?;
        info!(
            path = %path.display(),
            tags = model.tags.len(),
            transition_rows = model.transitions.len(),
            emission_rows = model.emissions.len(),
            "modelo carregado"
        );
        Ok(model)
    }
}
