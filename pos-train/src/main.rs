//! Treinamento offline: corpus CSV anotado → pacote de modelo em JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pos_core::corpus::{load_csv, CorpusColumns};
use pos_core::estimator::train_with_stats;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Treina o etiquetador POS Marathi a partir de um corpus CSV.")]
struct Args {
    /// Corpus anotado em CSV (uma observação por linha, com cabeçalho)
    #[arg(long)]
    corpus: PathBuf,

    /// Arquivo onde gravar o modelo treinado
    #[arg(long, default_value = "marathi_pos_model.json")]
    model: PathBuf,

    /// Nome da coluna com a palavra
    #[arg(long, default_value = "Word")]
    word_column: String,

    /// Nome da coluna com a tag POS
    #[arg(long, default_value = "Pos_meaning")]
    tag_column: String,
}

fn run(args: Args) -> pos_core::Result<()> {
    let columns = CorpusColumns { word: args.word_column, tag: args.tag_column };
    let observations = load_csv(&args.corpus, &columns)?;

    let (model, stats) = train_with_stats(&observations);
    info!(
        pairs = stats.counted_pairs,
        tags = stats.tags,
        "tabelas de transição e emissão calculadas"
    );

    model.save(&args.model)?;
    info!("Modelo salvo em {}", args.model.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("falha no treinamento: {err}");
            ExitCode::FAILURE
        }
    }
}
