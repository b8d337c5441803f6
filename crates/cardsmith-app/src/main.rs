use std::path::PathBuf;

use anyhow::Context;
use cardsmith_anki::AnkiConnectClient;
use cardsmith_config::Config;
use cardsmith_lang_chinese::prompt::EXAMPLE_SYSTEM_PROMPT;
use cardsmith_lang_chinese::{ExampleValidator, PinyinTranscriber, ZhConverter};
use cardsmith_llm::OllamaGenerator;
use clap::{Parser, Subcommand};
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod commands;
mod state;

#[cfg(test)]
mod tests;

use self::commands::enrich_sentences::SentenceTask;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "cardsmith", about = "Build and enrich Anki decks with a local language model", version)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true, default_value = "cardsmith.json")]
    config: PathBuf,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a character deck from a frequency list, with generated examples
    BuildDeck {
        /// Frequency list (defaults to the configured path)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Only process the first N characters
        #[arg(long)]
        limit: Option<usize>,
        /// Export the finished deck to this .apkg path
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Fill in missing fields of an existing Chinese sentence deck
    EnrichSentences {
        /// Tasks to run, in order
        #[arg(long = "task", value_enum, required = true)]
        tasks: Vec<SentenceTask>,
    },

    /// Translate the prompts of a Spanish conjugation deck
    EnrichConjugation,

    /// Check that AnkiConnect and the model are reachable
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dotenv = dotenvy::dotenv();
    init_tracing(&cli.log_level, cli.json_logs);

    if let Err(e) = dotenv {
        tracing::debug!("No .env loaded: {e}");
    }

    let mut config = Config::load(&cli.config)?;
    config.apply_env();

    let state = AppState::new(config);

    // Ctrl+C stops after the note being processed
    let cancel = state.cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, stopping after the current note");
            cancel.cancel();
        }
    });

    run(cli.command, &state).await
}

async fn run(command: Command, state: &AppState) -> anyhow::Result<()> {
    let config = &state.config;
    let anki = AnkiConnectClient::new(config.anki.url.clone());

    match command {
        Command::BuildDeck {
            input,
            limit,
            export,
        } => {
            let system_prompt = if config.generator.system_prompt.is_empty() {
                EXAMPLE_SYSTEM_PROMPT
            } else {
                config.generator.system_prompt.as_str()
            };
            let generator = OllamaGenerator::new(&config.generator.url, &config.generator.model)
                .with_system_prompt(system_prompt);
            let validator = ExampleValidator::new(PinyinTranscriber);

            let path = input.unwrap_or_else(|| config.frequency.path.clone());
            let entries = commands::build_deck::load_entries(
                &path,
                &config.frequency.encodings,
                limit.or(config.frequency.limit),
            )?;

            commands::build_deck::build_deck(state, entries, &generator, &anki, &validator)
                .await?;

            if let Some(export) = export {
                anki.export_package(&config.anki.deck, &export, false)
                    .await
                    .with_context(|| format!("Failed to export {}", export.display()))?;
            }
        }
        Command::EnrichSentences { tasks } => {
            let generator = OllamaGenerator::new(&config.generator.url, &config.generator.model);
            commands::enrich_sentences::enrich_sentences(
                state,
                &tasks,
                &anki,
                &generator,
                &PinyinTranscriber,
                &ZhConverter,
            )
            .await?;
        }
        Command::EnrichConjugation => {
            let generator = OllamaGenerator::new(&config.generator.url, &config.generator.model);
            commands::enrich_conjugation::enrich_conjugation(state, &anki, &generator).await?;
        }
        Command::Check => {
            let generator = OllamaGenerator::new(&config.generator.url, &config.generator.model);
            commands::check::check(&anki, &generator).await?;
        }
    }

    Ok(())
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
