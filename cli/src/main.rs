//! CLI entrypoint for trivia-server
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trivia_application::{CategoryStore, QuestionStore};
use trivia_domain::{CategoryId, QuizScope};
use trivia_infrastructure::{ConfigLoader, FileConfig, InMemoryTriviaStore, load_seed};
use trivia_presentation::{AppState, Cli, QuizRepl, router};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Resolve file configuration first so logging can honor it.
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    config.validate()?;

    let _log_guard = init_tracing(&cli, &config)?;

    info!("Starting trivia-server");

    // === Dependency Injection ===
    // Build the store, seeded from file when one is configured.
    let seed_path = cli.seed.clone().or_else(|| config.store.seed.clone());
    let store = match seed_path {
        Some(path) => {
            let seed = load_seed(&path)
                .with_context(|| format!("failed to load seed file {}", path.display()))?;
            info!(
                categories = seed.categories.len(),
                questions = seed.questions.len(),
                "seeded store from {}",
                path.display()
            );
            Arc::new(InMemoryTriviaStore::from_seed(seed))
        }
        None => {
            info!("no seed file configured, starting with an empty store");
            Arc::new(InMemoryTriviaStore::empty())
        }
    };
    let questions: Arc<dyn QuestionStore> = store.clone();
    let categories: Arc<dyn CategoryStore> = store;

    // Quiz play mode
    if cli.play {
        let scope = QuizScope::from_category_id(CategoryId::new(cli.category.unwrap_or(0)));
        let repl = QuizRepl::new(questions, categories).with_scope(scope);

        repl.run().await?;
        return Ok(());
    }

    // Serve mode
    let bind: SocketAddr = match &cli.bind {
        Some(addr) => addr
            .parse()
            .with_context(|| format!("invalid bind address '{addr}'"))?,
        None => config.bind_addr()?,
    };

    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|                Trivia Server - JSON API                    |");
        println!("+============================================================+");
        println!();
        println!("Listening on: http://{bind}");
        println!("Routes: /categories /questions /search /quizzes");
        println!();
    }

    let app = router(AppState::new(questions, categories));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    info!("listening on {bind}");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize the tracing subscriber from the verbosity flags and the
/// optional log file. The returned guard must stay alive for the life
/// of the process to keep the background log writer running.
fn init_tracing(
    cli: &Cli,
    config: &FileConfig,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else {
        match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"), // -vvv or more
        }
    };

    match config.logging.file.as_ref() {
        Some(path) => {
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("log file path '{}' has no file name", path.display()))?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(
                    directory, file_name,
                ));

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .init();
            Ok(None)
        }
    }
}
