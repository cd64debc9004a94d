//! Storyteller Engine - sheet editor on stdin.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storyteller_engine::api::Editor;
use storyteller_engine::infrastructure::{
    clock::SystemClock, memory::MemoryStore, ports::ClockPort, settings::EngineConfig,
};
use storyteller_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // stdout carries editor replies, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storyteller_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env();
    tracing::info!(character = %config.character, snapshot = ?config.snapshot, "Starting Storyteller Engine");

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let store = Arc::new(
        MemoryStore::open_snapshot(config.snapshot.as_deref(), clock).with_context(|| {
            format!(
                "Failed to load snapshot {}; fix or move it before starting",
                config.snapshot.as_deref().map(|p| p.display().to_string()).unwrap_or_default()
            )
        })?,
    );
    let app = Arc::new(App::in_memory(store.clone()));

    let mut editor = Editor::open(app, &config.character, config.template.as_deref())?;

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    stdout
        .write_all(format!("{}\n", editor.handle("help")).as_bytes())
        .await?;
    while let Some(line) = lines.next_line().await? {
        if line.trim().eq_ignore_ascii_case("quit") {
            break;
        }
        let reply = editor.handle(&line);
        if !reply.is_empty() {
            stdout.write_all(format!("{reply}\n").as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    if let Some(path) = &config.snapshot {
        if let Err(e) = store.save_to(path) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to save snapshot");
        }
    }
    tracing::info!("Storyteller Engine stopped");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
