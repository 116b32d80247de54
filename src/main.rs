use std::sync::Arc;

use anyhow::{Context, Result};
use todosync::backend::http::HttpService;
use todosync::config::Config;
use todosync::logger::{init_logging, Logger};
use todosync::store::{RootState, Store};
use todosync::sync::SyncService;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(path);
    }

    let config = Config::load()?;
    init_logging(&config.logging, Logger::new())?;

    if std::env::var(&config.api.api_key_env).is_err() {
        eprintln!("⚠️  {} is not set, requests will be sent without an API key", config.api.api_key_env);
    }

    let service = HttpService::from_config(&config.api).context("Failed to create HTTP client")?;
    let sync = SyncService::new(Arc::new(service), Store::new());

    if let Err(e) = sync.fetch_all().await {
        eprintln!("❌ {}", e.message());
    }

    print_snapshot(&sync.store().snapshot());
    Ok(())
}

fn print_snapshot(state: &RootState) {
    println!("status: {:?}", state.app.status);
    if let Some(error) = &state.app.error {
        println!("error: {error}");
    }

    for todolist in &state.todolists {
        println!("\n📋 {} ({})", todolist.title(), todolist.id());
        let tasks = state.tasks.get(todolist.id()).map(Vec::as_slice).unwrap_or_default();
        for task in tasks.iter().filter(|t| todolist.filter.matches(t)) {
            println!("  - [{:?}] {} ({:?})", task.status, task.title, task.priority);
        }
    }
}
