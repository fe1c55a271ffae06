//! Clerk application binary - composition root.
//!
//! Ties the crates together into a single interactive executable:
//! 1. Load configuration from TOML
//! 2. Open the SQLite session store under the data directory
//! 3. Assemble the catalog stack (demo inventory -> cache -> retry)
//! 4. Run a read-eval-print loop over stdin

use std::io::{BufRead, Write};
use std::time::Duration;

use clap::Parser;

use clerk_catalog::{demo_catalog_with_limit, CachedCatalog, RetryCatalog};
use clerk_chat::{ChatEngine, ChatService, Intent, SessionStore};
use clerk_core::config::ClerkConfig;

mod cli;

use cli::CliArgs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config first so the log level can come from it.
    let config_file = args.resolve_config_path();
    let config = ClerkConfig::load_or_default(&config_file);

    // Tracing.
    let level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    tracing::info!("Starting Clerk v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Storage.
    let data_dir = args.resolve_data_dir(&config.general.data_dir);
    std::fs::create_dir_all(&data_dir)?;
    let db_path = data_dir.join("clerk.db");
    let store = SessionStore::open(&db_path)?;
    tracing::info!(path = %db_path.display(), "Session store opened");

    // Catalog stack: demo inventory behind caching and retry middleware.
    let catalog = RetryCatalog::new(
        CachedCatalog::new(
            demo_catalog_with_limit(config.catalog.max_results),
            Duration::from_secs(config.catalog.cache_ttl_secs),
        ),
        config.catalog.retry_attempts,
        Duration::from_millis(config.catalog.retry_base_delay_ms),
    );

    let engine = ChatEngine::with_suggestion_limit(catalog, config.catalog.max_category_suggestions);
    let service = ChatService::new(engine, store, config.chat.clone());

    println!("Clerk shopping assistant. Type a message, or /reset, /history, /quit.");
    repl(&service, &args.session_key)
}

/// Read messages from stdin until EOF, a /quit command, or a goodbye turn.
fn repl<C: clerk_catalog::CatalogLookup>(
    service: &ChatService<C>,
    session_key: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut session_id = None;

    loop {
        print!("you> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        match message {
            "/quit" | "/exit" => break,
            "/reset" => {
                service.reset(session_key)?;
                session_id = None;
                println!("Session reset.");
                continue;
            }
            "/history" => {
                if let Some(id) = session_id {
                    for record in service.history(id)? {
                        println!("[{}] {}", record.role.as_str(), record.content);
                    }
                } else {
                    println!("No session yet.");
                }
                continue;
            }
            _ => {}
        }

        let (response, id) = match service.handle_message(session_key, session_id, message) {
            Ok(turn) => turn,
            Err(e) => {
                tracing::warn!(error = %e, "Turn failed");
                println!("clerk> Sorry, something went wrong: {}", e);
                continue;
            }
        };
        session_id = Some(id);

        println!("clerk> {}", response.message);
        for product in &response.products {
            println!("  - {} ({}) ${:.2}", product.name, product.brand, product.price);
        }
        if !response.suggestions.is_empty() {
            println!("  suggestions: {}", response.suggestions.join(", "));
        }

        if response.intent == Intent::Goodbye {
            break;
        }
    }

    Ok(())
}
