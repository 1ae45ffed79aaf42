use tracing::info;

use anonboard::web::WebServer;
use anonboard::{BoardService, Config};

#[tokio::main]
async fn main() {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    // Load configuration
    let config = match Config::load_with_env(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = anonboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        anonboard::logging::init_console_only(&config.logging.level);
    }

    info!("anonboard - anonymous message board");
    info!(
        thread_limit = config.board.thread_limit,
        reply_preview_limit = config.board.reply_preview_limit,
        "Board listing windows configured"
    );

    let board = BoardService::in_memory(config.board);
    let server = match WebServer::new(&config.server, board) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to create web server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        tracing::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
