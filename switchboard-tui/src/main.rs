use std::env;
use std::sync::Arc;

use switchboard_core::SessionManager;
use ui::SwitchboardUI;
mod ui;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Set default log level to off if RUST_LOG is not set
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "off");
    }

    // Initialize logging to file
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open("switchboard-debug.log")?,
        )))
        .init();

    log::info!("Starting switchboard application");

    let session_manager = Arc::new(SessionManager::new());
    let mut tui = SwitchboardUI::new(session_manager);
    tui.run_ui().await?;

    log::info!("switchboard application finished");
    Ok(())
}
