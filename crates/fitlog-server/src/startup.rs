//! Server startup output.

use fitlog_config::ServerConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r"
    _______ __  __
   / ____(_) /_/ /___  ____ _
  / /_  / / __/ / __ \/ __ `/
 / __/ / / /_/ / /_/ / /_/ /
/_/   /_/\__/_/\____/\__, /
                    /____/
    "
    );
}

/// Prints where the server can be reached.
pub fn print_startup_info(server: &ServerConfig) {
    let separator = "=".repeat(60);
    let base = format!("http://{}", server.addr());
    info!("{}", separator);
    info!("REST API:  {}/api/users", base);
    info!("Health:    {}/health", base);
    info!("API Docs:  {}/swagger-ui", base);
    info!("{}", separator);
}
