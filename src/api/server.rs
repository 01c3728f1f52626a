use crate::api::routes;
use crate::constants::DEFAULT_DATABASE_PATH;
use crate::db::Database;
use std::net::SocketAddr;
use tracing::info;

/// Starts and runs the HTTP server using Axum web framework
///
/// The database path is taken from the DATABASE_PATH environment variable,
/// falling back to [`DEFAULT_DATABASE_PATH`]; the file and schema are created
/// on first open.
///
/// # Arguments
/// * `port` - Port number to listen on for incoming HTTP connections
///
/// # Errors
/// Returns an error if the database cannot be opened or the listener fails to bind
pub async fn launch_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let db_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
    let database = Database::new(&db_path)?;

    let app = routes::app(database);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "trivia API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
