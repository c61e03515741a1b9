pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{AppConfig, ClientConfig, LoggingConfig, ServerConfig, UpstreamConfig};
pub use error::ApiError;
pub use observability::{apply_logging_level, init_tracing};
pub use server::{GatewayServer, ServerBuilder, build_app};
pub use state::AppState;
