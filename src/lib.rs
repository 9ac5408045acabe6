//! Loto ticketing service: round lifecycle, pay-slip validation, and
//! ticket issuance over a SQLite store.

pub mod db;
pub mod error;
pub mod models;
pub mod qr;
pub mod server;
pub mod service;

pub use error::ServiceError;
pub use server::{HttpServer, ServerConfig};

/// Initialize env loading and logging. `level` overrides the default
/// filter; `RUST_LOG` still wins when set.
pub fn setup(level: Option<log::LevelFilter>) {
    let _ = dotenvy::dotenv();

    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}
