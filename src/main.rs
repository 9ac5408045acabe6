use std::sync::Arc;

use anyhow::{Result, anyhow};
use clap::{Arg, Command};
use loto::{HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("loto-server")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Loto ticketing service")
        .arg(
            Arg::new("config-check")
                .long("config-check")
                .action(clap::ArgAction::SetTrue)
                .help("Check configuration and exit"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(clap::ArgAction::Count)
                .help("Set verbose output level"),
        )
        .get_matches();

    let log_level = match matches.get_count("verbose") {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    loto::setup(Some(log_level));

    if matches.get_flag("config-check") {
        return config_check();
    }

    serve().await
}

fn config_check() -> Result<()> {
    log::info!("Checking configuration...");

    match loto::db::establish_db_connection() {
        Ok(_) => log::debug!("Database connection: OK"),
        Err(e) => {
            log::error!("Database connection failed: {e}");
            return Err(anyhow!("Database connection failed: {e}"));
        }
    }

    let config = ServerConfig::from_env();
    log::debug!(
        "HTTP server will bind {} (base url {})",
        config.socket_addr(),
        config.base_url
    );
    if config.admin_token.is_none() {
        log::warn!("LOTO_ADMIN_TOKEN is not set; round-control endpoints will reject all requests");
    }

    log::info!("Configuration check completed successfully");
    Ok(())
}

async fn serve() -> Result<()> {
    loto::db::run_migrations()?;

    let config = Arc::new(ServerConfig::from_env());
    if config.admin_token.is_none() {
        log::warn!("LOTO_ADMIN_TOKEN is not set; round-control endpoints will reject all requests");
    }

    let server = HttpServer::new(config);
    let handle = server.start().await?;
    handle.await.map_err(|e| anyhow!("server task failed: {e}"))?;
    Ok(())
}
