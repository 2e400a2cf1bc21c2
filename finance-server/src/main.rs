#[macro_use]
extern crate tracing;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use actix_web::{App, HttpServer};
use anyhow::{anyhow, Context};
use rustls::{Certificate, PrivateKey, ServerConfig};
use rustls_pemfile::{certs, pkcs8_private_keys};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

use finance_lib::config::{Config, SSLConfig};
use finance_lib::LoginPolicy;
use finance_repo::Repos;

const SERVICE_NAME: &str = "finance-server";

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default());
    let tracing_guard = tracing::subscriber::set_default(subscriber);
    info!("tracing initialized");

    let config = match get_config_file() {
        Some(config_path) => {
            info!(path = %config_path.display(), "Reading config file");
            Config::from_file(config_path)?
        }
        None => {
            info!("No config file found, reading config from environment");
            Config::from_env()?
        }
    };

    let telemetry_layer = config
        .telemetry
        .as_ref()
        .map(|telemetry| finance_lib::tracing::create_opentelemetry_layer(SERVICE_NAME, telemetry))
        .transpose()?;

    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default())
        .with(telemetry_layer);
    tracing::subscriber::set_global_default(subscriber).context("Unable to set up subscriber")?;
    drop(tracing_guard);

    let repos = create_repos(&config).await?;
    let login_policy = LoginPolicy {
        verify_password: config.verify_login_password,
    };
    if !login_policy.verify_password {
        warn!("Login does not verify passwords");
    }

    let server = HttpServer::new(move || {
        App::new()
            .wrap(finance_lib::tracing::create_middleware())
            .configure(finance_lib::app_config_func(repos.clone(), login_policy))
    });
    let server = match &config.ssl {
        None => {
            warn!("Using http");
            server.bind(&config.bind_address)?
        }
        Some(ssl_config) => {
            info!("Using https");
            server.bind_rustls(&config.bind_address, load_rustls_config(ssl_config)?)?
        }
    };
    info!(bind_address = %config.bind_address, "Starting server");
    server.run().await?;

    Ok(())
}

async fn create_repos(config: &Config) -> Result<Repos, anyhow::Error> {
    match &config.database_url {
        Some(database_url) => {
            finance_repo::sqlx_repo::create_repos(
                database_url,
                config.max_pool_size,
                config.run_migrations,
            )
            .await
        }
        None => {
            warn!("No database configured, data will not survive a restart");
            Ok(finance_repo::mem_repo::create_repos())
        }
    }
}

fn load_rustls_config(ssl_config: &SSLConfig) -> Result<ServerConfig, anyhow::Error> {
    let config = ServerConfig::builder()
        .with_safe_defaults()
        .with_no_client_auth();

    let mut cert_file = BufReader::new(
        File::open(&ssl_config.certificate_chain_file)
            .context("Error opening certificate chain file")?,
    );
    let mut key_file = BufReader::new(
        File::open(&ssl_config.private_key_file).context("Error opening private key file")?,
    );

    let cert_chain = certs(&mut cert_file)
        .context("Unable to read certificate chain file")?
        .into_iter()
        .map(Certificate)
        .collect();
    let mut keys: Vec<PrivateKey> = pkcs8_private_keys(&mut key_file)
        .context("Unable to read private key file")?
        .into_iter()
        .map(PrivateKey)
        .collect();

    if keys.is_empty() {
        return Err(anyhow!("No private key found in file"));
    }

    let config = config.with_single_cert(cert_chain, keys.remove(0))?;
    Ok(config)
}

fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}
