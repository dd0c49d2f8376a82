use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_watch::acquire::{Acquirer, EXIT_AUTH_FAILURE, TracingObserver};
use seat_watch::booking::{BookingClient, GatewayConfig, HttpBookingClient};
use seat_watch::cli::{Args, RunSettings};
use seat_watch::notify::TelegramNotifier;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env first so both RUST_LOG and the flags can fall back to it.
    // Variables already set in the environment take precedence.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: failed to load .env: {e}");
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = match Args::parse().into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(e.exit_code());
        }
    };

    run(settings).await
}

async fn run(settings: RunSettings) -> ExitCode {
    let gateway = GatewayConfig::new(
        &settings.credentials.member_id,
        &settings.credentials.password,
    )
    .with_base_url(&settings.gateway_url);

    let mut client = match HttpBookingClient::new(gateway) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create booking client: {e}");
            return ExitCode::from(EXIT_AUTH_FAILURE);
        }
    };

    match client.login().await {
        Ok(true) => info!("Logged in as {}", settings.credentials.member_id),
        Ok(false) => {
            eprintln!("Login failed. Check credentials.");
            return ExitCode::from(EXIT_AUTH_FAILURE);
        }
        Err(e) => {
            eprintln!("Login failed: {e}");
            return ExitCode::from(EXIT_AUTH_FAILURE);
        }
    }

    let notifier = settings
        .telegram
        .and_then(|config| match TelegramNotifier::new(config) {
            Ok(notifier) => Some(notifier),
            Err(e) => {
                warn!("Telegram notification disabled: {e}");
                None
            }
        });

    let mut acquirer = Acquirer::new(client, notifier, TracingObserver, settings.config);
    match acquirer.run(&settings.query).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
