use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, ServerConfig, router};
use intake_delivery::{DeliveryConfig, MailgunSender};

/// Main entry point for the intake server
///
/// Serves the static intake form and accepts submissions on `POST /api/submit`, e-mailing
/// the compiled narrative to the office through Mailgun.
///
/// Missing mail settings are logged and the server still starts; submissions are then
/// refused with a 500 until the settings are provided.
///
/// # Environment Variables
/// - `INTAKE_ADDR`: Server address (default: "0.0.0.0:3000"), or `PORT` for "0.0.0.0:{PORT}"
/// - `INTAKE_PUBLIC_DIR`: Directory holding the form page (default: "public")
/// - `MAILGUN_API_KEY`, `MAILGUN_DOMAIN`, `OFFICE_EMAIL`, `FROM_EMAIL`: required for sending
/// - `FROM_NAME`: Sender display name (default: "Office Form")
/// - `MAILGUN_EU`: Any value selects the EU Mailgun region
///
/// # Returns
/// * `Ok(())` - If the server shuts down cleanly
/// * `Err(anyhow::Error)` - If startup or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intake=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server = ServerConfig::from_env();

    let state = match DeliveryConfig::from_env() {
        Ok(config) => {
            let sender = MailgunSender::new(&config);
            tracing::info!(
                "++ Mail delivery via {} to {}",
                sender.endpoint(),
                config.office_email()
            );
            AppState::configured(config, Arc::new(sender))
        }
        Err(e) => {
            tracing::error!("Mail delivery disabled: {}", e);
            AppState::unconfigured()
        }
    };

    let app = router(state, server.public_dir());

    tracing::info!(
        "++ Starting intake API on {} (static files from {})",
        server.addr(),
        server.public_dir().display()
    );

    let listener = tokio::net::TcpListener::bind(server.addr()).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("-- Shutting down intake API");
}
