//! Application startup: database, HTTP server and chat bot.

use std::future::Future;

use axum::http::HeaderValue;
use sea_orm::DatabaseConnection;
use teloxide::Bot;
use tokio::{net::TcpListener, signal, sync::watch};
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    bot::{self, conversation::ConversationService},
    config::Config,
    error::{config::ConfigError, Error},
    model::app::AppState,
    router,
    service::{
        menu::source::{MenuApiClient, MenuSource},
        ticket::TicketRenderer,
    },
    util::time::MessClock,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Allow the configured origins to call the API from a browser
pub fn build_cors(config: &Config) -> Result<CorsLayer, Error> {
    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvValue {
                var: "CORS_ORIGINS".to_string(),
                reason: format!("{}: {}", origin, e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Wire the conversation service to the configured menu source and ticket font
pub fn build_conversation_service(
    config: &Config,
    db: DatabaseConnection,
) -> Result<ConversationService, Error> {
    let menus = match &config.menu_api_url {
        Some(url) => {
            tracing::info!("Reading menus from {}", url);
            MenuSource::Remote(MenuApiClient::with_timeout(
                url.as_str(),
                config.menu_api_timeout,
            )?)
        }
        None => MenuSource::Local(db.clone()),
    };
    let tickets = TicketRenderer::from_font_path(config.ticket_font_path.as_deref())?;

    Ok(ConversationService::new(
        db,
        MessClock::new(config.utc_offset),
        menus,
        tickets,
    ))
}

/// Serve the HTTP API until `shutdown` resolves
pub async fn serve<F>(config: &Config, state: AppState, shutdown: F) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router::routes()
        .layer(build_cors(config)?)
        .with_state(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("HTTP API listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("HTTP API stopped");

    Ok(())
}

/// Run the HTTP API, and the chat bot when a bot token is configured
pub async fn run(config: Config) -> Result<(), Error> {
    let db = connect_to_database(&config).await?;
    let state = AppState {
        db: db.clone(),
        clock: MessClock::new(config.utc_offset),
    };

    match &config.telegram_bot_token {
        Some(token) => {
            let service = build_conversation_service(&config, db)?;
            let telegram_bot = Bot::new(token);

            // One signal stops both the HTTP API and the bot
            let (stop, stopping) = watch::channel(false);
            tokio::spawn(async move {
                shutdown_signal().await;
                stop.send_replace(true);
            });

            tokio::try_join!(
                serve(&config, state, shutdown_requested(stopping.clone())),
                bot::telegram::run(telegram_bot, service, shutdown_requested(stopping))
            )?;
        }
        None => {
            tracing::warn!("TELEGRAM_BOT_TOKEN is not set, only the HTTP API will run");
            serve(&config, state, shutdown_signal()).await?;
        }
    }

    Ok(())
}

/// Resolves once shutdown has been requested, or once the requesting side is gone.
pub async fn shutdown_requested(mut requested: watch::Receiver<bool>) {
    // A closed channel also means shutdown
    let _ = requested.wait_for(|stop| *stop).await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal as unix_signal, SignalKind};

        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to listen for terminate signal: {}", e);
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::watch;

    use super::shutdown_requested;

    /// Expect a single shutdown request to stop both the HTTP API and the bot
    #[tokio::test]
    async fn one_request_stops_every_waiter() {
        let (stop, stopping) = watch::channel(false);
        let api = tokio::spawn(shutdown_requested(stopping.clone()));
        let bot = tokio::spawn(shutdown_requested(stopping));

        tokio::task::yield_now().await;
        assert!(!api.is_finished());
        assert!(!bot.is_finished());

        stop.send_replace(true);

        tokio::time::timeout(Duration::from_secs(1), async {
            api.await.unwrap();
            bot.await.unwrap();
        })
        .await
        .unwrap();
    }

    /// Expect waiters to stop when the signal task is gone
    #[tokio::test]
    async fn closed_channel_stops_waiter() {
        let (stop, stopping) = watch::channel(false);
        drop(stop);

        tokio::time::timeout(Duration::from_secs(1), shutdown_requested(stopping))
            .await
            .unwrap();
    }
}
