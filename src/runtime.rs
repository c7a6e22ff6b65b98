use std::sync::Arc;

use chrono_tz::Tz;
use serenity::model::gateway::GatewayIntents;

use crate::handlers::discord::BotHandler;
use crate::service::openai_service::{CompletionClient, OpenAIService};
use crate::tasks::health_server;

/// Starts the health responder and the Discord listener; the two tasks share
/// nothing beyond the process lifetime.
pub async fn run_api(
    discord_client_secret: String,
    openai_api_key: String,
    timezone: Tz,
    health_port: u16,
) {
    tokio::spawn(async move {
        health_server::run_health_server(health_port).await;
    });

    let completion: Arc<dyn CompletionClient> = Arc::new(OpenAIService::new(openai_api_key));

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;
    let mut client = serenity::Client::builder(discord_client_secret, intents)
        .event_handler(BotHandler::new(completion, timezone))
        .await
        .expect("Error creating Serenity client");

    if let Err(why) = client.start().await {
        log::error!("Client error: {:?}", why);
    }
}
