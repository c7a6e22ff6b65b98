#![allow(non_snake_case)]

use std::env;

use chrono_tz::Tz;
use reminderRelay::config::AppConfig;
use reminderRelay::runtime;
use reminderRelay::tasks::health_server::DEFAULT_HEALTH_PORT;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let get_prop = |key: &str| -> Option<String> {
        config.get(key).or_else(|| env::var(key).ok())
    };

    let discord_client_secret = get_prop("DISCORD_CLIENT_SECRET")
        .expect("DISCORD_CLIENT_SECRET environment variable not set");
    let openai_api_key = get_prop("OPENAI_API_KEY")
        .expect("OPENAI_API_KEY environment variable not set");
    let timezone: Tz = get_prop("BOT_TIMEZONE")
        .map(|name| name.parse().expect("BOT_TIMEZONE is not a valid IANA timezone"))
        .unwrap_or(Tz::UTC);
    let health_port: u16 = get_prop("HEALTH_PORT")
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_HEALTH_PORT);

    runtime::run_api(discord_client_secret, openai_api_key, timezone, health_port).await;
}
