pub mod discord;
pub mod discord_sender;
