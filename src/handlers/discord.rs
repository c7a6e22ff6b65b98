use chrono::Utc;
use chrono_tz::Tz;
use serenity::all::{Command, Interaction as DiscordInteraction};
use serenity::async_trait;
use serenity::builder::{
    CreateCommand,
    CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use crate::handlers::discord_sender::{SerenityAction, SerenitySender};
use crate::service::dispatch::{dispatch_reminders, is_reminder_action, resolve_reminder};
use crate::service::openai_service::CompletionClient;
use crate::service::reminder_service::parse_and_polish;

const USAGE_MESSAGE: &str = "Welcome to Reminder Bot!\n\n\
    Send me your reminders and I'll organize them for you.\n\
    Example: 'STUDY FOR EXAM TOMORROW' or 'Order meds, pay bills by Friday'\n\n\
    I'll clean up your message and send back organized reminders with Done/Cancel buttons.";

pub struct BotHandler {
    completion: Arc<dyn CompletionClient>,
    timezone: Tz,
}

impl BotHandler {
    pub fn new(completion: Arc<dyn CompletionClient>, timezone: Tz) -> Self {
        BotHandler {
            completion,
            timezone,
        }
    }

    async fn handle_start(&self, ctx: &Context, command: serenity::all::CommandInteraction) {
        let _ = command
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new().content(USAGE_MESSAGE),
                ),
            )
            .await;
    }

    async fn handle_reminder_action(
        &self,
        ctx: &Context,
        component: serenity::all::ComponentInteraction,
    ) {
        let action = SerenityAction::new(ctx, &component);
        resolve_reminder(&action).await;
    }
}

#[async_trait]
impl EventHandler for BotHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        log::info!("{} is connected!", ready.user.name);

        let builder = CreateCommand::new("start").description("Show what this bot does");
        let _ = Command::create_global_command(&ctx.http, builder).await;
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        // Passed through untrimmed so the completion-failure fallback echoes
        // the message byte for byte.
        let user_message = msg.content.clone();
        if user_message.trim().is_empty() || user_message.starts_with('/') {
            return;
        }

        // The polished reminders replace the raw message.
        if let Err(err) = msg.delete(&ctx.http).await {
            log::error!("Error deleting message: {}", err);
        }

        let today = Utc::now().with_timezone(&self.timezone).date_naive();
        let reminders = parse_and_polish(self.completion.as_ref(), &user_message, today).await;

        let sender = SerenitySender::new(&ctx.http, msg.channel_id);
        dispatch_reminders(&sender, &reminders).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: DiscordInteraction) {
        match interaction {
            DiscordInteraction::Command(command) => {
                if command.data.name.as_str() == "start" {
                    self.handle_start(&ctx, command).await;
                }
            }
            DiscordInteraction::Component(component) => {
                // Both actions only remove the displayed reminder.
                if is_reminder_action(&component.data.custom_id) {
                    self.handle_reminder_action(&ctx, component).await;
                }
            }
            _ => {}
        }
    }
}
