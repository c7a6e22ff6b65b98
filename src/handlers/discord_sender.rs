use serenity::all::ComponentInteraction;
use serenity::async_trait;
use serenity::builder::{CreateInteractionResponse, CreateMessage};
use serenity::http::Http;
use serenity::model::id::ChannelId;
use serenity::prelude::Context;

use crate::service::dispatch::{ReminderAction, ReminderSender};
use crate::service::reminder_service::reminder_buttons;

/// Sends reminders into a Discord channel as messages carrying the
/// Done/Cancel button row.
pub struct SerenitySender<'a> {
    http: &'a Http,
    channel_id: ChannelId,
}

impl<'a> SerenitySender<'a> {
    pub fn new(http: &'a Http, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl ReminderSender for SerenitySender<'_> {
    async fn send_reminder(
        &self,
        text: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.channel_id
            .send_message(
                self.http,
                CreateMessage::new()
                    .content(text)
                    .components(vec![reminder_buttons()]),
            )
            .await?;
        Ok(())
    }
}

/// Resolves a button press against the Discord component interaction that
/// delivered it.
pub struct SerenityAction<'a> {
    ctx: &'a Context,
    component: &'a ComponentInteraction,
}

impl<'a> SerenityAction<'a> {
    pub fn new(ctx: &'a Context, component: &'a ComponentInteraction) -> Self {
        Self { ctx, component }
    }
}

#[async_trait]
impl ReminderAction for SerenityAction<'_> {
    async fn acknowledge(&self) {
        let _ = self
            .component
            .create_response(&self.ctx.http, CreateInteractionResponse::Acknowledge)
            .await;
    }

    async fn delete_message(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.component.message.delete(&self.ctx.http).await?;
        Ok(())
    }
}
