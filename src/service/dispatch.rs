use serenity::async_trait;

#[async_trait]
pub trait ReminderSender: Send + Sync {
    async fn send_reminder(
        &self,
        text: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

#[async_trait]
pub trait ReminderAction: Send + Sync {
    async fn acknowledge(&self);
    async fn delete_message(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Resolves a pressed reminder button: acknowledge the interaction, then
/// delete the message that carried it. Done and Cancel resolve identically.
/// A failed deletion is logged and swallowed, never retried.
pub async fn resolve_reminder(action: &dyn ReminderAction) {
    action.acknowledge().await;
    if let Err(err) = action.delete_message().await {
        log::error!("Error deleting message after button press: {}", err);
    }
}

pub fn is_reminder_action(custom_id: &str) -> bool {
    matches!(custom_id, "reminder_done" | "reminder_cancel")
}

/// Sends one interactive message per reminder, in order. A failed send is
/// logged and does not stop the rest of the batch.
pub async fn dispatch_reminders(sender: &dyn ReminderSender, reminders: &[String]) {
    for reminder in reminders {
        if let Err(err) = sender.send_reminder(reminder).await {
            log::error!("Failed to send reminder message: {}", err);
        }
    }
}
