use chrono::NaiveDate;
use serenity::builder::{CreateActionRow, CreateButton};

use crate::service::calendar_service::calendar_context;
use crate::service::openai_service::CompletionClient;

pub const REMINDER_SEPARATOR: &str = "---";

/// System instruction for the completion service: the calendar context plus
/// the formatting rules and worked examples the model must follow.
pub fn build_system_prompt(today: NaiveDate) -> String {
    let calendar = calendar_context(today);
    format!(
        "You are a helpful assistant that parses and polishes reminder messages.\n\
         \n\
         {calendar}\n\
         Your task:\n\
         1. Parse the user's vague reminder message\n\
         2. Split it into separate tasks if there are multiple tasks mentioned\n\
         3. Polish each task to be clear and concise\n\
         4. If a date or time is mentioned (like \"tomorrow\", \"next Tuesday\", \"by April 15\"), convert it to the actual date using the calendar above\n\
         5. If the message mentions a deadline or says \"by [date]\", include \"do by\" before the date\n\
         6. Format each reminder as:\n   \
         - If date is mentioned: \"Task description\\n\\nDate\" (task, blank line, date)\n   \
         - If no date: just \"Task description\"\n\
         \n\
         Return ONLY the polished reminders separated by \"---\". Do not add any explanations or extra text.\n\
         \n\
         Examples:\n\
         Input: \"STUDY FOR EXAM TOMORROW\"\n\
         Output: Study for exam\n\
         \n\
         January 9, 2026\n\
         \n\
         Input: \"Order the meds, make tax report by April 15\"\n\
         Output: Order the meds\n\
         ---\n\
         Make tax report\n\
         \n\
         do by April 15, 2026\n\
         \n\
         Input: \"Call mom on Tuesday next week and buy groceries\"\n\
         Output: Call mom\n\
         \n\
         January 14, 2026\n\
         ---\n\
         Buy groceries"
    )
}

/// Splits the model's reply on the separator, trimming each segment and
/// dropping empty ones. Order is preserved.
pub fn split_reminders(blob: &str) -> Vec<String> {
    blob.split(REMINDER_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turns one raw user message into an ordered list of polished reminders.
/// Any completion failure degrades to the original text as a single item;
/// no retries are attempted.
pub async fn parse_and_polish(
    completion: &dyn CompletionClient,
    user_message: &str,
    today: NaiveDate,
) -> Vec<String> {
    let system_prompt = build_system_prompt(today);
    match completion.complete(&system_prompt, user_message).await {
        Ok(blob) => split_reminders(&blob),
        Err(err) => {
            log::error!("Error parsing message with OpenAI: {}", err);
            vec![user_message.to_string()]
        }
    }
}

pub fn reminder_buttons() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new("reminder_done")
            .label("✅ Done")
            .style(serenity::all::ButtonStyle::Success),
        CreateButton::new("reminder_cancel")
            .label("❌ Cancel")
            .style(serenity::all::ButtonStyle::Danger),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_empty_segments_and_keeps_order() {
        let blob = "Buy milk\n---\n\nCall mom\n\nJanuary 14, 2026\n---\n   \n---Pay rent";
        let reminders = split_reminders(blob);
        assert_eq!(
            reminders,
            vec![
                "Buy milk".to_string(),
                "Call mom\n\nJanuary 14, 2026".to_string(),
                "Pay rent".to_string(),
            ]
        );
    }

    #[test]
    fn split_of_blank_blob_is_empty() {
        assert!(split_reminders("").is_empty());
        assert!(split_reminders("  \n--- \n---").is_empty());
    }

    #[test]
    fn system_prompt_embeds_calendar_and_separator_rule() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
        let prompt = build_system_prompt(today);
        assert!(prompt.contains("Current date: Wednesday, January 14, 2026"));
        assert!(prompt.contains("Previous week:"));
        assert!(prompt.contains("Next week:"));
        assert!(prompt.contains("separated by \"---\""));
        assert!(prompt.contains("include \"do by\" before the date"));
    }

    #[test]
    fn buttons_carry_done_and_cancel_ids() {
        let row = reminder_buttons();
        let debug = format!("{:?}", row);
        assert!(debug.contains("reminder_done"));
        assert!(debug.contains("reminder_cancel"));
    }
}
