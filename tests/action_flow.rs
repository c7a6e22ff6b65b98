use std::sync::Mutex;

use reminderRelay::service::dispatch::{is_reminder_action, resolve_reminder, ReminderAction};

#[derive(Default)]
struct FakeAction {
    acknowledgements: Mutex<u32>,
    deletions: Mutex<u32>,
    fail_delete: bool,
}

impl FakeAction {
    fn failing_delete() -> Self {
        Self {
            fail_delete: true,
            ..Self::default()
        }
    }
}

#[serenity::async_trait]
impl ReminderAction for FakeAction {
    async fn acknowledge(&self) {
        *self.acknowledgements.lock().unwrap() += 1;
    }

    async fn delete_message(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        *self.deletions.lock().unwrap() += 1;
        if self.fail_delete {
            return Err("message already gone".to_string().into());
        }
        Ok(())
    }
}

#[tokio::test]
async fn done_and_cancel_resolve_identically() {
    for custom_id in ["reminder_done", "reminder_cancel"] {
        assert!(is_reminder_action(custom_id));

        let action = FakeAction::default();
        resolve_reminder(&action).await;

        assert_eq!(*action.acknowledgements.lock().unwrap(), 1);
        assert_eq!(*action.deletions.lock().unwrap(), 1);
    }
}

#[tokio::test]
async fn deletion_failure_is_swallowed_without_retry() {
    let action = FakeAction::failing_delete();
    resolve_reminder(&action).await;

    assert_eq!(*action.acknowledgements.lock().unwrap(), 1);
    assert_eq!(*action.deletions.lock().unwrap(), 1);
}

#[tokio::test]
async fn unrelated_component_ids_are_ignored() {
    assert!(!is_reminder_action("pending_confirm"));
    assert!(!is_reminder_action(""));
}
