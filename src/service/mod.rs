pub mod calendar_service;
pub mod dispatch;
pub mod openai_service;
pub mod reminder_service;
