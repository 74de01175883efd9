pub mod message;
pub mod reminder;

pub use message::{format_digest, format_elapsed};
pub use reminder::{HipChatReminder, HipChatSettings, HIPCHAT_URL, NOTIFICATION_FROM};
