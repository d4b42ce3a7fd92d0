#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A blocking modal message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub text: String,
}

impl Notification {
    pub fn success(title: &str, text: &str) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.to_string(),
            text: text.to_string(),
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: "Error".to_string(),
            text: text.to_string(),
        }
    }
}

/// Modal surface of the page: notifications and yes/no confirmations.
///
/// Both calls block the page until the user answers.
pub trait Dialogs {
    fn notify(&mut self, notification: Notification);

    fn confirm(&mut self, message: &str) -> bool;
}
