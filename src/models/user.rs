//! User model

/// The Telegram user who triggered an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: i64,
    pub first_name: Option<String>,
    pub username: Option<String>,
}

impl Sender {
    pub fn new(id: i64, first_name: Option<&str>, username: Option<&str>) -> Self {
        Self {
            id,
            first_name: first_name.map(str::to_string),
            username: username.map(str::to_string),
        }
    }
}

impl From<&teloxide::types::User> for Sender {
    fn from(user: &teloxide::types::User) -> Self {
        Self {
            id: user.id.0 as i64,
            // Telegram always sends a first name, but it may be empty
            first_name: Some(user.first_name.clone()).filter(|name| !name.is_empty()),
            username: user.username.clone(),
        }
    }
}
