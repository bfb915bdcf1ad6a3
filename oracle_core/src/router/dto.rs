/// Inbound chat message as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMessage {
    pub text: String,
    pub user: String,
    pub timestamp: i64,
}

impl BotMessage {
    pub fn new(text: impl Into<String>, user: impl Into<String>, timestamp: i64) -> Self {
        Self {
            text: text.into(),
            user: user.into(),
            timestamp,
        }
    }
}
