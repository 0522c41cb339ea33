use serenity::all::{CreateAllowedMentions, CreateInteractionResponseMessage};

/// A response message to a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    /// Only visible to the invoking member.
    pub ephemeral: bool,
    /// Whether mentions in `content` notify the mentioned members.
    pub pings: bool,
}

impl Reply {
    /// A public reply whose mentions notify.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
            pings: true,
        }
    }

    /// A reply only the invoking member sees.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            ephemeral: true,
            ..Self::new(content)
        }
    }

    /// Keeps mentions in the content from notifying anyone.
    pub fn without_pings(mut self) -> Self {
        self.pings = false;
        self
    }

    pub fn into_message(self) -> CreateInteractionResponseMessage {
        let message = CreateInteractionResponseMessage::new()
            .content(self.content)
            .ephemeral(self.ephemeral);

        if self.pings {
            message
        } else {
            message.allowed_mentions(CreateAllowedMentions::new())
        }
    }
}
