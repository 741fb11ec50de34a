//! Communications: chat messages, social media posts, and emails.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::impl_document;
use crate::{DocResult, DocType, Document, Meta};

/// An instant message from a chat service (Discord, Telegram, IRC, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(default)]
    pub content: String,
    /// Platform domain, e.g. "discord.gg".
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub is_reply: bool,
    #[serde(default)]
    pub media: Vec<String>,
    /// The platform's own message identifier.
    #[serde(default)]
    pub message_id: String,
    #[serde(default)]
    pub reply_to: String,
    /// Server or group name.
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub mentions: Vec<String>,
}

impl Message {
    /// Creates an unidentified message.
    pub fn new(
        platform: impl Into<String>,
        user: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            user: user.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Marks this message as a reply to `message_id`.
    pub fn mark_reply(&mut self, message_id: impl Into<String>) {
        self.is_reply = true;
        self.reply_to = message_id.into();
    }
}

impl Default for Message {
    fn default() -> Self {
        Self {
            meta: Meta::new(DocType::Message),
            content: String::new(),
            platform: String::new(),
            user: String::new(),
            is_reply: false,
            media: Vec::new(),
            message_id: String::new(),
            reply_to: String::new(),
            group: String::new(),
            channel: String::new(),
            mentions: Vec::new(),
        }
    }
}

impl_document!(Message, DocType::Message, []);

/// A post on a public social platform (Reddit, Mastodon, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaPost {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub replies: Vec<Value>,
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default)]
    pub reply_count: i64,
    #[serde(default)]
    pub repost_count: i64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub reply_to: String,
}

impl SocialMediaPost {
    /// Creates an unidentified post.
    pub fn new(user: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            content: content.into(),
            ..Self::default()
        }
    }
}

impl Default for SocialMediaPost {
    fn default() -> Self {
        Self {
            meta: Meta::new(DocType::SocialMediaPost),
            content: String::new(),
            user: String::new(),
            replies: Vec::new(),
            media: Vec::new(),
            reply_count: 0,
            repost_count: 0,
            url: String::new(),
            links: Vec::new(),
            tags: Vec::new(),
            title: String::new(),
            group: String::new(),
            reply_to: String::new(),
        }
    }
}

impl_document!(SocialMediaPost, DocType::SocialMediaPost, []);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub subject: String,
    #[serde(rename = "to", default)]
    pub recipient: String,
    #[serde(rename = "from", default)]
    pub sender: String,
    /// Raw header block.
    #[serde(default)]
    pub headers: String,
    #[serde(default)]
    pub cc: Vec<String>,
    #[serde(default)]
    pub bcc: Vec<String>,
}

impl EmailMessage {
    /// Creates an unidentified email message.
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
            ..Self::default()
        }
    }
}

impl Default for EmailMessage {
    fn default() -> Self {
        Self {
            meta: Meta::new(DocType::EmailMessage),
            body: String::new(),
            subject: String::new(),
            recipient: String::new(),
            sender: String::new(),
            headers: String::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
        }
    }
}

impl_document!(EmailMessage, DocType::EmailMessage, []);

/// Creates a finalized [`Message`] in `dataset`, identified by its content and origin.
pub fn new_message(
    dataset: impl Into<String>,
    platform: impl Into<String>,
    user: impl Into<String>,
    content: impl Into<String>,
) -> DocResult<Message> {
    Message::new(platform, user, content).finalized(dataset)
}

/// Creates a finalized [`SocialMediaPost`] in `dataset`.
pub fn new_social_media_post(
    dataset: impl Into<String>,
    user: impl Into<String>,
    content: impl Into<String>,
) -> DocResult<SocialMediaPost> {
    SocialMediaPost::new(user, content).finalized(dataset)
}

/// Creates a finalized [`EmailMessage`] in `dataset`, identified by body, parties, and subject.
pub fn new_email_message(
    dataset: impl Into<String>,
    sender: impl Into<String>,
    recipient: impl Into<String>,
    subject: impl Into<String>,
    body: impl Into<String>,
) -> DocResult<EmailMessage> {
    EmailMessage::new(sender, recipient, subject, body).finalized(dataset)
}
