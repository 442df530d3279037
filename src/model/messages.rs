//! Messages Model
//!
//! Conversation list, the open thread and the draft being typed.

use crate::api::{Conversation, Message};
use crate::logic::messages::{mark_read, sort_by_recent, total_unread};
use crate::logic::navigation::clamp_selection;

/// Thread currently shown
#[derive(Clone, Debug, PartialEq)]
pub struct OpenThread {
    pub conversation_id: String,
    pub messages: Vec<Message>,
    pub loading: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessagesModel {
    pub conversations: Vec<Conversation>,
    pub selected: Option<usize>,
    pub thread: Option<OpenThread>,
    pub draft: String,
    pub sending: bool,
    pub loading: bool,
    pub loaded: bool,
}

impl MessagesModel {
    pub fn load(&mut self, mut conversations: Vec<Conversation>) {
        sort_by_recent(&mut conversations);
        self.selected = clamp_selection(self.selected, conversations.len());
        self.conversations = conversations;
        self.loading = false;
        self.loaded = true;
    }

    pub fn total_unread(&self) -> u32 {
        total_unread(&self.conversations)
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.selected.and_then(|i| self.conversations.get(i))
    }

    pub fn open_conversation(&self) -> Option<&Conversation> {
        let thread = self.thread.as_ref()?;
        self.conversations
            .iter()
            .find(|c| c.id == thread.conversation_id)
    }

    /// Open the selected conversation and mark it read locally
    ///
    /// Returns the id whose messages should be fetched.
    pub fn open_selected(&mut self) -> Option<String> {
        let id = self.selected_conversation()?.id.clone();
        mark_read(&mut self.conversations, &id);
        self.thread = Some(OpenThread {
            conversation_id: id.clone(),
            messages: Vec::new(),
            loading: true,
        });
        self.draft.clear();
        Some(id)
    }

    pub fn close_thread(&mut self) {
        self.thread = None;
        self.draft.clear();
    }

    /// Messages arrived for a conversation; ignored unless it is still open
    pub fn load_thread(&mut self, conversation_id: &str, messages: Vec<Message>) {
        if let Some(thread) = self.thread.as_mut() {
            if thread.conversation_id == conversation_id {
                thread.messages = messages;
                thread.loading = false;
            }
        }
    }

    /// A sent message came back from the gateway
    pub fn record_sent(&mut self, conversation_id: &str, message: Message, title: &str) {
        self.sending = false;

        match self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
        {
            Some(conversation) => {
                conversation.last_message = message.clone();
                conversation.unread_count = 0;
            }
            None => self.conversations.push(Conversation {
                id: conversation_id.to_string(),
                participants: vec![message.sender_id.clone(), message.receiver_id.clone()],
                title: title.to_string(),
                last_message: message.clone(),
                unread_count: 0,
            }),
        }

        if let Some(thread) = self.thread.as_mut() {
            if thread.conversation_id == conversation_id
                && !thread.messages.iter().any(|m| m.id == message.id)
            {
                thread.messages.push(message);
            }
        }
    }
}
