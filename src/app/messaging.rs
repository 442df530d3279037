//! Conversations, threads and sending

use nexttui::logic::messages::counterpart;
use nexttui::services::{ApiRequest, Priority};

use crate::App;

impl App {
    pub fn request_conversations(&mut self, priority: Priority, force: bool) {
        let Some(user_id) = self.model.session.user_id().map(str::to_string) else {
            return;
        };
        let messages = &mut self.model.messages;
        if messages.loading || (messages.loaded && !force) {
            return;
        }
        messages.loading = true;
        self.send_request(ApiRequest::FetchConversations { user_id, priority });
    }

    pub fn open_selected_conversation(&mut self) {
        if let Some(conversation_id) = self.model.messages.open_selected() {
            tracing::debug!("Opening conversation {}", conversation_id);
            self.send_request(ApiRequest::FetchMessages { conversation_id });
        }
    }

    pub fn close_thread(&mut self) {
        self.model.messages.close_thread();
        self.model.ui.composing = false;
    }

    /// Send the draft to the other side of the open conversation
    pub fn send_draft(&mut self) {
        let content = self.model.messages.draft.trim().to_string();
        if content.is_empty() || self.model.messages.sending {
            return;
        }
        let Some(sender_id) = self.model.session.user_id().map(str::to_string) else {
            return;
        };
        let Some(conversation) = self.model.messages.open_conversation() else {
            return;
        };
        let Some(receiver_id) = counterpart(conversation, &sender_id).map(str::to_string) else {
            tracing::warn!("Conversation {} has no counterpart", conversation.id);
            return;
        };
        let title = conversation.title.clone();

        self.model.messages.sending = true;
        self.model.messages.draft.clear();
        self.send_request(ApiRequest::SendMessage {
            sender_id,
            receiver_id,
            content,
            title,
        });
    }
}
