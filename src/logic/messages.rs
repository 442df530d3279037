//! Messaging logic
//!
//! Pure functions for conversation bookkeeping and timestamp display.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::api::{Conversation, Message};

/// Relative timestamp for the conversation list, in local time
///
/// Same day shows the clock time, one day back shows "Yesterday", within a
/// week the weekday, and anything older the month and day. Day counts are
/// whole 24-hour periods between `timestamp` and `now`.
pub fn format_conversation_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_conversation_time_in(timestamp, now, &Local)
}

/// `format_conversation_time` with the labels rendered in `tz`
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use nexttui::logic::messages::format_conversation_time_in;
///
/// let now = Utc.with_ymd_and_hms(2023, 11, 20, 12, 0, 0).unwrap();
/// let sent = Utc.with_ymd_and_hms(2023, 11, 10, 14, 30, 0).unwrap();
/// assert_eq!(format_conversation_time_in(sent, now, &Utc), "Nov 10");
/// ```
pub fn format_conversation_time_in<Tz>(timestamp: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let diff_days = (now - timestamp).num_days();
    let local = timestamp.with_timezone(tz);

    if diff_days <= 0 {
        local.format("%H:%M").to_string()
    } else if diff_days == 1 {
        "Yesterday".to_string()
    } else if diff_days < 7 {
        local.format("%a").to_string()
    } else {
        local.format("%b %-d").to_string()
    }
}

/// Clock time of a single message bubble, in local time
pub fn format_message_time(timestamp: DateTime<Utc>) -> String {
    format_message_time_in(timestamp, &Local)
}

pub fn format_message_time_in<Tz>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format("%H:%M").to_string()
}

/// The participant that is not `user_id`
pub fn counterpart<'a>(conversation: &'a Conversation, user_id: &str) -> Option<&'a str> {
    conversation
        .participants
        .iter()
        .map(String::as_str)
        .find(|p| *p != user_id)
}

/// Sum of unread counts across conversations
pub fn total_unread(conversations: &[Conversation]) -> u32 {
    conversations.iter().map(|c| c.unread_count).sum()
}

/// Mark a conversation as read; returns true if anything changed
pub fn mark_read(conversations: &mut [Conversation], conversation_id: &str) -> bool {
    match conversations.iter_mut().find(|c| c.id == conversation_id) {
        Some(conversation) if conversation.unread_count > 0 || !conversation.last_message.read => {
            conversation.unread_count = 0;
            conversation.last_message.read = true;
            true
        }
        _ => false,
    }
}

/// Fold a sent message into the sender's conversation list
///
/// The conversation that already includes the receiver gets the message as
/// its last message and an unread count of 0. Without one, a new conversation
/// titled `title` is appended. Returns the id of the conversation used.
pub fn apply_sent_message(
    conversations: &mut Vec<Conversation>,
    message: &Message,
    title: &str,
) -> String {
    if let Some(existing) = conversations
        .iter_mut()
        .find(|c| c.participants.iter().any(|p| *p == message.receiver_id))
    {
        existing.last_message = message.clone();
        existing.unread_count = 0;
        return existing.id.clone();
    }

    let id = uuid::Uuid::new_v4().to_string();
    conversations.push(Conversation {
        id: id.clone(),
        participants: vec![message.sender_id.clone(), message.receiver_id.clone()],
        title: title.to_string(),
        last_message: message.clone(),
        unread_count: 0,
    });
    id
}

/// Newest conversations first
pub fn sort_by_recent(conversations: &mut [Conversation]) {
    conversations.sort_by(|a, b| b.last_message.timestamp.cmp(&a.last_message.timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 11, day, hour, minute, 0).unwrap()
    }

    fn message(id: &str, from: &str, to: &str, ts: DateTime<Utc>) -> Message {
        Message {
            id: id.to_string(),
            sender_id: from.to_string(),
            receiver_id: to.to_string(),
            content: format!("message {}", id),
            timestamp: ts,
            read: false,
        }
    }

    fn conversation(id: &str, other: &str, unread: u32, ts: DateTime<Utc>) -> Conversation {
        Conversation {
            id: id.to_string(),
            participants: vec!["1".to_string(), other.to_string()],
            title: format!("Contact {}", other),
            last_message: message(&format!("{}-last", id), other, "1", ts),
            unread_count: unread,
        }
    }

    #[test]
    fn test_format_same_day_shows_clock() {
        assert_eq!(format_conversation_time_in(at(13, 16, 45), at(13, 20, 0), &Utc), "16:45");
    }

    #[test]
    fn test_format_yesterday() {
        assert_eq!(format_conversation_time_in(at(12, 9, 15), at(13, 10, 0), &Utc), "Yesterday");
    }

    #[test]
    fn test_format_within_week_shows_weekday() {
        // 2023-11-10 was a Friday
        assert_eq!(format_conversation_time_in(at(10, 14, 30), at(13, 20, 0), &Utc), "Fri");
    }

    #[test]
    fn test_format_older_shows_month_day() {
        assert_eq!(format_conversation_time_in(at(1, 8, 0), at(20, 8, 0), &Utc), "Nov 1");
    }

    #[test]
    fn test_format_future_timestamp_shows_clock() {
        assert_eq!(format_conversation_time_in(at(14, 7, 5), at(13, 7, 0), &Utc), "07:05");
    }

    #[test]
    fn test_list_and_bubble_agree_on_clock_time() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let sent = at(13, 9, 0);

        let listed = format_conversation_time_in(sent, at(13, 9, 30), &plus_two);
        assert_eq!(listed, "11:00");
        assert_eq!(listed, format_message_time_in(sent, &plus_two));
    }

    #[test]
    fn test_weekday_uses_local_date() {
        // 23:30 UTC on Friday the 10th is already Saturday at UTC+2
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let sent = at(10, 23, 30);
        assert_eq!(format_conversation_time_in(sent, at(13, 20, 0), &Utc), "Fri");
        assert_eq!(format_conversation_time_in(sent, at(13, 20, 0), &plus_two), "Sat");
    }

    #[test]
    fn test_counterpart() {
        let c = conversation("a", "3", 0, at(1, 0, 0));
        assert_eq!(counterpart(&c, "1"), Some("3"));
        assert_eq!(counterpart(&c, "3"), Some("1"));
    }

    #[test]
    fn test_total_unread_and_mark_read() {
        let mut list = vec![
            conversation("a", "2", 0, at(1, 0, 0)),
            conversation("b", "3", 2, at(2, 0, 0)),
        ];
        assert_eq!(total_unread(&list), 2);

        assert!(mark_read(&mut list, "b"));
        assert_eq!(total_unread(&list), 0);
        assert!(list[1].last_message.read);

        // Already read
        assert!(!mark_read(&mut list, "b"));
        assert!(!mark_read(&mut list, "missing"));
    }

    #[test]
    fn test_apply_sent_message_to_existing() {
        let mut list = vec![
            conversation("a", "2", 0, at(1, 0, 0)),
            conversation("b", "3", 4, at(2, 0, 0)),
        ];
        let sent = message("new", "1", "3", at(3, 0, 0));

        let id = apply_sent_message(&mut list, &sent, "ignored");
        assert_eq!(id, "b");
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].last_message, sent);
        assert_eq!(list[1].unread_count, 0);
    }

    #[test]
    fn test_apply_sent_message_creates_conversation() {
        let mut list = vec![conversation("a", "2", 0, at(1, 0, 0))];
        let sent = message("new", "1", "7", at(3, 0, 0));

        let id = apply_sent_message(&mut list, &sent, "Contact 7");
        assert_eq!(list.len(), 2);
        let created = &list[1];
        assert_eq!(created.id, id);
        assert_eq!(created.title, "Contact 7");
        assert_eq!(created.participants, vec!["1".to_string(), "7".to_string()]);
        assert_eq!(created.unread_count, 0);
    }

    #[test]
    fn test_sort_by_recent() {
        let mut list = vec![
            conversation("old", "2", 0, at(1, 0, 0)),
            conversation("new", "3", 0, at(5, 0, 0)),
            conversation("mid", "4", 0, at(3, 0, 0)),
        ];
        sort_by_recent(&mut list);
        let ids: Vec<_> = list.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }
}
