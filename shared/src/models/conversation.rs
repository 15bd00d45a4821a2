//! Conversation history types for the voice assistant

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Who produced a conversation turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

/// One turn of the conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// A bounded sliding window of recent conversation exchanges
///
/// Capacity counts exchanges (user turn + assistant turn). When the window
/// is full, the oldest exchange is evicted as a pair so the history always
/// alternates user/assistant starting from a user turn.
#[derive(Debug, Clone)]
pub struct ConversationWindow {
    turns: VecDeque<ConversationTurn>,
    capacity: usize,
}

impl ConversationWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(capacity * 2),
            capacity,
        }
    }

    /// Record one user/assistant exchange, evicting the oldest if full
    pub fn push_exchange(&mut self, user_text: impl Into<String>, assistant_text: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        while self.turns.len() >= self.capacity * 2 {
            self.turns.pop_front();
            self.turns.pop_front();
        }
        self.turns.push_back(ConversationTurn::user(user_text));
        self.turns.push_back(ConversationTurn::assistant(assistant_text));
    }

    pub fn turns(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }

    pub fn to_vec(&self) -> Vec<ConversationTurn> {
        self.turns.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_evicts_oldest_exchange() {
        let mut window = ConversationWindow::new(2);
        window.push_exchange("one", "reply one");
        window.push_exchange("two", "reply two");
        window.push_exchange("three", "reply three");

        assert_eq!(window.len(), 4);
        let turns = window.to_vec();
        assert_eq!(turns[0].text, "two");
        assert_eq!(turns[3].text, "reply three");
    }

    #[test]
    fn test_window_alternates_speakers() {
        let mut window = ConversationWindow::new(3);
        window.push_exchange("hello", "hi there");
        window.push_exchange("how much water", "about 14 liters");

        for (i, turn) in window.turns().enumerate() {
            let expected = if i % 2 == 0 {
                Speaker::User
            } else {
                Speaker::Assistant
            };
            assert_eq!(turn.speaker, expected);
        }
    }

    #[test]
    fn test_zero_capacity_window_stays_empty() {
        let mut window = ConversationWindow::new(0);
        window.push_exchange("hello", "hi");
        assert!(window.is_empty());
    }
}
