//! Bounded conversation window tests

use proptest::prelude::*;
use shared::{ConversationWindow, Speaker};

#[test]
fn test_history_alternates_user_and_assistant() {
    let mut window = ConversationWindow::new(5);
    window.push_exchange("how do stepwells work", "they store monsoon runoff");
    window.push_exchange("do they still matter", "yes, paired with drip systems");

    let turns = window.to_vec();
    assert_eq!(turns.len(), 4);
    for (i, turn) in turns.iter().enumerate() {
        let expected = if i % 2 == 0 {
            Speaker::User
        } else {
            Speaker::Assistant
        };
        assert_eq!(turn.speaker, expected, "turn {}", i);
    }
}

#[test]
fn test_window_keeps_only_the_most_recent_exchanges() {
    let mut window = ConversationWindow::new(3);
    for i in 0..10 {
        window.push_exchange(format!("question {}", i), format!("answer {}", i));
    }

    let turns = window.to_vec();
    assert_eq!(turns.len(), 6);
    assert_eq!(turns[0].text, "question 7");
    assert_eq!(turns[5].text, "answer 9");
}

#[test]
fn test_clear_empties_the_window() {
    let mut window = ConversationWindow::new(3);
    window.push_exchange("hello", "hi");
    window.clear();
    assert!(window.is_empty());
}

proptest! {
    /// The window never holds more turns than its capacity allows,
    /// regardless of how many exchanges are pushed.
    #[test]
    fn prop_window_is_bounded(capacity in 0usize..20, exchanges in 0usize..100) {
        let mut window = ConversationWindow::new(capacity);
        for i in 0..exchanges {
            window.push_exchange(format!("q{}", i), format!("a{}", i));
        }
        prop_assert!(window.len() <= capacity * 2);
    }

    /// After enough exchanges the window holds exactly the last
    /// `capacity` of them, oldest first.
    #[test]
    fn prop_window_keeps_most_recent(capacity in 1usize..10, extra in 0usize..20) {
        let total = capacity + extra;
        let mut window = ConversationWindow::new(capacity);
        for i in 0..total {
            window.push_exchange(format!("q{}", i), format!("a{}", i));
        }

        let turns = window.to_vec();
        prop_assert_eq!(turns.len(), capacity * 2);
        let first_kept = total - capacity;
        prop_assert_eq!(turns[0].text.clone(), format!("q{}", first_kept));
        prop_assert_eq!(
            turns[turns.len() - 1].text.clone(),
            format!("a{}", total - 1)
        );
    }
}
