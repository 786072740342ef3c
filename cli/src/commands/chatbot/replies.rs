//! # Chatbot Keyword Replies
//!
//! File: cli/src/commands/chatbot/replies.rs
//!
//! ## Overview
//!
//! The chatbot's entire "intelligence": an ordered table of
//! keyword → reply pairs. A message is lower-cased and the first keyword
//! found anywhere in it selects the reply, so table order settles messages
//! that mention more than one keyword.
//!
use tracing::debug;

/// Reply used when no keyword matches.
pub const FALLBACK_REPLY: &str =
    "Hmm, I’m not sure. Try asking about the volcano, boat, maze, or food!";

/// Ordered keyword → reply pairs. First substring match wins.
#[derive(Debug)]
pub struct KeywordReplyTable {
    entries: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

/// The island guide's replies, in match order.
pub static ISLAND_REPLIES: KeywordReplyTable = KeywordReplyTable::new(
    &[
        ("hello", "Hey there! I'm Finn — need help finding a ride?"),
        (
            "volcano",
            "Ashen Secrets is that way! Follow the lava flow north.",
        ),
        (
            "boat",
            "Ahoy! The Pirate Ship sails south of the resort bridge.",
        ),
        (
            "maze",
            "The Maze of Whispers is hidden past the stone archway.",
        ),
        ("resort", "Tiki Resort is just beyond the glowing portals!"),
        (
            "map",
            "You can find the full Mystery Island map on the homepage.",
        ),
        (
            "food",
            "Try the Jungle Café near the central hut for some snacks!",
        ),
    ],
    FALLBACK_REPLY,
);

impl KeywordReplyTable {
    /// Keywords must be lower-case; messages are lower-cased before matching.
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        fallback: &'static str,
    ) -> Self {
        Self { entries, fallback }
    }

    /// Returns the first `(keyword, reply)` whose keyword occurs in `message`,
    /// ignoring case.
    pub fn find_match(&self, message: &str) -> Option<(&'static str, &'static str)> {
        let lowered = message.to_lowercase();
        self.entries
            .iter()
            .copied()
            .find(|(keyword, _)| lowered.contains(keyword))
    }

    /// The reply for `message`, or the fallback reply.
    pub fn reply_for(&self, message: &str) -> &'static str {
        match self.find_match(message) {
            Some((keyword, reply)) => {
                debug!("Matched keyword '{}'", keyword);
                reply
            }
            None => {
                debug!("No keyword matched, using fallback reply");
                self.fallback
            }
        }
    }

    /// Keywords in match order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> {
        let entries: &'static [(&'static str, &'static str)] = self.entries;
        entries.iter().map(|(keyword, _)| *keyword)
    }
}
