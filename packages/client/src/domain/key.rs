//! Key signals delivered by the front end.

/// A key press observed on the query input.
///
/// The terminal front end edits lines with rustyline and only signals
/// `Enter`; `Other` stands for every key a richer input widget forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Submits the current query
    Enter,
    Other,
}
