//! Navigation tree validation errors.
//!
//! All variants are configuration-authoring errors: they are deterministic
//! given the static declaration and can only be fixed by editing it, so
//! there is no retry or partial-configuration mode.

/// Structural violation found in a navigation tree declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Two entries resolve to the same internal document path.
    ///
    /// Uniqueness is global across the whole tree, not per sibling group,
    /// because the generator resolves internal paths against a single flat
    /// namespace.
    #[error("duplicate navigation path \"{path}\": declared by both \"{first}\" and \"{second}\"")]
    DuplicatePath {
        /// The internal path declared twice.
        path: String,
        /// Title of the entry that declared the path first.
        first: String,
        /// Title of the entry that declared it again.
        second: String,
    },

    /// A node has a blank or whitespace-only title.
    #[error("navigation node at {location} has a blank title")]
    EmptyTitle {
        /// The node's path, or a positional description for pathless groups.
        location: String,
    },

    /// A node breaks a structural rule (directory-flagged external link,
    /// or a grouping node with nothing under it).
    #[error("invalid navigation node \"{title}\": {reason}")]
    InvalidNode {
        /// Title of the offending node.
        title: String,
        /// The rule that was violated.
        reason: String,
    },
}
