//! Review suggestions built from single-violation repair diffs.
//!
//! Each hunk of a repair becomes one [`PatchSuggestion`]: an old-side line
//! span plus the literal text to put there, formatted as a `suggestion`
//! block. Review hosts can only replace existing lines, so a pure insertion
//! re-includes its anchor line.

mod builder;
mod message;
mod source;


pub use builder::{PatchSuggestion, SuggestionError, build_suggestion, suggestions_for_repair};
pub use message::{MessageTemplate, render_review_message};
pub use source::{IndexFiles, LineSource, WorktreeFiles};
