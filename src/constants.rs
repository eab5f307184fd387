//! Application-wide constants.
//!
//! Markers and labels shared between the resolver, the cleanup engine and output.

/// Value of the first reference field for the checked-out branch.
pub const CURRENT_MARKER: &str = "*";

/// Separator between the fields of one reference line.
pub const FIELD_SEPARATOR: char = '\t';

/// Fields per reference line: marker, name, author, upstream, date.
pub const REF_FIELD_COUNT: usize = 5;

/// Diagnostic git prints when a safe delete refuses an unmerged branch.
pub const UNMERGED_HINT: &str = "If you are sure you want to delete it, run 'git branch -D";

/// Remote column label for branches that live in the local repository.
pub const LOCAL_LABEL: &str = "local";

/// Upstream column label for a branch whose upstream has disappeared.
pub const DEAD_LABEL: &str = "DEAD";

pub const UPSTREAM_ARROW: &str = "=>";
