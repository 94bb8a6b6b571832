//! SQL dump parsing: statement location, literal-list scanning, extraction.
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Individual record failures**: Records with too few fields are logged to stderr
//!   and skipped, so a single corrupted row never breaks the whole conversion.
//!
//! - **Field coercion failures**: Numeric fields that fail to parse default to zero.
//!   Lightly-corrupted dumps still convert; the affected value is visible as 0.
//!
//! - **Boundary safety**: Statement boundaries are found with quote tracking, so
//!   `;` or `);` bytes inside field values never terminate a statement early, and
//!   the post-table scanner resynchronizes on `(<integer>,` record anchors.
//!
//! - **No fatal conditions**: Nothing in this module returns an error for malformed
//!   input. File-level I/O is the caller's responsibility.

pub mod dump;
pub mod statements;
pub mod values;

pub use dump::{extract_attachments, extract_forums, extract_posts, parse_dump};
pub use statements::statement_values;
pub use values::{parse_values, parse_values_anchored};
