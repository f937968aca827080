//! Rule tables for the variants that synthesize their own messages.
//!
//! Tables are built on first use and shared read-only afterwards. Rules
//! are listed most specific first; when none applies the constructing
//! kind's default message is used, which is how `AbortedException` keeps
//! its own wording while reusing the interrupt table.

pub mod decorator;
pub mod external;
pub mod index;
pub mod interrupt;
pub mod iteration;
pub mod not_implemented;
pub mod timeout;
