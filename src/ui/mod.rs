//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer turns the caller's feed state and the retained animation state
//! into cells on the terminal.  Time never advances here; callers tick.

pub mod feed_header;
pub mod layout;
pub mod photos_tab;
pub mod theme;
