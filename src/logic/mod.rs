//! Pure decision logic
//!
//! No I/O and no side effects live here. The resolver translates a complete
//! choice set into recommendation text using a rule table.

pub mod resolver;
