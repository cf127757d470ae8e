//! Outcome types and the canned messages shared by every target.

pub mod messages;
pub mod outcome;
