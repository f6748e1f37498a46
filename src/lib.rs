//! A counter with observers and a snapshot-taking "Is this prime?" dialog,
//! presented as a terminal UI.

pub mod config;
pub mod counter;
pub mod error;
pub mod logging;
pub mod prime;
pub mod ui;
