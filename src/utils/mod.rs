//! Process, git and naming helpers.

pub mod command;
pub mod git;
pub mod random;
