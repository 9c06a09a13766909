pub mod entry;
pub mod error;
pub mod outcome;
pub mod state;
pub mod submission;
