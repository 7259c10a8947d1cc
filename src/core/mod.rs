pub mod buildcore;
pub mod error;
pub mod log;
pub mod natord;
pub mod queue;
