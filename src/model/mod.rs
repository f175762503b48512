pub mod classified;
pub mod directory;
pub mod leave;
pub mod page;
pub mod punch;
pub mod schedule;
