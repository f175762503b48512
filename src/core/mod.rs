pub mod calendar;
pub mod classify;
pub mod filter;
pub mod schedule;
pub mod tz;
