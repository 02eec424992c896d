pub mod config;
pub mod divisions;
pub mod ics;
pub mod next;
pub mod show;
pub mod topics;
