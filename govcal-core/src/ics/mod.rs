//! iCalendar export.

mod generate;

pub use generate::generate_ics;
