//! Core types for govcal: UK public-holiday calendars read from
//! static per-topic JSON documents.
//!
//! A [`Repository`] loads one topic document and groups its entries
//! into per-division, per-year [`Calendar`]s; each division also gets
//! a merged calendar spanning every known year. Calendars answer
//! "what's the next event" (and whether bunting goes up today) and
//! export to iCalendar text via [`ics::generate_ics`].

pub mod calendar;
pub mod config;
pub mod data_dir;
pub mod division;
pub mod error;
pub mod event;
pub mod ics;
pub mod repository;

pub use calendar::{Calendar, DivisionCalendars};
pub use error::{CalendarError, CalendarResult};
pub use event::Event;
pub use repository::Repository;
