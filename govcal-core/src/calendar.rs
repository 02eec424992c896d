//! Calendars grouped out of the topic documents.

use std::collections::BTreeMap;

use chrono::{Duration, Local, NaiveDate};
use serde::Serialize;

use crate::error::{CalendarError, CalendarResult};
use crate::event::Event;

/// An ordered sequence of events for one division.
///
/// `year` is `None` for a merged calendar spanning every known year.
/// Events stay in source-document order; nothing here re-sorts them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calendar {
    pub division: Option<String>,
    pub year: Option<String>,
    pub events: Vec<Event>,
}

/// One division's calendars: per-year plus the merged view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionCalendars {
    pub division: String,
    pub calendars: BTreeMap<String, Calendar>,
    pub whole_calendar: Calendar,
}

impl Calendar {
    pub fn new(division: Option<String>, year: Option<String>, events: Vec<Event>) -> Self {
        Calendar {
            division,
            year,
            events,
        }
    }

    /// Merge one division's per-year calendars into a single calendar
    /// with no year attached.
    ///
    /// Map iteration order (ascending year) determines event order.
    /// Chronological correctness of the result depends on each year's
    /// events already being chronological in the source document.
    pub fn combine_years(calendars: &BTreeMap<String, Calendar>) -> Calendar {
        let division = calendars.values().next().and_then(|c| c.division.clone());
        let events = calendars
            .values()
            .flat_map(|c| c.events.iter().cloned())
            .collect();

        Calendar {
            division,
            year: None,
            events,
        }
    }

    /// Re-run the merge for one division of an already-built grouping.
    pub fn combine(
        grouped: &BTreeMap<String, DivisionCalendars>,
        division: &str,
    ) -> CalendarResult<Calendar> {
        let entry = grouped
            .get(division)
            .ok_or_else(|| CalendarError::CalendarNotFound(division.to_string()))?;

        Ok(Self::combine_years(&entry.calendars))
    }

    /// The first event dated `today` or later, scanning stored order.
    /// With out-of-order input this is the first qualifying event by
    /// position, not the earliest by date.
    pub fn upcoming_event_on(&self, today: NaiveDate) -> Option<&Event> {
        self.events
            .iter()
            .find(|e| e.date > today - Duration::days(1))
    }

    pub fn upcoming_event(&self) -> Option<&Event> {
        self.upcoming_event_on(Local::now().date_naive())
    }

    /// Whether the upcoming event falls on `today`. No upcoming event
    /// means `false`, not an error.
    pub fn event_today_on(&self, today: NaiveDate) -> bool {
        self.upcoming_event_on(today)
            .is_some_and(|e| e.date == today)
    }

    pub fn event_today(&self) -> bool {
        self.event_today_on(Local::now().date_naive())
    }

    /// Bunting goes up only when the upcoming event is today and its
    /// flag is exactly the string `"true"`.
    pub fn show_bunting_on(&self, today: NaiveDate) -> bool {
        self.event_today_on(today)
            && self
                .upcoming_event_on(today)
                .is_some_and(|e| e.bunting == "true")
    }

    pub fn show_bunting(&self) -> bool {
        self.show_bunting_on(Local::now().date_naive())
    }
}
