//! Loading and grouping of topic documents.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::calendar::{Calendar, DivisionCalendars};
use crate::error::{CalendarError, CalendarResult};
use crate::event::Event;

/// Top-level shape of a topic document.
///
/// Values under a division stay as raw JSON until their key has
/// passed the 4-digit year check; non-year keys never reach event
/// parsing.
#[derive(Debug, Deserialize)]
pub struct Document {
    pub divisions: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    title: String,
    date: String,
    #[serde(default)]
    notes: String,
    #[serde(default = "default_bunting")]
    bunting: String,
}

fn default_bunting() -> String {
    "false".to_string()
}

/// One loaded topic document plus its derived grouping.
///
/// Both are computed once at load time and never invalidated; build a
/// new `Repository` to observe document changes on disk.
pub struct Repository {
    name: String,
    document: Document,
    grouped: BTreeMap<String, DivisionCalendars>,
}

impl Repository {
    /// Load `<root>/<name>.json` and group it by division and year.
    pub fn load(root: impl AsRef<Path>, name: &str) -> CalendarResult<Self> {
        let path = root.as_ref().join(format!("{name}.json"));

        if !path.exists() {
            return Err(CalendarError::CalendarNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(&path)?;
        let document: Document = serde_json::from_str(&content)
            .map_err(|e| CalendarError::InvalidDocument(format!("{}: {e}", path.display())))?;
        let grouped = group_by_division(&document)?;

        Ok(Repository {
            name: name.to_string(),
            document,
            grouped,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn all_grouped_by_division(&self) -> &BTreeMap<String, DivisionCalendars> {
        &self.grouped
    }

    pub fn find_by_division_and_year(
        &self,
        division: &str,
        year: &str,
    ) -> CalendarResult<&Calendar> {
        self.grouped
            .get(division)
            .and_then(|d| d.calendars.get(year))
            .ok_or_else(|| {
                CalendarError::CalendarNotFound(format!("{}: {division}/{year}", self.name))
            })
    }

    pub fn combined_calendar_for_division(&self, division: &str) -> CalendarResult<&Calendar> {
        self.grouped
            .get(division)
            .map(|d| &d.whole_calendar)
            .ok_or_else(|| {
                CalendarError::CalendarNotFound(format!("{}: {division}", self.name))
            })
    }
}

fn group_by_division(document: &Document) -> CalendarResult<BTreeMap<String, DivisionCalendars>> {
    let mut grouped = BTreeMap::new();

    for (division, by_year) in &document.divisions {
        let mut calendars = BTreeMap::new();

        for (year, value) in by_year {
            if !is_year_key(year) {
                continue;
            }

            let raw: Vec<RawEvent> = serde_json::from_value(value.clone())
                .map_err(|e| CalendarError::InvalidDocument(format!("{division}/{year}: {e}")))?;
            let events = raw
                .into_iter()
                .map(|r| parse_event(division, year, r))
                .collect::<CalendarResult<Vec<_>>>()?;

            calendars.insert(
                year.clone(),
                Calendar::new(Some(division.clone()), Some(year.clone()), events),
            );
        }

        let whole_calendar = Calendar::combine_years(&calendars);
        grouped.insert(
            division.clone(),
            DivisionCalendars {
                division: division.clone(),
                calendars,
                whole_calendar,
            },
        );
    }

    Ok(grouped)
}

fn is_year_key(key: &str) -> bool {
    key.len() == 4 && key.bytes().all(|b| b.is_ascii_digit())
}

fn parse_event(division: &str, year: &str, raw: RawEvent) -> CalendarResult<Event> {
    let date = NaiveDate::parse_from_str(&raw.date, "%d/%m/%Y").map_err(|_| {
        CalendarError::InvalidDocument(format!("{division}/{year}: bad date '{}'", raw.date))
    })?;

    Ok(Event {
        title: raw.title,
        date,
        notes: raw.notes,
        bunting: raw.bunting,
    })
}
