//! ICS text generation.

use crate::calendar::Calendar;

static PROD_ID: &str = "-//uk.gov/GOVUK calendars//EN";
static DATE_FORMAT: &str = "%Y%m%d";

/// Serialize a calendar as iCalendar text, CRLF-terminated.
///
/// The property set is fixed: downstream consumers are calibrated to
/// exactly these lines, so no UID or DTSTAMP is emitted. Every event
/// is all-day, with DTSTART and DTEND on the same date.
pub fn generate_ics(calendar: &Calendar) -> String {
    let mut output = String::from("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n");
    output.push_str(&format!("PRODID:{PROD_ID}\r\n"));
    output.push_str("CALSCALE:GREGORIAN\r\n");

    for event in &calendar.events {
        let date = event.date.format(DATE_FORMAT);
        output.push_str("BEGIN:VEVENT\r\n");
        output.push_str(&format!("DTEND;VALUE=DATE:{date}\r\n"));
        output.push_str(&format!("DTSTART;VALUE=DATE:{date}\r\n"));
        output.push_str(&format!("SUMMARY:{}\r\n", event.title));
        output.push_str("END:VEVENT\r\n");
    }

    output.push_str("END:VCALENDAR\r\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use chrono::NaiveDate;

    fn event(title: &str, date: NaiveDate) -> Event {
        Event {
            title: title.to_string(),
            date,
            notes: String::new(),
            bunting: "false".to_string(),
        }
    }

    fn calendar(events: Vec<Event>) -> Calendar {
        Calendar::new(Some("scotland".to_string()), None, events)
    }

    #[test]
    fn empty_calendar_has_only_the_envelope() {
        let ics = generate_ics(&calendar(vec![]));

        assert_eq!(
            ics,
            "BEGIN:VCALENDAR\r\n\
             VERSION:2.0\r\n\
             PRODID:-//uk.gov/GOVUK calendars//EN\r\n\
             CALSCALE:GREGORIAN\r\n\
             END:VCALENDAR\r\n"
        );
    }

    #[test]
    fn one_vevent_block_per_event_in_stored_order() {
        let cal = calendar(vec![
            event("A", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            event("B", NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()),
        ]);

        let ics = generate_ics(&cal);

        assert_eq!(
            ics,
            "BEGIN:VCALENDAR\r\n\
             VERSION:2.0\r\n\
             PRODID:-//uk.gov/GOVUK calendars//EN\r\n\
             CALSCALE:GREGORIAN\r\n\
             BEGIN:VEVENT\r\n\
             DTEND;VALUE=DATE:20240101\r\n\
             DTSTART;VALUE=DATE:20240101\r\n\
             SUMMARY:A\r\n\
             END:VEVENT\r\n\
             BEGIN:VEVENT\r\n\
             DTEND;VALUE=DATE:20241225\r\n\
             DTSTART;VALUE=DATE:20241225\r\n\
             SUMMARY:B\r\n\
             END:VEVENT\r\n\
             END:VCALENDAR\r\n"
        );
    }

    #[test]
    fn no_uid_or_dtstamp_is_emitted() {
        let cal = calendar(vec![event(
            "Christmas Day",
            NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
        )]);

        let ics = generate_ics(&cal);

        assert!(!ics.contains("UID"));
        assert!(!ics.contains("DTSTAMP"));
    }
}
