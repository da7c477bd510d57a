use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::models::BookingSummary;

/// Session start/end, or `None` when the date, slot, or duration cannot be
/// placed on a calendar.
pub fn session_window(summary: &BookingSummary) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let r = &summary.request;
    let date = NaiveDate::parse_from_str(&r.date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(&r.slot, "%H:%M").ok()?;
    let minutes: i64 = r.duration.trim().parse().ok().filter(|m| *m > 0)?;

    let start = date.and_time(time);
    Some((start, start + Duration::minutes(minutes)))
}

pub fn generate_ics(summary: &BookingSummary, business_name: &str) -> Option<String> {
    let (start, end) = session_window(summary)?;
    let r = &summary.request;

    let dtstart = start.format("%Y%m%dT%H%M%S");
    let dtend = end.format("%Y%m%dT%H%M%S");
    let dtstamp = Utc::now().naive_utc().format("%Y%m%dT%H%M%SZ");
    let uid = format!("{}@counsel-booking", uuid::Uuid::new_v4());
    let title = format!("{} counselling with {}", r.session_type, r.counselor);
    let description = format!(
        "Client: {} ({} minutes). Total cost: {}",
        r.name,
        r.duration.trim(),
        summary.cost_display()
    );

    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:-//{}//Counselling Booking//EN", strip_breaks(business_name)),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{uid}"),
        format!("DTSTAMP:{dtstamp}"),
        format!("DTSTART:{dtstart}"),
        format!("DTEND:{dtend}"),
        format!("SUMMARY:{}", escape_text(&title)),
        format!("DESCRIPTION:{}", escape_text(&description)),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    Some(lines.iter().map(|line| fold_line(line)).collect())
}

// RFC 5545 TEXT escaping. CR/LF pairs and lone CRs become a single escaped newline.
fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "\\n")
}

fn strip_breaks(s: &str) -> String {
    s.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

/// One content line terminated by CRLF, folded so no physical line exceeds
/// 75 octets. Continuation lines start with a single space.
fn fold_line(line: &str) -> String {
    const LIMIT: usize = 75;

    let mut out = String::with_capacity(line.len() + 8);
    let mut width = 0;
    for c in line.chars() {
        let len = c.len_utf8();
        if width + len > LIMIT {
            out.push_str("\r\n ");
            width = 1;
        }
        out.push(c);
        width += len;
    }
    out.push_str("\r\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingRequest;

    fn summary(date: &str, slot: &str, duration: &str) -> BookingSummary {
        BookingSummary::new(
            BookingRequest {
                name: "Ada".to_string(),
                age: "30".to_string(),
                age_years: Some(30),
                phone: "+2348012345678".to_string(),
                email: "ada@example.com".to_string(),
                date: date.to_string(),
                slot: slot.to_string(),
                session_type: "Family".to_string(),
                duration: duration.to_string(),
                counselor: "Dr Harrison Ford".to_string(),
            },
            15000.0,
        )
    }

    #[test]
    fn test_generate_ics() {
        let ics = generate_ics(&summary("2025-03-15", "15:00", "30"), "Test Centre").unwrap();
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("BEGIN:VEVENT"));
        assert!(ics.contains("PRODID:-//Test Centre//Counselling Booking//EN"));
        assert!(ics.contains("DTSTART:20250315T150000"));
        assert!(ics.contains("DTEND:20250315T153000"));
        assert!(ics.contains("SUMMARY:Family counselling with Dr Harrison Ford"));
        assert!(ics.contains("DESCRIPTION:Client: Ada (30 minutes). Total cost: NGN 15000.00"));
        assert!(ics.contains("@counsel-booking"));
        assert!(ics.contains("END:VEVENT"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
    }

    #[test]
    fn test_window_crosses_midnight() {
        let (start, end) = session_window(&summary("2025-03-15", "17:00", "480")).unwrap();
        assert_eq!(start.format("%Y-%m-%d %H:%M").to_string(), "2025-03-15 17:00");
        assert_eq!(end.format("%Y-%m-%d %H:%M").to_string(), "2025-03-16 01:00");
    }

    #[test]
    fn test_unplaceable_sessions() {
        assert!(generate_ics(&summary("15/03/2025", "15:00", "60"), "X").is_none());
        assert!(generate_ics(&summary("2025-03-15", "3pm", "60"), "X").is_none());
        assert!(generate_ics(&summary("2025-03-15", "15:00", "an hour"), "X").is_none());
        assert!(generate_ics(&summary("2025-03-15", "15:00", "0"), "X").is_none());
        assert!(generate_ics(&summary("2025-03-15", "15:00", "45.5"), "X").is_none());
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a,b;c\\d"), "a\\,b\\;c\\\\d");
        assert_eq!(escape_text("a\r\nb\rc\nd"), "a\\nb\\nc\\nd");
    }

    #[test]
    fn test_carriage_return_in_name_stays_in_one_property() {
        let mut s = summary("2025-03-15", "15:00", "30");
        s.request.name = "Ada\rX-INJECTED:1".to_string();
        let ics = generate_ics(&s, "Test Centre").unwrap();
        assert!(!ics.contains("\rX-INJECTED"));
        assert!(ics.contains("Ada\\nX-INJECTED:1"));
        assert!(!ics.replace("\r\n", "").contains('\r'));
    }

    #[test]
    fn test_long_lines_are_folded() {
        let mut s = summary("2025-03-15", "15:00", "30");
        s.request.name = "Adaeze Chiamaka Oluwaseun Ngozi Obi-Okonkwo-Adeyemi-Balogun".to_string();
        s.request.counselor = "Dr Harrison Ford of the Extremely Long Department Name".to_string();
        let ics = generate_ics(&s, "Test Centre").unwrap();

        for line in ics.split("\r\n") {
            assert!(line.len() <= 75, "line too long: {line:?}");
        }
        let unfolded = ics.replace("\r\n ", "");
        assert!(unfolded.contains(
            "DESCRIPTION:Client: Adaeze Chiamaka Oluwaseun Ngozi Obi-Okonkwo-Adeyemi-Balogun (30 minutes)"
        ));
        assert!(unfolded.contains(
            "SUMMARY:Family counselling with Dr Harrison Ford of the Extremely Long Department Name"
        ));
    }

    #[test]
    fn test_fold_multibyte_on_char_boundary() {
        let line = format!("DESCRIPTION:{}", "é".repeat(60));
        let folded = fold_line(&line);
        for part in folded.split("\r\n") {
            assert!(part.len() <= 75);
        }
        assert_eq!(folded.replace("\r\n ", ""), format!("{line}\r\n"));
    }
}
