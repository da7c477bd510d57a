use crate::models::BookingSummary;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for the "Session Details" panel shown in place of the form.
pub fn render_summary_html(summary: &BookingSummary) -> String {
    let r = &summary.request;
    let minor = if summary.minor { " (Minor)" } else { "" };

    let rows = [
        ("Full Name", escape_html(&r.name)),
        ("Age", format!("{}{minor}", escape_html(&r.age))),
        ("Phone No. ", escape_html(&r.phone)),
        ("Email Address", escape_html(&r.email)),
        ("Booking Date", escape_html(&r.date)),
        ("Slot", escape_html(&r.slot)),
        ("Type of Counselling", escape_html(&r.session_type)),
        ("Duration", format!("{} minutes", escape_html(&r.duration))),
        ("Counselor", escape_html(&r.counselor)),
        ("Total Cost", summary.cost_display()),
    ];

    let mut html = String::from("<h2>Session Details</h2>\n");
    for (label, value) in rows {
        html.push_str(&format!("<p><strong>{label}:</strong> {value}</p>\n"));
    }
    html
}
