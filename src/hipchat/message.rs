use chrono::{DateTime, Duration, Utc};
use std::fmt::Write;

use crate::pull_request::PullRequest;

/// Render the reminder digest for `prs` as seen at `now`.
///
/// Format: `Reminders (N)` followed by one
/// `<a href="URL">TITLE</a> (AUTHOR ELAPSED ago)` entry per pull request,
/// separated by single spaces.
pub fn format_digest(prs: &[PullRequest], now: DateTime<Utc>) -> String {
    let mut message = format!("Reminders ({})", prs.len());
    for pr in prs {
        // Writing into a String cannot fail
        let _ = write!(
            message,
            " <a href=\"{}\">{}</a> ({} {} ago)",
            html_escape::encode_double_quoted_attribute(&pr.url),
            html_escape::encode_text(&pr.title),
            pr.author,
            format_elapsed(pr.age_at(now))
        );
    }
    message
}

/// Format a duration truncated to whole seconds, e.g. "1h1m1s", "2m0s", "45s".
///
/// Hours are not rolled into days, so three days read "72h0m0s".
pub fn format_elapsed(duration: Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, seconds)
    } else {
        format!("{}{}s", sign, seconds)
    }
}
