//! Release notes, rendered as markdown grouped by month.

use chrono::{Datelike, NaiveDate};

#[derive(Debug)]
pub struct Release {
    pub date: NaiveDate,
    pub title: &'static str,
    pub description: &'static str,
}

/// Newest first.
pub fn releases() -> Vec<Release> {
    let release = |y, m, d, title, description| Release {
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        title,
        description,
    };
    vec![
        release(
            2024,
            12,
            12,
            "Enhanced Voice API with AI Integration",
            "Added support for AI-powered voice conversations and improved call quality.",
        ),
        release(
            2024,
            12,
            3,
            "New SMS Delivery Reports Format",
            "Updated delivery report structure with more detailed status information.",
        ),
        release(
            2024,
            11,
            20,
            "USSD Session Management Improvements",
            "Better handling of USSD sessions with improved timeout management.",
        ),
    ]
}

pub fn render_markdown(releases: &[Release]) -> String {
    let mut out = String::from(
        "# Changelog\n\nStay updated with the latest changes and improvements to our APIs.\n",
    );
    let mut current: Option<(i32, u32)> = None;
    for release in releases {
        let month = (release.date.year(), release.date.month());
        if current != Some(month) {
            let latest = if current.is_none() { " (Latest)" } else { "" };
            out.push_str(&format!("\n## {}{latest}\n", release.date.format("%B %Y")));
            current = Some(month);
        }
        out.push_str(&format!(
            "\n### {}\n\n*{}* {}\n",
            release.title,
            release.date.format("%b %d"),
            release.description
        ));
    }
    out
}
