//! Compact home-screen widget view.
//!
//! The widget reads the same persisted fields as the form and renders a
//! smaller layout: title, one countdown row, subtitle.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::engine::compute_countdown;
use super::form::{countdown_row, NO_TARGET_MESSAGE, PAST_TARGET_MESSAGE, UNAVAILABLE_MESSAGE};
use crate::models::countdown::{CalendarDate, CountdownInput, CountdownMetrics};

pub const COUNTDOWN_WIDGET_NAME: &str = "CountdownInfoWidget";

/// Title and subtitle are cut to one line of this many characters.
pub const MAX_LINE_CHARS: usize = 32;

/// Data the widget renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPayload {
    pub title: String,
    pub subtitle: String,
    pub target_date_iso: Option<String>,
}

impl WidgetPayload {
    pub fn from_input<Tz: TimeZone>(input: &CountdownInput, tz: &Tz) -> Self {
        Self {
            title: input.title.clone(),
            subtitle: input.subtitle.clone(),
            target_date_iso: input.target_date.map(|date| date.to_iso_instant(tz)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetView {
    Info(&'static str),
    Countdown {
        title: Option<String>,
        row: String,
        subtitle: Option<String>,
    },
}

impl WidgetView {
    /// Text lines, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Info(message) => vec![(*message).to_string()],
            Self::Countdown {
                title,
                row,
                subtitle,
            } => title
                .iter()
                .cloned()
                .chain(std::iter::once(row.clone()))
                .chain(subtitle.iter().cloned())
                .collect(),
        }
    }
}

/// Builds the widget view for `payload` at `reference`.
pub fn build_widget_view<Tz: TimeZone>(
    payload: &WidgetPayload,
    reference: &DateTime<Tz>,
) -> WidgetView {
    let target_date = payload.target_date_iso.as_deref().and_then(|iso| {
        let parsed = CalendarDate::from_iso_instant(iso, &reference.timezone());
        if parsed.is_none() {
            log::warn!("Widget target date {iso:?} is not an ISO-8601 instant; ignoring it");
        }
        parsed
    });

    view_for_metrics(
        &compute_countdown(target_date, reference),
        &payload.title,
        &payload.subtitle,
    )
}

fn view_for_metrics(metrics: &CountdownMetrics, title: &str, subtitle: &str) -> WidgetView {
    if !metrics.has_target_date {
        return WidgetView::Info(NO_TARGET_MESSAGE);
    }

    if metrics.is_past_target {
        return WidgetView::Info(PAST_TARGET_MESSAGE);
    }

    let Some((weeks, months)) = metrics.breakdown() else {
        return WidgetView::Info(UNAVAILABLE_MESSAGE);
    };

    WidgetView::Countdown {
        title: single_line(title),
        row: countdown_row(metrics.days_left, weeks, months),
        subtitle: single_line(subtitle),
    }
}

fn single_line(text: &str) -> Option<String> {
    let line = text.lines().next().unwrap_or_default().trim();
    if line.is_empty() {
        return None;
    }

    if line.chars().count() <= MAX_LINE_CHARS {
        return Some(line.to_string());
    }

    let mut truncated: String = line.chars().take(MAX_LINE_CHARS - 1).collect();
    truncated.push('…');
    Some(truncated)
}
