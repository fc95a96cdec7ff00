use chrono::{DateTime, TimeZone};

use super::engine::{compute_countdown, format_date_for_display, parse_date_input};
use crate::models::countdown::{CalendarDate, CountdownInput, CountdownMetrics, NumberParts};

pub const NO_TARGET_MESSAGE: &str = "Hedef tarihi secmedin.";
pub const PAST_TARGET_MESSAGE: &str = "Tarih gecti :(";
pub const UNAVAILABLE_MESSAGE: &str = "Veriler hesaplanamadi.";

pub const DAYS_UNIT: &str = "Gun";
pub const WEEKS_UNIT: &str = "Hafta";
pub const MONTHS_UNIT: &str = "Ay";
pub const CONNECTOR: &str = "ya da";

/// Outcome of committing the typed date text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCommit {
    /// Text parsed; the target now points at this day.
    Set(CalendarDate),
    /// Text was blank; the target was removed.
    Cleared,
    /// Text did not parse; the previous target is kept.
    Rejected,
}

/// State of the interactive countdown screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountdownForm {
    input: CountdownInput,
    date_text: String,
}

impl CountdownForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a previously persisted input.
    pub fn from_input(input: CountdownInput) -> Self {
        let mut form = Self {
            input,
            date_text: String::new(),
        };
        form.sync_date_text();
        form
    }

    pub fn input(&self) -> &CountdownInput {
        &self.input
    }

    pub fn into_input(self) -> CountdownInput {
        self.input
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    pub fn target_date(&self) -> Option<CalendarDate> {
        self.input.target_date
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.input.title = title.into();
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.input.subtitle = subtitle.into();
    }

    /// Live edit of the date field; nothing is parsed until commit.
    pub fn edit_date_text(&mut self, text: impl Into<String>) {
        self.date_text = text.into();
    }

    /// Commits the date field the way the text box does on submit or blur.
    ///
    /// A rejected entry leaves the previous target in place. The visible text
    /// is always reset to the current target afterwards.
    pub fn commit_date_text(&mut self, text: &str) -> DateCommit {
        let outcome = match parse_date_input(text) {
            Some(date) => {
                self.input.target_date = Some(date);
                DateCommit::Set(date)
            }
            None if text.trim().is_empty() => {
                self.input.target_date = None;
                DateCommit::Cleared
            }
            None => {
                log::debug!("Ignoring unparsable date input {text:?}");
                DateCommit::Rejected
            }
        };
        self.sync_date_text();
        outcome
    }

    /// Date-picker selection, which bypasses text parsing.
    pub fn select_date(&mut self, date: CalendarDate) {
        self.input.target_date = Some(date);
        self.sync_date_text();
    }

    pub fn clear_date(&mut self) {
        self.input.target_date = None;
        self.sync_date_text();
    }

    pub fn metrics<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> CountdownMetrics {
        compute_countdown(self.input.target_date, reference)
    }

    /// Result line for the current input at `reference`.
    pub fn render<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> String {
        render_result(&self.metrics(reference), &self.input.title, &self.input.subtitle)
    }

    fn sync_date_text(&mut self) {
        self.date_text = self
            .input
            .target_date
            .map(format_date_for_display)
            .unwrap_or_default();
    }
}

pub(crate) fn decimal_text(parts: &NumberParts) -> String {
    format!("{},{}", parts.int_part, parts.decimal_part)
}

/// `"{days} Gun ya da {weeks} Hafta ya da {months} Ay"`.
pub(crate) fn countdown_row(days_left: i64, weeks: &NumberParts, months: &NumberParts) -> String {
    format!(
        "{days_left} {DAYS_UNIT} {CONNECTOR} {} {WEEKS_UNIT} {CONNECTOR} {} {MONTHS_UNIT}",
        decimal_text(weeks),
        decimal_text(months),
    )
}

/// Composes the interactive result line around `metrics`.
pub fn render_result(metrics: &CountdownMetrics, title: &str, subtitle: &str) -> String {
    if !metrics.has_target_date {
        return NO_TARGET_MESSAGE.to_string();
    }

    if metrics.is_past_target {
        return PAST_TARGET_MESSAGE.to_string();
    }

    let Some((weeks, months)) = metrics.breakdown() else {
        return UNAVAILABLE_MESSAGE.to_string();
    };

    let mut segments = Vec::with_capacity(3);
    if !title.is_empty() {
        segments.push(title.to_string());
    }
    segments.push(countdown_row(metrics.days_left, weeks, months));
    if !subtitle.is_empty() {
        segments.push(subtitle.to_string());
    }
    segments.join(" ")
}
