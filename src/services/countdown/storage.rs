//! Key-value persistence of the countdown input.
//!
//! Both surfaces read the same three keys. Loading never fails: a broken
//! store is logged and the surface starts from empty defaults.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, TimeZone};
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::models::countdown::{CalendarDate, CountdownInput};

pub const TITLE_KEY: &str = "title";
pub const SUBTITLE_KEY: &str = "subtitle";
pub const TARGET_DATE_KEY: &str = "targetDate";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store document {} is not a flat JSON object", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("value stored under '{0}' is not a string")]
    NonStringValue(String),
}

/// Plain text key-value storage owned by the host surface.
#[cfg_attr(test, automock)]
pub trait CountdownStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Loads the input, interpreting stored dates in the local zone.
pub fn load_input(store: &dyn CountdownStore) -> CountdownInput {
    load_input_in(store, &Local)
}

/// Loads the input, interpreting stored dates in `tz`.
pub fn load_input_in<Tz: TimeZone>(store: &dyn CountdownStore, tz: &Tz) -> CountdownInput {
    match read_fields(store) {
        Ok((title, subtitle, target_iso)) => {
            let target_date = target_iso
                .filter(|iso| !iso.trim().is_empty())
                .and_then(|iso| {
                    let parsed = CalendarDate::from_iso_instant(&iso, tz);
                    if parsed.is_none() {
                        log::warn!("Stored target date {iso:?} is not an ISO-8601 instant; ignoring it");
                    }
                    parsed
                });

            CountdownInput {
                title: title.unwrap_or_default(),
                subtitle: subtitle.unwrap_or_default(),
                target_date,
            }
        }
        Err(err) => {
            log::error!("Failed to load countdown input, starting empty: {err:?}");
            CountdownInput::default()
        }
    }
}

fn read_fields(
    store: &dyn CountdownStore,
) -> Result<(Option<String>, Option<String>, Option<String>)> {
    Ok((
        store.get(TITLE_KEY)?,
        store.get(SUBTITLE_KEY)?,
        store.get(TARGET_DATE_KEY)?,
    ))
}

/// Saves the input, writing dates as local midnight.
pub fn save_input(store: &mut dyn CountdownStore, input: &CountdownInput) -> Result<()> {
    save_input_in(store, input, &Local)
}

/// Saves the input; a cleared target removes the date key.
pub fn save_input_in<Tz: TimeZone>(
    store: &mut dyn CountdownStore,
    input: &CountdownInput,
    tz: &Tz,
) -> Result<()> {
    store.set(TITLE_KEY, &input.title)?;
    store.set(SUBTITLE_KEY, &input.subtitle)?;

    match input.target_date {
        Some(date) => store.set(TARGET_DATE_KEY, &date.to_iso_instant(tz))?,
        None => store.remove(TARGET_DATE_KEY)?,
    }

    log::debug!(
        "Saved countdown input (target: {:?})",
        input.target_date.map(|d| d.to_string())
    );
    Ok(())
}
