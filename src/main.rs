// Day Countdown
// Command line entry point: interactive form and widget surfaces

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};
use clap::{Parser, Subcommand};

use day_countdown::models::countdown::{CalendarDate, CountdownInput};
use day_countdown::services::countdown::{
    build_widget_view, duration_until_next_refresh, format_date_for_display, load_input,
    save_input, CountdownForm, CountdownStore, DateCommit, RefreshTrigger, WidgetPayload,
    COUNTDOWN_WIDGET_NAME,
};
use day_countdown::services::settings::SettingsService;

#[derive(Debug, Parser)]
#[command(name = "day-countdown", version, about = "Counts the days left until a target date")]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the countdown line
    Show {
        /// Reference instant (RFC 3339) instead of now
        #[arg(long, value_parser = parse_reference)]
        at: Option<DateTime<Local>>,
    },
    /// Edit and save the title, subtitle or target date
    Set {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        subtitle: Option<String>,
        /// Target date as D.M.YYYY (also D/M/YYYY or D-M-YYYY); blank clears it
        #[arg(long, allow_hyphen_values = true)]
        date: Option<String>,
    },
    /// Pick the target date directly, as YYYY-MM-DD
    Pick { date: NaiveDate },
    /// Remove the target date
    Clear,
    /// Print the compact widget view
    Widget {
        /// Reference instant (RFC 3339) instead of now
        #[arg(long, value_parser = parse_reference)]
        at: Option<DateTime<Local>>,
    },
    /// Keep running and re-render at every local midnight
    Watch,
}

fn parse_reference(value: &str) -> Result<DateTime<Local>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Local))
        .map_err(|err| format!("expected an RFC 3339 instant: {err}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = SettingsService::load(cli.config.as_deref())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.config().log_level.as_str()),
    )
    .init();

    log::info!(
        "Starting Day Countdown (config: {})",
        settings.config_path().display()
    );

    let mut store = settings.open_store()?;
    let mut form = CountdownForm::from_input(load_input(store.as_ref()));

    match cli.command.unwrap_or(Command::Show { at: None }) {
        Command::Show { at } => {
            println!("{}", form.render(&at.unwrap_or_else(Local::now)));
        }
        Command::Set {
            title,
            subtitle,
            date,
        } => {
            if let Some(title) = title {
                form.set_title(title);
            }
            if let Some(subtitle) = subtitle {
                form.set_subtitle(subtitle);
            }
            if let Some(text) = date {
                form.edit_date_text(text.as_str());
                report_date_commit(&text, form.commit_date_text(&text), form.target_date());
            }
            persist_and_render(store.as_mut(), form.input());
        }
        Command::Pick { date } => {
            form.select_date(CalendarDate::new(date));
            persist_and_render(store.as_mut(), form.input());
        }
        Command::Clear => {
            form.clear_date();
            persist_and_render(store.as_mut(), form.input());
        }
        Command::Widget { at } => {
            print_widget(form.input(), &at.unwrap_or_else(Local::now));
        }
        Command::Watch => watch(store.as_ref()).await?,
    }

    Ok(())
}

fn report_date_commit(text: &str, outcome: DateCommit, current: Option<CalendarDate>) {
    match outcome {
        DateCommit::Set(date) => log::info!("Target date set to {}", format_date_for_display(date)),
        DateCommit::Cleared => log::info!("Target date cleared"),
        DateCommit::Rejected => {
            let kept = current
                .map(format_date_for_display)
                .unwrap_or_else(|| "no date".to_string());
            eprintln!("'{text}' is not a valid D.M.YYYY date; keeping {kept}");
        }
    }
}

/// Saves the edited input, then re-renders both surfaces.
///
/// A failed save is logged; the countdown is still shown from memory.
fn persist_and_render(store: &mut dyn CountdownStore, input: &CountdownInput) {
    if let Err(err) = save_input(store, input) {
        log::error!("Failed to save countdown input: {err:?}");
    }
    render_surfaces(input, RefreshTrigger::InputEdited);
}

fn render_surfaces(input: &CountdownInput, trigger: RefreshTrigger) {
    let now = Local::now();
    log::info!("Refreshing countdown ({trigger})");

    let form = CountdownForm::from_input(input.clone());
    println!("{}", form.render(&now));
    print_widget(input, &now);
}

fn print_widget(input: &CountdownInput, reference: &DateTime<Local>) {
    let payload = WidgetPayload::from_input(input, &Local);
    println!("[{COUNTDOWN_WIDGET_NAME}]");
    for line in build_widget_view(&payload, reference).lines() {
        println!("  {line}");
    }
}

async fn watch(store: &dyn CountdownStore) -> Result<()> {
    render_surfaces(&load_input(store), RefreshTrigger::WidgetRequested);

    loop {
        let wait = duration_until_next_refresh(&Local::now());
        log::debug!("Next countdown refresh in {}s", wait.as_secs());

        tokio::select! {
            _ = tokio::time::sleep(wait) => {
                // Reload so edits from another invocation are picked up
                render_surfaces(&load_input(store), RefreshTrigger::MidnightPassed);
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("failed to listen for Ctrl-C")?;
                log::info!("Stopping countdown watch");
                return Ok(());
            }
        }
    }
}
