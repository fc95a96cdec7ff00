pub mod engine;
mod form;
mod persistence;
mod refresh;
mod storage;
mod widget;

pub use engine::{
    compute_countdown, compute_countdown_now, decompose_to_one_decimal, format_date_for_display,
    parse_date_input, DAYS_IN_MONTH, DAYS_IN_WEEK,
};
pub use form::{
    render_result, CountdownForm, DateCommit, NO_TARGET_MESSAGE, PAST_TARGET_MESSAGE,
    UNAVAILABLE_MESSAGE,
};
pub use persistence::JsonFileStore;
pub use refresh::{duration_until_next_refresh, next_refresh_at, RefreshTrigger};
pub use storage::{
    load_input, load_input_in, save_input, save_input_in, CountdownStore, StoreError,
    SUBTITLE_KEY, TARGET_DATE_KEY, TITLE_KEY,
};
pub use widget::{build_widget_view, WidgetPayload, WidgetView, COUNTDOWN_WIDGET_NAME};
