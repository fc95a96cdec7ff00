// Database service module
// SQLite connection, schema and the key-value countdown store

mod connection;
mod key_value;
mod schema;

pub use connection::Database;
pub use key_value::SqliteStore;
