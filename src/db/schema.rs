//! SQL DDL for initializing the client database.

/// SQLite schema:
/// - `clients` with a system-generated id and free-text identity fields
/// - `phones` owned by a client through `client_id`
///
/// Every statement is `IF NOT EXISTS` so startup can run this
/// unconditionally.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT,
    last_name TEXT,
    email TEXT
);

CREATE TABLE IF NOT EXISTS phones (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    client_id INTEGER NOT NULL REFERENCES clients(id),
    phone_number TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_phones_client_id ON phones(client_id);
"#;
