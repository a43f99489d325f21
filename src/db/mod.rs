mod schema;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::debug;

use crate::error::StorageError;
use crate::models::{Client, ClientFilter, ClientMatch, ClientUpdate, Phone};

use schema::SQLITE_INIT;

/// Record-level operations on clients and their phone numbers.
///
/// The store owns a single-connection pool for its whole lifetime; every
/// operation runs its statements serially on that connection and commits
/// before returning. Multi-statement operations share one transaction, so
/// a mid-sequence failure rolls back instead of leaving partial writes.
pub struct ClientStore {
    pool: SqlitePool,
}

impl ClientStore {
    /// Open a store on the given SQLite URL.
    ///
    /// The pool is capped at one connection: callers are strictly
    /// sequential, and the connection is released when the store is
    /// closed or dropped.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool, e.g. an injected in-memory database.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create both tables if absent. Safe to call on every startup.
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        // sqlx::query executes one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let stmt = stmt.trim();
            if stmt.is_empty() {
                continue;
            }
            sqlx::query(stmt).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a client and its phone numbers, returning the generated id.
    pub async fn add_client(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phones: &[&str],
    ) -> Result<i64, StorageError> {
        let mut tx = self.pool.begin().await?;

        let client_id: i64 = sqlx::query_scalar(
            "INSERT INTO clients (first_name, last_name, email) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_one(&mut *tx)
        .await?;

        for phone in phones {
            sqlx::query("INSERT INTO phones (client_id, phone_number) VALUES (?, ?)")
                .bind(client_id)
                .bind(phone)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        debug!(client_id, phones = phones.len(), "client added");
        Ok(client_id)
    }

    /// Attach one phone number to an existing client.
    ///
    /// The client id is not checked here; the foreign key on `phones`
    /// rejects an unknown owner.
    pub async fn add_phone(&self, client_id: i64, phone_number: &str) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO phones (client_id, phone_number) VALUES (?, ?)")
            .bind(client_id)
            .bind(phone_number)
            .execute(&self.pool)
            .await?;
        debug!(client_id, "phone added");
        Ok(())
    }

    pub async fn get_client(&self, client_id: i64) -> Result<Option<Client>, StorageError> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, first_name, last_name, email FROM clients WHERE id = ?",
        )
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(client)
    }

    /// All phone numbers owned by a client, oldest first.
    pub async fn phones_for_client(&self, client_id: i64) -> Result<Vec<Phone>, StorageError> {
        let phones = sqlx::query_as::<_, Phone>(
            "SELECT id, client_id, phone_number FROM phones WHERE client_id = ? ORDER BY id",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(phones)
    }

    /// Apply the present fields of `update` to a client.
    ///
    /// Absent fields are left unchanged. A present `phones` list deletes
    /// every existing phone row for the client before inserting the
    /// replacement list. All statements share one transaction.
    pub async fn update_client(
        &self,
        client_id: i64,
        update: &ClientUpdate,
    ) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;

        if let Some(first_name) = &update.first_name {
            sqlx::query("UPDATE clients SET first_name = ? WHERE id = ?")
                .bind(first_name)
                .bind(client_id)
                .execute(&mut *tx)
                .await?;
        }

        if let Some(last_name) = &update.last_name {
            sqlx::query("UPDATE clients SET last_name = ? WHERE id = ?")
                .bind(last_name)
                .bind(client_id)
                .execute(&mut *tx)
                .await?;
        }

        if let Some(email) = &update.email {
            sqlx::query("UPDATE clients SET email = ? WHERE id = ?")
                .bind(email)
                .bind(client_id)
                .execute(&mut *tx)
                .await?;
        }

        if let Some(phones) = &update.phones {
            sqlx::query("DELETE FROM phones WHERE client_id = ?")
                .bind(client_id)
                .execute(&mut *tx)
                .await?;

            for phone in phones {
                sqlx::query("INSERT INTO phones (client_id, phone_number) VALUES (?, ?)")
                    .bind(client_id)
                    .bind(phone)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        debug!(client_id, "client updated");
        Ok(())
    }

    /// Delete phone rows matching both the client and the exact number
    /// text. Returns the number of rows removed; zero matches is a no-op,
    /// not an error.
    pub async fn delete_phone(
        &self,
        client_id: i64,
        phone_number: &str,
    ) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM phones WHERE client_id = ? AND phone_number = ?")
            .bind(client_id)
            .bind(phone_number)
            .execute(&self.pool)
            .await?;
        debug!(client_id, removed = result.rows_affected(), "phone deleted");
        Ok(result.rows_affected())
    }

    /// Delete a client and every phone number it owns, in one transaction.
    ///
    /// Phones go first: the foreign key would reject removing a client
    /// that still owns rows.
    pub async fn delete_client(&self, client_id: i64) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM phones WHERE client_id = ?")
            .bind(client_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(client_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!(client_id, "client deleted");
        Ok(())
    }

    /// Search clients by any of the four criteria, OR-ed together.
    ///
    /// A criterion participates only when present, so omitted filters
    /// never match; with no criteria at all the result is empty. Clients
    /// are joined to their phones: a match yields one row per phone, or a
    /// single row with a null phone.
    pub async fn find_clients(
        &self,
        filter: &ClientFilter,
    ) -> Result<Vec<ClientMatch>, StorageError> {
        let matches = sqlx::query_as::<_, ClientMatch>(
            r#"
            SELECT c.id, c.first_name, c.last_name, c.email, p.phone_number
            FROM clients c
            LEFT JOIN phones p ON p.client_id = c.id
            WHERE (?1 IS NOT NULL AND c.first_name = ?1)
               OR (?2 IS NOT NULL AND c.last_name = ?2)
               OR (?3 IS NOT NULL AND c.email = ?3)
               OR (?4 IS NOT NULL AND p.phone_number = ?4)
            ORDER BY c.id
            "#,
        )
        .bind(filter.first_name.as_deref())
        .bind(filter.last_name.as_deref())
        .bind(filter.email.as_deref())
        .bind(filter.phone.as_deref())
        .fetch_all(&self.pool)
        .await?;
        Ok(matches)
    }
}
