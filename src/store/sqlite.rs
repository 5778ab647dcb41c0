// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::path::Path;
use std::str::FromStr;
use crate::store::{error::StoreError, models::{Cafe, NewCafe}, traits::CafeStore};
use tracing::{debug, info};

const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, seats, \
    has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

pub struct SqliteCafeStore {
    pool: SqlitePool,
}

impl SqliteCafeStore {
    /// Open (creating if missing) the database file and make sure the schema exists.
    /// A path of `:memory:` opens a throwaway in-memory database instead.
    pub async fn new(db_path: &Path) -> anyhow::Result<Self> {
        if db_path == Path::new(":memory:") {
            return Self::in_memory().await;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        let store = Self { pool };
        store.init_schema().await?;

        Ok(store)
    }

    /// Private in-memory database. Pinned to a single connection, since every
    /// SQLite `:memory:` connection sees its own database.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;

        Ok(store)
    }

    async fn init_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS cafe (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(250) NOT NULL UNIQUE,
                map_url VARCHAR(500) NOT NULL,
                img_url VARCHAR(500) NOT NULL,
                location VARCHAR(250) NOT NULL,
                seats VARCHAR(250) NOT NULL,
                has_toilet BOOLEAN NOT NULL,
                has_wifi BOOLEAN NOT NULL,
                has_sockets BOOLEAN NOT NULL,
                can_take_calls BOOLEAN NOT NULL,
                coffee_price VARCHAR(250)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Initialized SQLite cafe schema");
        Ok(())
    }

    fn cafe_from_row(row: &SqliteRow) -> Result<Cafe, sqlx::Error> {
        Ok(Cafe {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            map_url: row.try_get("map_url")?,
            img_url: row.try_get("img_url")?,
            location: row.try_get("location")?,
            seats: row.try_get("seats")?,
            has_toilet: row.try_get("has_toilet")?,
            has_wifi: row.try_get("has_wifi")?,
            has_sockets: row.try_get("has_sockets")?,
            can_take_calls: row.try_get("can_take_calls")?,
            coffee_price: row.try_get("coffee_price")?,
        })
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

#[async_trait]
impl CafeStore for SqliteCafeStore {
    async fn list_cafes(&self) -> Result<Vec<Cafe>, StoreError> {
        let rows = sqlx::query(&format!("SELECT {CAFE_COLUMNS} FROM cafe ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        let cafes = rows
            .iter()
            .map(Self::cafe_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(cafes)
    }

    async fn get_cafe(&self, id: i64) -> Result<Option<Cafe>, StoreError> {
        let row = sqlx::query(&format!("SELECT {CAFE_COLUMNS} FROM cafe WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::cafe_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_location(&self, location: &str) -> Result<Option<Cafe>, StoreError> {
        let row = sqlx::query(&format!(
            "SELECT {CAFE_COLUMNS} FROM cafe WHERE location = ?1 ORDER BY id LIMIT 1"
        ))
        .bind(location)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(Self::cafe_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn add_cafe(&self, cafe: NewCafe) -> Result<Cafe, StoreError> {
        // A single INSERT takes the write lock up front and waits on the busy
        // timeout; the UNIQUE constraint is the name check.
        let result = sqlx::query(
            r#"
            INSERT INTO cafe (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&cafe.name)
        .bind(&cafe.map_url)
        .bind(&cafe.img_url)
        .bind(&cafe.location)
        .bind(&cafe.seats)
        .bind(cafe.has_toilet)
        .bind(cafe.has_wifi)
        .bind(cafe.has_sockets)
        .bind(cafe.can_take_calls)
        .bind(&cafe.coffee_price)
        .execute(&self.pool)
        .await;

        let result = match result {
            Ok(result) => result,
            Err(e) if is_unique_violation(&e) => return Err(StoreError::DuplicateName(cafe.name)),
            Err(e) => return Err(e.into()),
        };

        let id = result.last_insert_rowid();
        info!(cafe_id = id, name = %cafe.name, "Added cafe");
        Ok(cafe.into_cafe(id))
    }

    async fn update_price(&self, id: i64, new_price: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE cafe SET coffee_price = ?2 WHERE id = ?1")
            .bind(id)
            .bind(new_price)
            .execute(&self.pool)
            .await?;

        let updated = result.rows_affected() > 0;
        if updated {
            info!(cafe_id = id, new_price = %new_price, "Updated cafe price");
        } else {
            debug!(cafe_id = id, "No cafe to update");
        }

        Ok(updated)
    }

    async fn remove_cafe(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM cafe WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected() > 0;
        if removed {
            info!(cafe_id = id, "Removed cafe");
        }

        Ok(removed)
    }
}
