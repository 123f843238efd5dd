use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
    Pool, Row, Sqlite,
};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use shared::{
    domain::{UserId, UserRecord},
    protocol::{NewUser, UserUpdate},
};

const USER_COLUMNS: &str = "id, name, surname, age, created_at, updated_at";

#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn new(database_url: &str) -> Result<Self> {
        ensure_sqlite_parent_dir_exists(database_url)?;

        let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        // Every in-memory connection is its own database, so keep exactly one alive.
        let pool_options = if is_memory_url(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };
        let pool = pool_options.connect_with(connect_options).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(%database_url, "users database ready");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<UserRecord> {
        let now = Utc::now();
        let row = sqlx::query(&format!(
            "INSERT INTO users (name, surname, age, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.name)
        .bind(&user.surname)
        .bind(user.age)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .context("failed to insert user")?;
        user_from_row(&row)
    }

    pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let rows = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .context("failed to list users")?;
        rows.iter().map(user_from_row).collect()
    }

    pub async fn get_user(&self, user_id: UserId) -> Result<Option<UserRecord>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(user_id.0)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("failed to load user {user_id}"))?;
        row.as_ref().map(user_from_row).transpose()
    }

    /// Applies the non-zero fields of `changes` to an existing user.
    ///
    /// Empty strings and a zero age leave the stored value in place. Returns
    /// `None` when no user has the given id.
    pub async fn update_user(
        &self,
        user_id: UserId,
        changes: &UserUpdate,
    ) -> Result<Option<UserRecord>> {
        let row = sqlx::query(&format!(
            "UPDATE users SET
                name = CASE WHEN ?1 <> '' THEN ?1 ELSE name END,
                surname = CASE WHEN ?2 <> '' THEN ?2 ELSE surname END,
                age = CASE WHEN ?3 <> 0 THEN ?3 ELSE age END,
                updated_at = ?4
             WHERE id = ?5
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&changes.name)
        .bind(&changes.surname)
        .bind(changes.age)
        .bind(Utc::now())
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("failed to update user {user_id}"))?;
        row.as_ref().map(user_from_row).transpose()
    }

    /// Permanently removes a user. Returns whether a row was deleted.
    pub async fn delete_user(&self, user_id: UserId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id.0)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to delete user {user_id}"))?;
        Ok(result.rows_affected() > 0)
    }
}

fn user_from_row(row: &SqliteRow) -> Result<UserRecord> {
    Ok(UserRecord {
        id: UserId(row.try_get::<i64, _>("id")?),
        name: row.try_get("name")?,
        surname: row.try_get("surname")?,
        age: row.try_get("age")?,
        created_at: Some(row.try_get::<DateTime<Utc>, _>("created_at")?),
        updated_at: Some(row.try_get::<DateTime<Utc>, _>("updated_at")?),
    })
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.starts_with("sqlite::memory:") || database_url.contains("mode=memory")
}

fn ensure_sqlite_parent_dir_exists(database_url: &str) -> Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };

    let Some(parent) = path.parent() else {
        return Ok(());
    };

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for database url '{database_url}'",
            parent.display()
        )
    })?;

    Ok(())
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if is_memory_url(database_url) || !database_url.starts_with("sqlite:") {
        return None;
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    Some(Path::new(path).to_path_buf())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
