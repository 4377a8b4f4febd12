//! PostgreSQL-backed repositories.
//!
//! Create-if-absent relies on the primary key and unique constraints;
//! update-if-exists and delete check the affected row count.

use std::collections::HashMap;

use async_trait::async_trait;
use domain::repository::{Result, missing_ids_key};
use domain::{
    CIRCLE_ENTITY, Circle, CircleId, CircleKey, CircleName, CircleRepository, MailAddress,
    RepositoryError, USER_ENTITY, User, UserId, UserKey, UserName, UserRepository,
};
use sqlx::error::ErrorKind;
use sqlx::{PgPool, Row, postgres::PgRow};

/// Runs the schema migrations shipped with this crate.
pub async fn run_migrations(pool: &PgPool) -> std::result::Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Translates a driver error, turning constraint violations into domain-level
/// repository errors. `duplicate_key` names the key behind a unique violation.
fn map_db_error(
    entity: &'static str,
    err: sqlx::Error,
    duplicate_key: impl FnOnce(Option<&str>) -> String,
) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err {
        match db_err.kind() {
            ErrorKind::UniqueViolation => {
                return RepositoryError::Duplicate {
                    entity,
                    key: duplicate_key(db_err.constraint()),
                };
            }
            ErrorKind::CheckViolation => {
                return RepositoryError::Argument(format!(
                    "{entity} violates {}",
                    db_err.constraint().unwrap_or("a check constraint")
                ));
            }
            _ => {}
        }
    }
    backend(err)
}

fn backend(err: sqlx::Error) -> RepositoryError {
    tracing::warn!(error = %err, "postgres query failed");
    RepositoryError::Backend(Box::new(err))
}

fn decode_failure(entity: &'static str, err: domain::DomainError) -> RepositoryError {
    RepositoryError::Type {
        entity,
        reason: err.to_string(),
    }
}

/// PostgreSQL implementation of [`UserRepository`].
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_user(row: PgRow) -> Result<User> {
        let id: String = row.try_get("id").map_err(backend)?;
        let name: String = row.try_get("name").map_err(backend)?;
        let mail_address: String = row.try_get("mail_address").map_err(backend)?;

        let decode = |e| decode_failure(USER_ENTITY, e);
        Ok(User::rehydrate(
            UserId::new(id).map_err(decode)?,
            UserName::new(name).map_err(decode)?,
            MailAddress::new(mail_address).map_err(decode)?,
        ))
    }

    fn duplicate_key(user: &User, constraint: Option<&str>) -> String {
        let key = match constraint {
            Some("users_name_key") => UserKey::Name(user.name().clone()),
            Some("users_mail_address_key") => UserKey::MailAddress(user.mail_address().clone()),
            _ => UserKey::Id(user.id().clone()),
        };
        key.to_string()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &User) -> Result<()> {
        sqlx::query("INSERT INTO users (id, name, mail_address) VALUES ($1, $2, $3)")
            .bind(user.id().value())
            .bind(user.name().value())
            .bind(user.mail_address().value())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(USER_ENTITY, e, |c| Self::duplicate_key(user, c)))?;

        Ok(())
    }

    async fn get(&self, key: &UserKey) -> Result<User> {
        let (column, value) = match key {
            UserKey::Id(id) => ("id", id.value()),
            UserKey::Name(name) => ("name", name.value()),
            UserKey::MailAddress(address) => ("mail_address", address.value()),
        };

        let row: Option<PgRow> = sqlx::query(&format!(
            "SELECT id, name, mail_address FROM users WHERE {column} = $1"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        match row {
            Some(row) => Self::row_to_user(row),
            None => Err(RepositoryError::not_found(USER_ENTITY, key)),
        }
    }

    async fn update(&self, user: &User) -> Result<()> {
        let result = sqlx::query("UPDATE users SET name = $2, mail_address = $3 WHERE id = $1")
            .bind(user.id().value())
            .bind(user.name().value())
            .bind(user.mail_address().value())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(USER_ENTITY, e, |c| Self::duplicate_key(user, c)))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(
                USER_ENTITY,
                UserKey::Id(user.id().clone()),
            ));
        }
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(
                USER_ENTITY,
                UserKey::Id(id.clone()),
            ));
        }
        Ok(())
    }

    async fn batch_get(&self, ids: &[UserId]) -> Result<Vec<User>> {
        let wanted: Vec<String> = ids.iter().map(|id| id.value().to_string()).collect();

        let rows = sqlx::query("SELECT id, name, mail_address FROM users WHERE id = ANY($1)")
            .bind(wanted)
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;

        let mut found: HashMap<UserId, User> = HashMap::with_capacity(rows.len());
        for row in rows {
            let user = Self::row_to_user(row)?;
            found.insert(user.id().clone(), user);
        }

        let missing: Vec<&UserId> = ids.iter().filter(|id| !found.contains_key(*id)).collect();
        if !missing.is_empty() {
            return Err(RepositoryError::not_found(
                USER_ENTITY,
                missing_ids_key(&missing),
            ));
        }

        Ok(ids.iter().filter_map(|id| found.get(id).cloned()).collect())
    }
}

/// PostgreSQL implementation of [`CircleRepository`].
#[derive(Clone)]
pub struct PostgresCircleRepository {
    pool: PgPool,
}

impl PostgresCircleRepository {
    /// Creates a repository over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_circle(row: PgRow) -> Result<Circle> {
        let id: String = row.try_get("id").map_err(backend)?;
        let name: String = row.try_get("name").map_err(backend)?;
        let owner_id: String = row.try_get("owner_id").map_err(backend)?;
        let member_ids: Vec<String> = row.try_get("member_ids").map_err(backend)?;

        let decode = |e| decode_failure(CIRCLE_ENTITY, e);
        let members = member_ids
            .into_iter()
            .map(UserId::new)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(decode)?;

        Circle::rehydrate(
            CircleId::new(id).map_err(decode)?,
            CircleName::new(name).map_err(decode)?,
            UserId::new(owner_id).map_err(decode)?,
            members,
        )
        .map_err(decode)
    }

    fn member_values(circle: &Circle) -> Vec<String> {
        circle
            .members()
            .iter()
            .map(|member| member.value().to_string())
            .collect()
    }

    fn duplicate_key(circle: &Circle, constraint: Option<&str>) -> String {
        let key = match constraint {
            Some("circles_name_key") => CircleKey::Name(circle.name().clone()),
            _ => CircleKey::Id(circle.id().clone()),
        };
        key.to_string()
    }
}

#[async_trait]
impl CircleRepository for PostgresCircleRepository {
    async fn create(&self, circle: &Circle) -> Result<()> {
        sqlx::query(
            "INSERT INTO circles (id, name, owner_id, member_ids) VALUES ($1, $2, $3, $4)",
        )
        .bind(circle.id().value())
        .bind(circle.name().value())
        .bind(circle.owner_id().value())
        .bind(Self::member_values(circle))
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(CIRCLE_ENTITY, e, |c| Self::duplicate_key(circle, c)))?;

        Ok(())
    }

    async fn get(&self, key: &CircleKey) -> Result<Circle> {
        let (column, value) = match key {
            CircleKey::Id(id) => ("id", id.value()),
            CircleKey::Name(name) => ("name", name.value()),
        };

        let row: Option<PgRow> = sqlx::query(&format!(
            "SELECT id, name, owner_id, member_ids FROM circles WHERE {column} = $1"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        match row {
            Some(row) => Self::row_to_circle(row),
            None => Err(RepositoryError::not_found(CIRCLE_ENTITY, key)),
        }
    }

    async fn update(&self, circle: &Circle) -> Result<()> {
        let result = sqlx::query(
            "UPDATE circles SET name = $2, owner_id = $3, member_ids = $4 WHERE id = $1",
        )
        .bind(circle.id().value())
        .bind(circle.name().value())
        .bind(circle.owner_id().value())
        .bind(Self::member_values(circle))
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(CIRCLE_ENTITY, e, |c| Self::duplicate_key(circle, c)))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(
                CIRCLE_ENTITY,
                CircleKey::Id(circle.id().clone()),
            ));
        }
        Ok(())
    }

    async fn delete(&self, id: &CircleId) -> Result<()> {
        let result = sqlx::query("DELETE FROM circles WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(
                CIRCLE_ENTITY,
                CircleKey::Id(id.clone()),
            ));
        }
        Ok(())
    }

    async fn batch_get(&self, ids: &[CircleId]) -> Result<Vec<Circle>> {
        let wanted: Vec<String> = ids.iter().map(|id| id.value().to_string()).collect();

        let rows = sqlx::query(
            "SELECT id, name, owner_id, member_ids FROM circles WHERE id = ANY($1)",
        )
        .bind(wanted)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        let mut found: HashMap<CircleId, Circle> = HashMap::with_capacity(rows.len());
        for row in rows {
            let circle = Self::row_to_circle(row)?;
            found.insert(circle.id().clone(), circle);
        }

        let missing: Vec<&CircleId> = ids.iter().filter(|id| !found.contains_key(*id)).collect();
        if !missing.is_empty() {
            return Err(RepositoryError::not_found(
                CIRCLE_ENTITY,
                missing_ids_key(&missing),
            ));
        }

        Ok(ids.iter().filter_map(|id| found.get(id).cloned()).collect())
    }
}
