use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{corrupt, map_db_err};
use crate::domain::error::DomainResult;
use crate::domain::repositories::UserRepository;
use crate::domain::user::{Email, Role, User};

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: PgRow) -> DomainResult<User> {
    let email: String = row.try_get("email").map_err(map_db_err)?;
    let roles: Vec<String> = row.try_get("roles").map_err(map_db_err)?;
    Ok(User {
        id: row.try_get("id").map_err(map_db_err)?,
        email: Email::new(&email).map_err(|e| corrupt("email", e))?,
        password_hash: row.try_get("password_hash").map_err(map_db_err)?,
        first_name: row.try_get("first_name").map_err(map_db_err)?,
        last_name: row.try_get("last_name").map_err(map_db_err)?,
        roles: roles
            .iter()
            .map(|r| r.parse::<Role>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| corrupt("role", e))?,
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> DomainResult<Uuid> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, first_name, last_name, roles)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(
            user.roles
                .iter()
                .map(|r| r.as_str().to_string())
                .collect::<Vec<_>>(),
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(user.id)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, first_name, last_name, roles
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, first_name, last_name, roles
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        row.map(row_to_user).transpose()
    }
}
