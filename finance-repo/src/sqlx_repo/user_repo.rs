use crate::sqlx_repo::SQLxRepo;
use crate::user_repo::{NewUser, User, UserId, UserRepo, UserRepoError};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{query, query_as};
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct UserEntry {
    id: i32,
    username: String,
    email: String,
    password: String,
}

impl From<UserEntry> for User {
    fn from(value: UserEntry) -> Self {
        User::new(value.id, value.username, value.email, value.password)
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map_or(false, |db_err| db_err.is_unique_violation())
}

#[async_trait]
impl UserRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_all_users(&self) -> Result<Vec<User>, UserRepoError> {
        let users = query_as::<_, UserEntry>(
            "SELECT id, username, email, password FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Unable to get users")?
        .into_iter()
        .map(|user_entry| user_entry.into())
        .collect();
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError> {
        let user: Option<UserEntry> =
            query_as("SELECT id, username, email, password FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get user {}", user_id))?;
        user.map(|u| u.into())
            .ok_or(UserRepoError::UserNotFound(user_id))
    }

    #[instrument(skip(self))]
    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepoError> {
        let user: Option<UserEntry> =
            query_as("SELECT id, username, email, password FROM users WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get user {}", username))?;
        user.map(|u| u.into())
            .ok_or_else(|| UserRepoError::UsernameNotFound(username.to_owned()))
    }

    #[instrument(skip(self, new_user))]
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let result = query_as::<_, UserEntry>(
            "INSERT INTO users(username, email, password) VALUES ($1, $2, $3) RETURNING id, username, email, password",
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user_entry) => Ok(user_entry.into()),
            Err(e) if is_unique_violation(&e) => {
                Err(UserRepoError::UsernameTaken(new_user.username))
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Unable to create user {}", new_user.username))
                .into()),
        }
    }

    #[instrument(skip(self, updated_user))]
    async fn update_user(
        &self,
        user_id: UserId,
        updated_user: NewUser,
    ) -> Result<User, UserRepoError> {
        let result = query_as::<_, UserEntry>(
            "UPDATE users SET username = $1, email = $2, password = $3 WHERE id = $4 RETURNING id, username, email, password",
        )
        .bind(&updated_user.username)
        .bind(&updated_user.email)
        .bind(&updated_user.password)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(user_entry)) => Ok(user_entry.into()),
            Ok(None) => Err(UserRepoError::UserNotFound(user_id)),
            Err(e) if is_unique_violation(&e) => {
                Err(UserRepoError::UsernameTaken(updated_user.username))
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Unable to update user {}", user_id))
                .into()),
        }
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepoError> {
        let result = query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to delete user {}", user_id))?;
        if result.rows_affected() == 1 {
            Ok(())
        } else {
            Err(UserRepoError::UserNotFound(user_id))
        }
    }
}
