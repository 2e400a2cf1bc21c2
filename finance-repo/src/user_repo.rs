use async_trait::async_trait;
use thiserror::Error;

pub type UserId = i32;

#[async_trait]
pub trait UserRepo: Sync + Send {
    async fn get_all_users(&self) -> Result<Vec<User>, UserRepoError>;
    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError>;
    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepoError>;
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError>;
    async fn update_user(
        &self,
        user_id: UserId,
        updated_user: NewUser,
    ) -> Result<User, UserRepoError>;
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepoError>;
}

#[derive(Clone, PartialEq, Debug)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl User {
    pub const fn new(id: UserId, username: String, email: String, password: String) -> User {
        User {
            id,
            username,
            email,
            password,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub const fn new(username: String, email: String, password: String) -> NewUser {
        NewUser {
            username,
            email,
            password,
        }
    }

    pub fn to_user(self, id: UserId) -> User {
        User::new(id, self.username, self.email, self.password)
    }
}

impl From<User> for NewUser {
    fn from(user: User) -> Self {
        NewUser::new(user.username, user.email, user.password)
    }
}

#[derive(Error, Debug)]
pub enum UserRepoError {
    #[error("User {0} not found")]
    UserNotFound(UserId),
    #[error("No user with username {0}")]
    UsernameNotFound(String),
    #[error("Username {0} is already taken")]
    UsernameTaken(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
