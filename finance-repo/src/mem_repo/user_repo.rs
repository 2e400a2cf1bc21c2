use crate::user_repo::UserRepoError::{UserNotFound, UsernameNotFound, UsernameTaken};
use crate::user_repo::{NewUser, User, UserId, UserRepo, UserRepoError};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct State {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

impl State {
    fn username_taken(&self, username: &str, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|u| u.username == username && Some(u.id) != except)
    }
}

pub struct MemUserRepo {
    state: RwLock<State>,
}

impl MemUserRepo {
    pub fn new() -> MemUserRepo {
        let state = State {
            users: BTreeMap::new(),
            next_id: 1,
        };
        MemUserRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

impl Default for MemUserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepo for MemUserRepo {
    async fn get_all_users(&self) -> Result<Vec<User>, UserRepoError> {
        let read_guard = self.read_lock()?;

        Ok(read_guard.users.values().cloned().collect())
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .users
            .get(&user_id)
            .cloned()
            .ok_or(UserNotFound(user_id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| UsernameNotFound(username.to_owned()))
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let mut write_guard = self.write_lock()?;

        if write_guard.username_taken(&new_user.username, None) {
            return Err(UsernameTaken(new_user.username));
        }

        let id = write_guard.next_id;
        write_guard.next_id += 1;

        let user = new_user.to_user(id);
        write_guard.users.insert(id, user.clone());

        Ok(user)
    }

    async fn update_user(
        &self,
        user_id: UserId,
        updated_user: NewUser,
    ) -> Result<User, UserRepoError> {
        let mut write_guard = self.write_lock()?;

        if write_guard.username_taken(&updated_user.username, Some(user_id)) {
            return Err(UsernameTaken(updated_user.username));
        }

        match write_guard.users.entry(user_id) {
            Entry::Occupied(mut e) => {
                let user = updated_user.to_user(user_id);
                e.insert(user.clone());
                Ok(user)
            }
            Entry::Vacant(_) => Err(UserNotFound(user_id)),
        }
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepoError> {
        let mut write_guard = self.write_lock()?;

        if write_guard.users.remove(&user_id).is_some() {
            Ok(())
        } else {
            Err(UserNotFound(user_id))
        }
    }
}
