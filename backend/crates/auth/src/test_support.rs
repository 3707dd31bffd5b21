//! Test doubles shared by the auth test modules

use std::sync::Mutex;

use chrono::Utc;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, UserId};
use crate::error::AuthResult;

/// In-memory user store; ids are assigned sequentially starting at 1
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: Mutex<i64>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id.as_i64()).max().unwrap_or(0) + 1;
        Self {
            users: Mutex::new(users),
            next_id: Mutex::new(next_id),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            let id = *next;
            *next += 1;
            id
        };
        let created = User::from_new(user.clone(), UserId::from_i64(id), Utc::now());
        self.users.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }
}
