//! Credentials Entity
//!
//! Authentication data for a user, kept apart from the profile so that
//! handlers never carry a password hash around.

use crate::domain::value_object::{user_id::UserId, user_password::UserPassword};

#[derive(Debug, Clone)]
pub struct Credentials {
    pub user_id: UserId,
    pub password_hash: UserPassword,
}
