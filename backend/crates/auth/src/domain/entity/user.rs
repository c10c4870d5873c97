//! User Entity
//!
//! Public profile of a registered author. The password hash lives in
//! [`Credentials`](super::credentials::Credentials) and is only loaded at sign-in.

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, login::Login, phone_number::PhoneNumber,
    user_id::UserId, user_password::UserPassword,
};

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    /// Unique, used to sign in
    pub login: Login,
    pub name: DisplayName,
    /// Unique
    pub email: Email,
    pub phone_number: Option<PhoneNumber>,
}

/// A user that has not been inserted yet; the database assigns the id.
#[derive(Debug)]
pub struct NewUser {
    pub login: Login,
    pub password_hash: UserPassword,
    pub name: DisplayName,
    pub email: Email,
    pub phone_number: Option<PhoneNumber>,
}

impl NewUser {
    /// Attach the id assigned on insert
    pub fn into_user(self, user_id: UserId) -> User {
        User {
            user_id,
            login: self.login,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}
