//! Session User Capability
//!
//! What request handlers may ask of "whoever is on the other end":
//! an id, and whether they are signed in.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_id::UserId;

pub trait SessionUser {
    /// Id of the signed-in user, `None` for anonymous visitors
    fn session_user_id(&self) -> Option<UserId>;

    fn is_authenticated(&self) -> bool {
        self.session_user_id().is_some()
    }
}

impl SessionUser for User {
    fn session_user_id(&self) -> Option<UserId> {
        Some(self.user_id)
    }
}

/// Authentication state of the current request
#[derive(Debug, Clone, Default)]
pub enum Viewer {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Viewer {
    pub fn user(&self) -> Option<&User> {
        match self {
            Viewer::Anonymous => None,
            Viewer::Authenticated(user) => Some(user),
        }
    }
}

impl SessionUser for Viewer {
    fn session_user_id(&self) -> Option<UserId> {
        self.user().and_then(SessionUser::session_user_id)
    }
}
