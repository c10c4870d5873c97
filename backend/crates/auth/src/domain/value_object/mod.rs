//! Value Object Module

pub mod display_name;
pub mod email;
pub mod login;
pub mod phone_number;
pub mod user_id;
pub mod user_password;
