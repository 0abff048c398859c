pub mod basic_auth;
pub mod json;
pub mod path;
pub mod validate;
