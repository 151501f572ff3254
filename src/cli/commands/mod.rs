pub mod auth;
pub mod serve;
