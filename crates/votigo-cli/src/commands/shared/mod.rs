pub mod auth;
pub mod limit;
pub mod parse;
