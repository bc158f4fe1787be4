pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod password;
pub mod store;
pub mod vault;
