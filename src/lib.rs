pub mod asset;
pub mod commands;
pub mod error;
pub mod http;
pub mod package;
pub mod release;
pub mod runtime;
