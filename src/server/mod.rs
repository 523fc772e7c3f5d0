pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod upstream;
pub use upstream::*;

pub mod auth;
pub use auth::*;

pub mod envelope;
pub use envelope::*;

pub mod http;
pub use http::*;
