pub mod config;
pub mod error;
pub mod listing;
pub mod metadata;
pub mod protocol;
pub mod server;

pub use error::FsMetaError;
pub type Result<T> = std::result::Result<T, FsMetaError>;
