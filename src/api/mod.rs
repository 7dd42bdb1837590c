pub mod client;
pub mod models;

pub use client::{AssetClient, AssetSource, ByteStream, FetchError};
pub use models::ClientConfig;
