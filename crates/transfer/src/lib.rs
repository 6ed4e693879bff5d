//! Async HTTP client for uploading files to and downloading files from the files API

mod client;
mod download;
pub mod error;
pub mod settings;
mod upload;

pub use client::TransferClient;
pub use common::UploadMetadata;
pub use error::{Result, TransferError};
pub use settings::ClientSettings;
