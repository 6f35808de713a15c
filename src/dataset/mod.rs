pub mod client;
pub mod models;
pub mod source;

pub use client::{DatasetClient, DatasetError};
pub use models::Game;
pub use source::GameSource;
