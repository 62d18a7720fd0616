pub mod client;
pub mod navigator;
pub mod router;
pub mod views;

pub use crate::domain::model::{Movie, OutputFormat};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
