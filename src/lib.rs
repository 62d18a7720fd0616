pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, AppConfig};
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{
    client::WebservicesClient,
    navigator::Navigator,
    router::{Route, RouteTable, ViewBinding},
    views::{default_routes, View, ViewContext},
};
pub use domain::model::{Movie, OutputFormat};
pub use utils::error::{ConsumerError, Result};
pub use utils::type_check::{is_number, is_numeric, Value};
