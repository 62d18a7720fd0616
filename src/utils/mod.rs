pub mod error;
pub mod logger;
pub mod type_check;
pub mod validation;
