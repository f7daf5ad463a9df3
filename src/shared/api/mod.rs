pub mod json_config;
pub mod response;

pub use response::{ApiResponse, Pagination};
