pub mod ports;
pub mod upload_config;
pub mod upload_use_cases;
pub mod use_cases;

pub use upload_config::UploadConfig;
pub use upload_use_cases::UploadUseCases;
