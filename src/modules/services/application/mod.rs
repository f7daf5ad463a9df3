pub mod ports;
pub mod service_use_cases;
pub mod use_cases;

pub use service_use_cases::ServiceUseCases;
