pub mod inquiry_use_cases;
pub mod ports;
pub mod use_cases;

pub use inquiry_use_cases::InquiryUseCases;
