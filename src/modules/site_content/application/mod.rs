pub mod ports;
pub mod site_content_use_cases;
pub mod use_cases;

pub use site_content_use_cases::SiteContentUseCases;
