pub mod newsletter_use_cases;
pub mod ports;
pub mod use_cases;

pub use newsletter_use_cases::NewsletterUseCases;
