pub mod ports;
pub mod team_use_cases;
pub mod use_cases;

pub use team_use_cases::TeamUseCases;
