pub mod auth;
pub mod blog;
pub mod inquiry;
pub mod newsletter;
pub mod services;
pub mod site_content;
pub mod team;
pub mod uploads;
