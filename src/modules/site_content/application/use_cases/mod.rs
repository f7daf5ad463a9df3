pub mod about;
pub mod contact_settings;
