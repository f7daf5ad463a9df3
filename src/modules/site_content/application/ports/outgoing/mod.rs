pub mod about_store;
pub mod contact_settings_store;

pub use about_store::{AboutData, AboutStore, AboutStoreError, AboutView, ImpactStat};
pub use contact_settings_store::{
    ContactSettingsData, ContactSettingsStore, ContactSettingsStoreError, ContactSettingsView,
};
