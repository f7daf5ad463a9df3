pub mod list_subscribers;
pub mod subscribe;
pub mod unsubscribe;
