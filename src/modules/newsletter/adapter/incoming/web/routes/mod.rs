pub mod list;
pub mod subscribe;
pub mod unsubscribe;
