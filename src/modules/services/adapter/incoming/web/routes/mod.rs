pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod public_list;
pub mod public_read;
pub mod update;
