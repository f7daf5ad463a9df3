pub mod by_category;
pub mod create;
pub mod delete;
pub mod featured;
pub mod get;
pub mod list;
pub mod public_list;
pub mod public_read;
pub mod update;
