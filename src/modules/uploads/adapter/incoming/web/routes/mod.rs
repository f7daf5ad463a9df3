pub mod delete;
pub mod upload;
