pub mod active_members;
pub mod create_member;
pub mod delete_member;
pub mod get_member;
pub mod list_members;
pub mod update_member;
