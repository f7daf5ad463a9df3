pub mod active_services;
pub mod create_service;
pub mod delete_service;
pub mod get_service;
pub mod list_services;
pub mod read_active_service;
pub mod update_service;
