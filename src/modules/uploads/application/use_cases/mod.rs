pub mod delete_image;
pub mod upload_image;
