pub mod list_inquiries;
pub mod submit_inquiry;
