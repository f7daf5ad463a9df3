pub mod inquiry_repository;

pub use inquiry_repository::{
    InquiryRepository, InquiryRepositoryError, InquiryView, NewInquiryData,
};
