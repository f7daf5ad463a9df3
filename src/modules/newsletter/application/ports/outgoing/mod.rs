pub mod subscriber_repository;

pub use subscriber_repository::{SubscriberRepository, SubscriberRepositoryError, SubscriberView};
