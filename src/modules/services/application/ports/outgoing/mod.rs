pub mod service_query;
pub mod service_repository;

pub use service_query::{
    ProcessStep, ServiceListFilter, ServiceQuery, ServiceQueryError, ServiceSort, ServiceView,
};
pub use service_repository::{
    NewServiceData, ServicePatch, ServiceRepository, ServiceRepositoryError,
};
