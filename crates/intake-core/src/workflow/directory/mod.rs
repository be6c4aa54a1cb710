pub mod batch;
pub mod cascade;
pub mod college;
pub mod mapper;
pub mod reconcile;
pub mod school;
