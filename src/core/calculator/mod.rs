pub mod aggregate;
pub mod month;
pub mod summary;
