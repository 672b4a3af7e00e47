//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates resource workflows from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Every function is generic over `ConnectionTrait` so it runs on the pool
//!   or inside a request-scoped transaction.

pub mod bike_service;
pub mod catalog_service;
pub mod client_service;
pub mod dto;
pub mod errors;
pub mod rental_service;
pub mod shop_service;

#[cfg(test)]
pub mod test_support;
