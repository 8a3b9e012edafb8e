//! Shared contract types for the grocery storefront: domain aggregates,
//! wire DTOs and the client-held basket value object.

pub mod basket;
pub mod domain;
