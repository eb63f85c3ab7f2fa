//! Domain value objects and types.
//!
//! Dialable phone numbers and the caller-ID rotation pool. Value objects
//! validate at construction time so an invalid number can never reach the
//! call placement layer.

pub mod errors;
pub mod number_pool;
pub mod phone;

pub use errors::ValidationError;
pub use number_pool::NumberPool;
pub use phone::{NormalizedPhone, PhoneNormalizer};
