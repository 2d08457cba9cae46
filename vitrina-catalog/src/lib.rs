pub mod product;
pub mod registry;

pub use product::{Product, ProductError, MAX_NAME_LEN, MIN_PRICE};
pub use registry::Registry;
