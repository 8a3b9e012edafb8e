pub mod aggregate;

pub use aggregate::{SearchTerm, TopSearch, TopTermEntry};
