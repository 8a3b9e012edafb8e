pub mod aggregate;

pub use aggregate::{Order, OrderDto, OrderId, OrderStatus};
