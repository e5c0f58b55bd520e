//! Typed records for the three backend resources.
//!
//! Response records ([`User`], [`Product`], [`Order`], [`OrderItem`]) are
//! deserialized from envelope payloads. Request bodies ([`NewUser`],
//! [`NewProduct`], [`NewOrder`], [`OrderItemInput`]) are serialized as-is;
//! the backend performs all validation.
//!
//! Fields the backend may omit are `Option`s that are skipped when absent, so
//! a record serializes back to the same shape it was read from. Unknown
//! fields are ignored, and optional timestamps or amounts the client cannot
//! read decode as `None` rather than failing the record.

mod lenient;
mod order;
mod product;
mod user;

pub use order::{NewOrder, Order, OrderItem, OrderItemInput};
pub use product::{NewProduct, Product};
pub use user::{NewUser, User};
