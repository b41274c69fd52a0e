//! Order domain: creation, lifecycle transitions, expiration, member resolution, rendering.

pub mod creation;
pub mod lifecycle;
pub mod resolver;
pub mod scheduler;
pub mod view;

pub use creation::{create_order, parse_expire_hours, OrderForm};
pub use lifecycle::{apply_action, is_customer, OrderAction};
pub use resolver::{resolve_customer, resolve_member, Customer, Resolution};
pub use scheduler::{ExpirationScheduler, RearmSummary};
pub use view::OrderView;
