//! Interaction handlers: menu command, form opener, order creation, customer actions.

mod create_order_handler;
mod menu_handler;
mod open_form_handler;
mod order_action_handler;

pub use create_order_handler::CreateOrderHandler;
pub use menu_handler::MenuHandler;
pub use open_form_handler::OpenFormHandler;
pub use order_action_handler::OrderActionHandler;
