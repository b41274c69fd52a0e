//! Rendering of menus, the creation form, and announcement messages.
//!
//! Everything here is a pure function of its input. In particular the announcement view is
//! derived from the order record alone, so re-rendering after any status change always
//! yields the matching colour, footer and button state.

use storage::{Order, OrderStatus};

use super::lifecycle::OrderAction;
pub use crate::core::types::{
    ButtonKind, ButtonView, EmbedField, FormField, FormView, InputStyle, MenuView, OrderView,
};

pub const MENU_COMMAND: &str = "order-menu";
pub const MENU_COMMAND_DESCRIPTION: &str = "Show the order management menu";
pub const CREATE_ORDER_BUTTON_ID: &str = "btn_create_order";
pub const CREATE_ORDER_MODAL_ID: &str = "modal_create_order";

pub const FIELD_PRODUCT: &str = "product";
pub const FIELD_CUSTOMER: &str = "customer";
pub const FIELD_EXPIRE_HOURS: &str = "expire_hours";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_NOTE: &str = "note";

/// Stored when the note field is left empty.
pub const NO_NOTE: &str = "No note";

pub const FOOTER_ACCEPTED: &str = "Customer accepted the order";
pub const FOOTER_DENIED: &str = "Customer denied the order";
pub const FOOTER_EXPIRED: &str = "Expired";

pub const COLOR_MENU: u32 = 0x2B8EFF;
pub const COLOR_PENDING: u32 = 0x3498DB;
pub const COLOR_ACCEPTED: u32 = 0x57F287;
pub const COLOR_CLOSED: u32 = 0xED4245;

impl OrderView {
    pub fn render(order: &Order) -> Self {
        let (color, footer) = match order.status {
            OrderStatus::Pending => (COLOR_PENDING, format!("Order ID: {}", order.id)),
            OrderStatus::Accepted => (COLOR_ACCEPTED, FOOTER_ACCEPTED.to_string()),
            OrderStatus::Denied => (COLOR_CLOSED, FOOTER_DENIED.to_string()),
            OrderStatus::Expired => (COLOR_CLOSED, FOOTER_EXPIRED.to_string()),
        };
        let disabled = order.status.is_terminal();

        let field = |name: &str, value: &str| EmbedField {
            name: name.to_string(),
            value: value.to_string(),
        };

        Self {
            title: format!("📦 Order: {}", order.product),
            color,
            fields: vec![
                field("👤 Customer", &order.customer_info),
                field("💰 Price", &order.price),
                field(
                    "⏱ Expires after",
                    &format_hours(order.expire_at - order.created_at),
                ),
                field("📌 Note", &order.note),
            ],
            footer,
            buttons: vec![
                ButtonView {
                    custom_id: OrderAction::Accept.custom_id(order.id),
                    label: "Accept".to_string(),
                    emoji: "✅".to_string(),
                    kind: ButtonKind::Success,
                    disabled,
                },
                ButtonView {
                    custom_id: OrderAction::Deny.custom_id(order.id),
                    label: "Deny".to_string(),
                    emoji: "❌".to_string(),
                    kind: ButtonKind::Danger,
                    disabled,
                },
            ],
        }
    }
}

pub fn menu_view() -> MenuView {
    MenuView {
        title: "📦 ORDER MENU".to_string(),
        description: "Press the button below to create a new order.".to_string(),
        footer: "TCF SHOP 🐧".to_string(),
        color: COLOR_MENU,
        button: ButtonView {
            custom_id: CREATE_ORDER_BUTTON_ID.to_string(),
            label: "Create Order".to_string(),
            emoji: "📦".to_string(),
            kind: ButtonKind::Primary,
            disabled: false,
        },
    }
}

pub fn order_form() -> FormView {
    FormView {
        custom_id: CREATE_ORDER_MODAL_ID,
        title: "Order details",
        fields: vec![
            FormField {
                custom_id: FIELD_PRODUCT,
                label: "Item name / ticket code",
                placeholder: "e.g. name #0001",
                style: InputStyle::Short,
                required: true,
            },
            FormField {
                custom_id: FIELD_CUSTOMER,
                label: "Customer",
                placeholder: "e.g. NG . Vanhh | enter the customer's name exactly",
                style: InputStyle::Paragraph,
                required: true,
            },
            FormField {
                custom_id: FIELD_EXPIRE_HOURS,
                label: "Expires after how many hours?",
                placeholder: "e.g. 1",
                style: InputStyle::Short,
                required: true,
            },
            FormField {
                custom_id: FIELD_PRICE,
                label: "Price",
                placeholder: "e.g. 1500000đ",
                style: InputStyle::Short,
                required: true,
            },
            FormField {
                custom_id: FIELD_NOTE,
                label: "Note",
                placeholder: "Name of the person handling this order",
                style: InputStyle::Paragraph,
                required: false,
            },
        ],
    }
}

/// Channel notice posted when an order expires.
pub fn expired_notice(order: &Order) -> String {
    format!(
        "🔴 Order **{}** (ID: {}) has expired.",
        order.product, order.id
    )
}

/// Acknowledgement for the order creator.
pub fn created_ack(order_id: i64) -> String {
    format!("✅ Order created! ID: {}", order_id)
}

/// Shown in place of a deferred reply when handling the interaction failed.
pub const INTERACTION_FAILED: &str = "❌ Something went wrong while handling this request.";

/// Acknowledgement for the customer after accept/deny.
pub fn action_ack(action: OrderAction) -> &'static str {
    match action {
        OrderAction::Accept => "✅ You accepted the order.",
        OrderAction::Deny => "❌ You denied the order.",
    }
}

/// Formats an expiration window in milliseconds: hours from one hour up, minutes from one
/// minute up, seconds below that, e.g. `1.5 hours`, `15 minutes`, `3.6 seconds`.
pub fn format_hours(ms: i64) -> String {
    let (value, unit) = if ms >= 3_600_000 {
        (ms as f64 / 3_600_000.0, "hour")
    } else if ms >= 60_000 {
        (ms as f64 / 60_000.0, "minute")
    } else {
        (ms as f64 / 1_000.0, "second")
    };
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "1" {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", text, unit)
    }
}
