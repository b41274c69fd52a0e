//! Platform-neutral message views: what an announcement, the menu, or the creation form
//! looks like, independent of how a transport draws it. Built by `orders::view`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub custom_id: String,
    pub label: String,
    pub emoji: String,
    pub kind: ButtonKind,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

/// Announcement message for one order: an embed plus one row of buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderView {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: String,
    pub buttons: Vec<ButtonView>,
}

/// Menu shown by the slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub title: String,
    pub description: String,
    pub footer: String,
    pub color: u32,
    pub button: ButtonView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStyle {
    Short,
    Paragraph,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub custom_id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub style: InputStyle,
    pub required: bool,
}

/// The order creation modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub custom_id: &'static str,
    pub title: &'static str,
    pub fields: Vec<FormField>,
}

