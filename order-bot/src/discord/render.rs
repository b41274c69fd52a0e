//! Builds serenity message, embed and modal builders from the platform-neutral views.

use serenity::all::{
    ButtonStyle, Colour, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
    CreateInputText, CreateModal, InputTextStyle, ReactionType,
};

use crate::orders::view::{ButtonKind, ButtonView, FormView, InputStyle, MenuView, OrderView};

fn button(view: &ButtonView) -> CreateButton {
    let style = match view.kind {
        ButtonKind::Primary => ButtonStyle::Primary,
        ButtonKind::Success => ButtonStyle::Success,
        ButtonKind::Danger => ButtonStyle::Danger,
    };
    CreateButton::new(view.custom_id.as_str())
        .label(view.label.as_str())
        .emoji(ReactionType::Unicode(view.emoji.clone()))
        .style(style)
        .disabled(view.disabled)
}

pub fn order_embed(view: &OrderView) -> CreateEmbed {
    view.fields.iter().fold(
        CreateEmbed::new()
            .title(view.title.as_str())
            .colour(Colour::new(view.color))
            .footer(CreateEmbedFooter::new(view.footer.as_str())),
        |embed, field| embed.field(field.name.as_str(), field.value.as_str(), false),
    )
}

pub fn order_components(view: &OrderView) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(
        view.buttons.iter().map(button).collect(),
    )]
}

pub fn menu_embed(menu: &MenuView) -> CreateEmbed {
    CreateEmbed::new()
        .title(menu.title.as_str())
        .description(menu.description.as_str())
        .colour(Colour::new(menu.color))
        .footer(CreateEmbedFooter::new(menu.footer.as_str()))
}

pub fn menu_components(menu: &MenuView) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![button(&menu.button)])]
}

pub fn form_modal(form: &FormView) -> CreateModal {
    let rows = form
        .fields
        .iter()
        .map(|field| {
            let style = match field.style {
                InputStyle::Short => InputTextStyle::Short,
                InputStyle::Paragraph => InputTextStyle::Paragraph,
            };
            CreateActionRow::InputText(
                CreateInputText::new(style, field.label, field.custom_id)
                    .placeholder(field.placeholder)
                    .required(field.required),
            )
        })
        .collect();
    CreateModal::new(form.custom_id, form.title).components(rows)
}
