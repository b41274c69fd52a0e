//! Adapters from serenity interaction and member types to core types.

use serenity::all::{ActionRowComponent, ComponentInteractionDataKind, Interaction, Member, User};

use crate::core::{Actor, InteractionEvent, MemberRef, ToInteractionEvent};

/// Wraps a serenity interaction; implements [`ToInteractionEvent`].
pub struct DiscordInteraction<'a>(pub &'a Interaction);

fn actor(user: &User) -> Actor {
    Actor {
        id: user.id.get(),
        username: user.name.clone(),
    }
}

impl ToInteractionEvent for DiscordInteraction<'_> {
    fn to_event(&self) -> Option<InteractionEvent> {
        match self.0 {
            Interaction::Command(command) => Some(InteractionEvent::Command {
                name: command.data.name.clone(),
                actor: actor(&command.user),
            }),
            Interaction::Component(component) => match component.data.kind {
                ComponentInteractionDataKind::Button => Some(InteractionEvent::Button {
                    custom_id: component.data.custom_id.clone(),
                    actor: actor(&component.user),
                }),
                _ => None,
            },
            Interaction::Modal(modal) => {
                let fields = modal
                    .data
                    .components
                    .iter()
                    .flat_map(|row| row.components.iter())
                    .filter_map(|component| match component {
                        ActionRowComponent::InputText(input) => Some((
                            input.custom_id.clone(),
                            input.value.clone().unwrap_or_default(),
                        )),
                        _ => None,
                    })
                    .collect();
                Some(InteractionEvent::ModalSubmit {
                    custom_id: modal.data.custom_id.clone(),
                    fields,
                    actor: actor(&modal.user),
                    guild_id: modal.guild_id.map(|g| g.get()),
                })
            }
            _ => None,
        }
    }
}

/// Converts a guild member to the resolver's view of it.
pub fn member_ref(member: &Member) -> MemberRef {
    MemberRef {
        id: member.user.id.get(),
        username: member.user.name.clone(),
        display_name: member.display_name().to_string(),
    }
}
