//! Activity card component.

use board_core::{ActivityCard as CardData, ParticipantSection};
use yew::prelude::*;

/// Identifies a participant to remove: `(activity, email)`.
pub type RemoveRequest = (String, String);

/// Properties for ActivityCard component.
#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub card: CardData,
    pub on_remove: Callback<RemoveRequest>,
}

/// Activity card with its participant list.
#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let card = &props.card;

    let participants = match card.participant_section() {
        ParticipantSection::Empty(placeholder) => html! {
            <p class="no-participants">{ placeholder }</p>
        },
        ParticipantSection::Listed(participants) => html! {
            <ul class="participants-list">
                { for participants.iter().map(|email| {
                    let request = (card.name.clone(), email.clone());
                    let onclick = props.on_remove.reform(move |_: MouseEvent| request.clone());

                    html! {
                        <li>
                            <span class="participant-email">{ email }</span>
                            <button class="delete-btn" title="Unregister participant" {onclick}>
                                {"❌"}
                            </button>
                        </li>
                    }
                })}
            </ul>
        },
    };

    html! {
        <div class={classes!("activity-card", card.over_capacity().then_some("over-capacity"))}>
            <h4>{ &card.name }</h4>
            <p>{ &card.description }</p>
            <p><strong>{"Schedule: "}</strong>{ &card.schedule }</p>
            <p><strong>{"Availability: "}</strong>{ card.availability() }</p>
            <div class="participants-section">
                <h5>{"Participants:"}</h5>
                { participants }
            </div>
        </div>
    }
}
