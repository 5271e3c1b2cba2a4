//! Feedback message component.

use board_core::FeedbackMessage;
use yew::prelude::*;

/// Properties for FeedbackBanner component.
#[derive(Properties, PartialEq)]
pub struct FeedbackBannerProps {
    #[prop_or_default]
    pub feedback: Option<FeedbackMessage>,
}

/// Success or error message shown under the signup form.
#[function_component(FeedbackBanner)]
pub fn feedback_banner(props: &FeedbackBannerProps) -> Html {
    match &props.feedback {
        Some(message) => html! {
            <div id="message" class={classes!("message", message.kind.css_class())}>
                { &message.text }
            </div>
        },
        None => html! {
            <div id="message" class="message hidden"></div>
        },
    }
}
