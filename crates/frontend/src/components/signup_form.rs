//! Signup form component.

use board_core::render::SELECT_PLACEHOLDER;
use yew::prelude::*;

/// A submitted signup: `(activity, email)`.
pub type SignupRequest = (String, String);

/// Properties for SignupForm component.
#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Activity names for the picker, in server order.
    pub options: Vec<String>,
    pub on_submit: Callback<SignupRequest>,
}

/// Email input plus activity picker.
///
/// Both fields are `required`; the browser blocks submission while either
/// is empty. The parent resets the form by changing its `key`.
#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let email = use_state(String::new);
    let activity = use_state(String::new);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_activity_change = {
        let activity = activity.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            activity.set(select.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let activity = activity.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(((*activity).clone(), (*email).clone()));
        })
    };

    html! {
        <form id="signup-form" {onsubmit}>
            <div class="form-group">
                <label for="email">{"Student Email:"}</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
            </div>
            <div class="form-group">
                <label for="activity">{"Select Activity:"}</label>
                <select id="activity" required=true onchange={on_activity_change}>
                    <option value="" selected={activity.is_empty()}>{ SELECT_PLACEHOLDER }</option>
                    { for props.options.iter().map(|name| html! {
                        <option value={name.clone()} selected={*activity == *name}>{ name }</option>
                    })}
                </select>
            </div>
            <button type="submit">{"Sign Up"}</button>
        </form>
    }
}
