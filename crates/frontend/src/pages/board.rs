//! Activity board page.

use std::rc::Rc;

use board_core::config::DEFAULT_BASE_URL;
use board_core::render::LOAD_FAILURE_NOTICE;
use board_core::{Board, BoardConfig, BoardView, Result};
use tracing::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::GlooActivityApi;
use crate::components::{ActivityCard, FeedbackBanner, Loading, RemoveRequest, SignupForm, SignupRequest};
use crate::state::{BoardState, ListState};
use crate::view::YewBoardView;

type BrowserBoard = Board<GlooActivityApi, YewBoardView>;

/// Origin of the current page, where the activities API is served.
fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn build_board(view: YewBoardView) -> Result<BrowserBoard> {
    let config = BoardConfig::with_base_url(page_origin());
    let api = GlooActivityApi::new(&config.base_url)?;
    Ok(Board::new(api, view, config))
}

/// Board page component.
#[function_component(BoardPage)]
pub fn board_page() -> Html {
    let state = use_reducer(BoardState::default);
    let board: Rc<Result<BrowserBoard>> = {
        let dispatcher = state.dispatcher();
        use_memo((), move |_| build_board(YewBoardView::new(dispatcher)))
    };

    // Initial load
    {
        let board = board.clone();
        let dispatcher = state.dispatcher();

        use_effect_with((), move |_| match board.as_ref() {
            Ok(board) => {
                let board = board.clone();
                spawn_local(async move {
                    board.load_activities().await;
                });
            }
            Err(err) => {
                error!(error = %err, "Cannot reach the activities API");
                YewBoardView::new(dispatcher).render_load_failure(LOAD_FAILURE_NOTICE);
            }
        });
    }

    let on_signup = {
        let board = board.clone();
        Callback::from(move |(activity, email): SignupRequest| {
            if let Ok(board) = board.as_ref() {
                let board = board.clone();
                spawn_local(async move {
                    board.submit_signup(&activity, &email).await;
                });
            }
        })
    };

    let on_remove = {
        let board = board.clone();
        Callback::from(move |(activity, email): RemoveRequest| {
            if let Ok(board) = board.as_ref() {
                let board = board.clone();
                spawn_local(async move {
                    board.remove_participant(&activity, &email).await;
                });
            }
        })
    };

    let list = match &state.list {
        ListState::Loading => html! { <Loading label="Loading activities..." /> },
        ListState::Failed(notice) => html! { <p class="load-failure">{ notice }</p> },
        ListState::Loaded(cards) if cards.is_empty() => html! {
            <p>{"No activities available."}</p>
        },
        ListState::Loaded(cards) => html! {
            <>
                { for cards.iter().map(|card| html! {
                    <ActivityCard
                        key={card.name.clone()}
                        card={card.clone()}
                        on_remove={on_remove.clone()}
                    />
                })}
            </>
        },
    };

    html! {
        <div class="board">
            <section id="activities-container">
                <h3>{"Available Activities"}</h3>
                <div id="activities-list">
                    { list }
                </div>
            </section>

            <section id="signup-container">
                <h3>{"Sign Up for an Activity"}</h3>
                <SignupForm
                    key={state.form_generation.to_string()}
                    options={state.options.clone()}
                    on_submit={on_signup}
                />
                <FeedbackBanner feedback={state.feedback.clone()} />
            </section>
        </div>
    }
}
