//! Delegated event routing. Two listeners on the document body catch
//! every submit and click; `classify_*` maps the event target to at
//! most one action, and `run` drives the matching handler.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use crate::api::ApiError;
use crate::{answers, questions, reviews};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SubmitAnswer,
    EditAnswer(String),
    SaveAnswerEdit(String),
    CancelAnswerEdit(String),
    DeleteAnswer(String),
    LikeAnswer(String),
    UnlikeAnswer(String),
    LikeReview(String),
    UnlikeReview(String),
    DeleteQuestion(String),
    DeleteReview(String),
}

impl Action {
    /// Destructive actions block on a prompt before any request goes out.
    pub fn confirm_prompt(&self) -> Option<&'static str> {
        match self {
            Action::DeleteAnswer(_) => Some("Are you sure you want to delete this answer?"),
            Action::DeleteQuestion(_) => Some("Are you sure you want to delete this question?"),
            Action::DeleteReview(_) => Some("Are you sure you want to delete this review?"),
            _ => None,
        }
    }
}

/// Which element carries the fragment identifier once a route matches.
#[derive(Clone, Copy, Debug)]
enum IdSource {
    /// The matched element's own id (review and question buttons).
    Element,
    /// The id of the fragment containing the matched element (answer
    /// controls nest inside their `p#answer_id`).
    Fragment,
}

const CLICK_ROUTES: &[(&str, IdSource, fn(String) -> Action)] = &[
    ("editAnswer", IdSource::Fragment, Action::EditAnswer),
    ("save", IdSource::Fragment, Action::SaveAnswerEdit),
    ("cancel", IdSource::Fragment, Action::CancelAnswerEdit),
    ("dlt", IdSource::Fragment, Action::DeleteAnswer),
    ("likeAnswer", IdSource::Fragment, Action::LikeAnswer),
    ("unlikeAnswer", IdSource::Fragment, Action::UnlikeAnswer),
    ("likeReview", IdSource::Element, Action::LikeReview),
    ("unlikeReview", IdSource::Element, Action::UnlikeReview),
    ("deletequestion", IdSource::Element, Action::DeleteQuestion),
    ("deletereview", IdSource::Element, Action::DeleteReview),
];

/// Resolves a click to an action. `closest` covers icon markup nested
/// inside the buttons; the first matching route wins so one physical
/// event never fires two handlers.
pub fn classify_click(target: &Element) -> Option<Action> {
    for (class, source, build) in CLICK_ROUTES {
        if let Ok(Some(matched)) = target.closest(&format!(".{class}")) {
            let id = match source {
                IdSource::Element => matched.id(),
                IdSource::Fragment => matched
                    .parent_element()
                    .map(|fragment| fragment.id())
                    .unwrap_or_default(),
            };
            if id.is_empty() {
                return None;
            }
            return Some(build(id));
        }
    }
    None
}

pub fn classify_submit(target: &Element) -> Option<Action> {
    if target.id() == "q_answer" {
        Some(Action::SubmitAnswer)
    } else {
        None
    }
}

pub fn install_listeners() {
    let document = crate::document();
    let body = document.body().unwrap();

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = target_element(&event) else {
            return;
        };
        if let Some(action) = classify_submit(&target) {
            event.prevent_default();
            run(action);
        }
    });
    body.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .unwrap();
    on_submit.forget();

    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = target_element(&event) else {
            return;
        };
        if let Some(action) = classify_click(&target) {
            run(action);
        }
    });
    body.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .unwrap();
    on_click.forget();
}

fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Runs one action to completion. Handlers roll back their own
/// optimistic patches before the error lands here.
pub fn run(action: Action) {
    if let Some(prompt) = action.confirm_prompt() {
        if !crate::confirm(prompt) {
            return;
        }
    }

    spawn_local(async move {
        if let Err(err) = perform(action).await {
            crate::log(&format!("request failed: {err}"));
            crate::alert(&format!("Something went wrong: {err}"));
        }
    });
}

async fn perform(action: Action) -> Result<(), ApiError> {
    match action {
        Action::SubmitAnswer => answers::submit_from_form().await,
        Action::EditAnswer(id) => {
            answers::enter_edit(&id);
            Ok(())
        }
        Action::SaveAnswerEdit(id) => answers::save_edit(&id).await,
        Action::CancelAnswerEdit(id) => {
            answers::exit_edit(&id);
            Ok(())
        }
        Action::DeleteAnswer(id) => answers::delete(&id).await,
        Action::LikeAnswer(id) => answers::upvote(&id).await,
        Action::UnlikeAnswer(id) => answers::remove_upvote(&id).await,
        Action::LikeReview(id) => reviews::upvote(&id).await,
        Action::UnlikeReview(id) => reviews::remove_upvote(&id).await,
        Action::DeleteQuestion(id) => questions::delete(&id).await,
        Action::DeleteReview(id) => reviews::delete(&id).await,
    }
}
