//! Everything that happens to an answer fragment: posting a new one,
//! the edit lifecycle, voting, and deletion. Every DOM lookup is scoped
//! to the fragment whose id started the action, so two answers on the
//! same page never clobber each other.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlTextAreaElement};

use crate::api::{self, ApiError};
use crate::payload::AnswerCreated;

/// At most one answer is in `Editing` at a time; while one is, every
/// other edit affordance on the page is hidden.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    Editing(String),
}

thread_local! {
    static EDIT_STATE: RefCell<EditState> = RefCell::new(EditState::Viewing);
}

pub fn edit_state() -> EditState {
    EDIT_STATE.with(|state| state.borrow().clone())
}

fn set_edit_state(next: EditState) {
    EDIT_STATE.with(|state| *state.borrow_mut() = next);
}

/// Reads the shared composer. Blank text is rejected here, before the
/// input is touched; otherwise the input clears right away and the text
/// travels to the server.
pub fn take_submission() -> Option<(String, String)> {
    let document = crate::document();
    let input = document
        .query_selector("#answer")
        .unwrap()?
        .dyn_into::<HtmlInputElement>()
        .ok()?;

    let text = input.value();
    if text.is_empty() {
        return None;
    }
    input.set_value("");

    let question_id = document
        .query_selector("#question_id")
        .unwrap()?
        .dyn_into::<HtmlInputElement>()
        .ok()?
        .value();

    Some((question_id, text))
}

fn restore_submission(text: &str) {
    if let Some(input) = crate::document().query_selector("#answer").unwrap() {
        if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
            input.set_value(text);
        }
    }
}

pub async fn submit_from_form() -> Result<(), ApiError> {
    let Some((question_id, text)) = take_submission() else {
        crate::alert("Answer cannot be blank");
        return Ok(());
    };

    match api::create_answer(&question_id, &text).await {
        Ok(created) => {
            append_answer(&created);
            Ok(())
        }
        Err(err) => {
            // the input cleared optimistically; give the text back
            restore_submission(&text);
            Err(err)
        }
    }
}

/// Builds the fragment for a freshly posted answer and appends it to
/// the answer list. Mirrors what the server renders for existing
/// answers, down to a zero tally so the new answer is likeable at once.
pub fn append_answer(answer: &AnswerCreated) {
    let document = crate::document();

    let fragment = document.create_element("p").unwrap();
    fragment.set_id(&answer.answer_id.to_string());

    let author = document.create_element("a").unwrap();
    author
        .set_attribute("href", &format!("/users/{}", answer.username))
        .unwrap();
    author.set_text_content(Some(&answer.username));
    fragment.append_child(&author).unwrap();

    let timestamp = document.create_element("span").unwrap();
    timestamp.set_text_content(Some(&answer.timestamp));
    fragment.append_child(&timestamp).unwrap();

    let text = document.create_element("span").unwrap();
    text.set_class_name("answer");
    text.set_text_content(Some(&answer.text));
    fragment.append_child(&text).unwrap();

    let edit = document.create_element("button").unwrap();
    edit.set_class_name("editAnswer");
    edit.set_text_content(Some("Edit Answer"));
    fragment.append_child(&edit).unwrap();

    let like = document.create_element("button").unwrap();
    like.set_class_name("likeAnswer");
    like.set_text_content(Some("Like"));
    fragment.append_child(&like).unwrap();

    let tally = document.create_element("span").unwrap();
    tally.set_class_name("tally");
    tally.set_text_content(Some("0"));
    fragment.append_child(&tally).unwrap();

    let list = document.query_selector("#answerlist").unwrap().unwrap();
    list.append_child(&fragment).unwrap();
}

/// Switches one answer into `Editing`: the shared composer, this
/// answer's text, and every edit/vote button on the page go hidden, and
/// a prefilled text box with save/cancel/delete controls lands in the
/// fragment. Refused while another answer is already being edited.
pub fn enter_edit(answer_id: &str) {
    if edit_state() != EditState::Viewing {
        return;
    }

    let document = crate::document();
    let Some(fragment) = document.get_element_by_id(answer_id) else {
        return;
    };
    let Some(text) = fragment.query_selector(".answer").unwrap() else {
        return;
    };

    set_composer_hidden(&document, true);
    crate::set_hidden(&text, true);

    let textbox = document.create_element("textarea").unwrap();
    textbox.set_class_name("box");
    textbox
        .dyn_ref::<HtmlTextAreaElement>()
        .unwrap()
        .set_value(&text.text_content().unwrap_or_default());
    fragment.append_child(&textbox).unwrap();

    let save = document.create_element("button").unwrap();
    save.set_class_name("save");
    save.set_text_content(Some("Save"));
    fragment.append_child(&save).unwrap();

    let cancel = document.create_element("button").unwrap();
    cancel.set_class_name("cancel");
    cancel.set_text_content(Some("Cancel"));
    fragment.append_child(&cancel).unwrap();

    let delete = document.create_element("button").unwrap();
    delete.set_class_name("dlt");
    delete.set_text_content(Some("Delete Answer"));
    fragment.append_child(&delete).unwrap();

    set_edit_state(EditState::Editing(answer_id.to_owned()));
}

/// Back to `Viewing`: the injected controls go away and everything that
/// was hidden comes back.
pub fn exit_edit(answer_id: &str) {
    let document = crate::document();

    if let Some(fragment) = document.get_element_by_id(answer_id) {
        for selector in [".box", ".save", ".cancel", ".dlt"] {
            if let Some(control) = fragment.query_selector(selector).unwrap() {
                control.remove();
            }
        }
        if let Some(text) = fragment.query_selector(".answer").unwrap() {
            crate::set_hidden(&text, false);
        }
    }

    set_composer_hidden(&document, false);
    set_edit_state(EditState::Viewing);
}

fn set_composer_hidden(document: &Document, hidden: bool) {
    if let Some(composer) = document.query_selector("#q_answer").unwrap() {
        crate::set_hidden(&composer, hidden);
    }
    for class in ["editAnswer", "likeAnswer", "unlikeAnswer"] {
        crate::set_hidden_all(document, class, hidden);
    }
}

pub async fn save_edit(answer_id: &str) -> Result<(), ApiError> {
    let document = crate::document();
    let Some(fragment) = document.get_element_by_id(answer_id) else {
        return Ok(());
    };
    let Some(textbox) = fragment.query_selector(".box").unwrap() else {
        return Ok(());
    };

    let text = textbox.dyn_ref::<HtmlTextAreaElement>().unwrap().value();
    if text.is_empty() {
        crate::alert("Answer cannot be blank");
        return Ok(());
    }

    // stays in Editing if the request fails, so nothing typed is lost
    let edited = api::edit_answer(answer_id, &text).await?;

    if let Some(span) = fragment.query_selector(".answer").unwrap() {
        span.set_text_content(Some(&edited.text));
    }
    exit_edit(answer_id);
    Ok(())
}

pub async fn delete(answer_id: &str) -> Result<(), ApiError> {
    api::delete_answer(answer_id).await?;
    remove_answer(answer_id);
    Ok(())
}

/// Tears the fragment out of the page, restoring the controls its edit
/// session had hidden.
pub fn remove_answer(answer_id: &str) {
    exit_edit(answer_id);
    if let Some(fragment) = crate::document().get_element_by_id(answer_id) {
        fragment.remove();
    }
}

pub async fn upvote(answer_id: &str) -> Result<(), ApiError> {
    api::upvote_answer(answer_id).await?;
    apply_upvote(answer_id);
    Ok(())
}

pub async fn remove_upvote(answer_id: &str) -> Result<(), ApiError> {
    api::remove_answer_upvote(answer_id).await?;
    apply_remove_upvote(answer_id);
    Ok(())
}

pub fn apply_upvote(answer_id: &str) {
    let Some(fragment) = crate::document().get_element_by_id(answer_id) else {
        return;
    };
    if let Some(button) = fragment.query_selector(".likeAnswer").unwrap() {
        crate::swap_vote_button(&button, "likeAnswer", "unlikeAnswer", "Unlike");
    }
    if let Some(tally) = fragment.query_selector(".tally").unwrap() {
        crate::shift_tally(&tally, 1);
    }
}

pub fn apply_remove_upvote(answer_id: &str) {
    let Some(fragment) = crate::document().get_element_by_id(answer_id) else {
        return;
    };
    if let Some(button) = fragment.query_selector(".unlikeAnswer").unwrap() {
        crate::swap_vote_button(&button, "unlikeAnswer", "likeAnswer", "Like");
    }
    if let Some(tally) = fragment.query_selector(".tally").unwrap() {
        crate::shift_tally(&tally, -1);
    }
}
