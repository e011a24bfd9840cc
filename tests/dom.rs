#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

use game_qa_frontend::answers::{self, EditState};
use game_qa_frontend::dispatch::{classify_click, classify_submit, Action};
use game_qa_frontend::payload::AnswerCreated;
use game_qa_frontend::reviews;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Container appended to the body for one test, removed at the end.
fn arena() -> Element {
    let div = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&div).unwrap();
    div
}

fn child(parent: &Element, tag: &str, class: Option<&str>, text: Option<&str>) -> Element {
    let el = document().create_element(tag).unwrap();
    if let Some(class) = class {
        el.set_class_name(class);
    }
    if let Some(text) = text {
        el.set_text_content(Some(text));
    }
    parent.append_child(&el).unwrap();
    el
}

fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

#[wasm_bindgen_test]
fn review_vote_round_trips() {
    let arena = arena();
    let button = child(&arena, "button", Some("likeReview"), Some("Like"));
    button.set_id("71");
    let tally = child(&arena, "p", Some("numlikes"), Some("0"));

    reviews::apply_upvote("71");
    assert_eq!(tally.text_content().unwrap(), "1");
    assert!(has_class(&button, "unlikeReview"));
    assert!(!has_class(&button, "likeReview"));
    assert_eq!(button.text_content().unwrap(), "Unlike");

    reviews::apply_remove_upvote("71");
    assert_eq!(tally.text_content().unwrap(), "0");
    assert!(has_class(&button, "likeReview"));
    assert!(!has_class(&button, "unlikeReview"));
    assert_eq!(button.text_content().unwrap(), "Like");

    arena.remove();
}

#[wasm_bindgen_test]
fn answer_vote_round_trips() {
    let arena = arena();
    let fragment = child(&arena, "p", None, None);
    fragment.set_id("72");
    let button = child(&fragment, "button", Some("likeAnswer"), Some("Like"));
    let tally = child(&fragment, "span", Some("tally"), Some("4"));

    answers::apply_upvote("72");
    assert_eq!(tally.text_content().unwrap(), "5");
    assert!(has_class(&button, "unlikeAnswer"));

    answers::apply_remove_upvote("72");
    assert_eq!(tally.text_content().unwrap(), "4");
    assert!(has_class(&button, "likeAnswer"));

    arena.remove();
}

#[wasm_bindgen_test]
fn edit_box_shows_and_clears() {
    let arena = arena();
    let composer = child(&arena, "form", None, None);
    composer.set_id("q_answer");
    let fragment = child(&arena, "p", None, None);
    fragment.set_id("73");
    let text = child(&fragment, "span", Some("answer"), Some("play the tutorial"));
    let edit_button = child(&fragment, "button", Some("editAnswer"), Some("Edit Answer"));

    answers::enter_edit("73");
    assert!(has_class(&composer, "hidden"));
    assert!(has_class(&text, "hidden"));
    assert!(has_class(&edit_button, "hidden"));
    assert_eq!(answers::edit_state(), EditState::Editing("73".to_owned()));

    let textbox = fragment.query_selector(".box").unwrap().unwrap();
    let textbox = textbox.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
    assert_eq!(textbox.value(), "play the tutorial");
    assert!(fragment.query_selector(".save").unwrap().is_some());
    assert!(fragment.query_selector(".cancel").unwrap().is_some());
    assert!(fragment.query_selector(".dlt").unwrap().is_some());

    answers::exit_edit("73");
    assert!(!has_class(&composer, "hidden"));
    assert!(!has_class(&text, "hidden"));
    assert!(!has_class(&edit_button, "hidden"));
    assert!(fragment.query_selector(".box").unwrap().is_none());
    assert!(fragment.query_selector(".save").unwrap().is_none());
    assert!(fragment.query_selector(".cancel").unwrap().is_none());
    assert!(fragment.query_selector(".dlt").unwrap().is_none());
    assert_eq!(answers::edit_state(), EditState::Viewing);

    arena.remove();
}

#[wasm_bindgen_test]
fn second_edit_is_refused_while_editing() {
    let arena = arena();
    let first = child(&arena, "p", None, None);
    first.set_id("74");
    child(&first, "span", Some("answer"), Some("one"));
    let second = child(&arena, "p", None, None);
    second.set_id("75");
    child(&second, "span", Some("answer"), Some("two"));

    answers::enter_edit("74");
    answers::enter_edit("75");

    assert_eq!(answers::edit_state(), EditState::Editing("74".to_owned()));
    assert!(second.query_selector(".box").unwrap().is_none());

    answers::exit_edit("74");
    arena.remove();
}

#[wasm_bindgen_test]
fn new_answer_lands_in_answer_list() {
    let arena = arena();
    let list = child(&arena, "div", None, None);
    list.set_id("answerlist");

    answers::append_answer(&AnswerCreated {
        answer_id: 76,
        text: "check the settings menu".to_owned(),
        username: "sam".to_owned(),
        timestamp: "Mon, 13 Sep 2021 00:00:00 GMT".to_owned(),
    });

    assert_eq!(list.child_element_count(), 1);
    let fragment = list.first_element_child().unwrap();
    assert_eq!(fragment.id(), "76");

    let author = fragment.query_selector("a").unwrap().unwrap();
    assert_eq!(author.get_attribute("href").unwrap(), "/users/sam");
    assert_eq!(author.text_content().unwrap(), "sam");

    let text = fragment.query_selector(".answer").unwrap().unwrap();
    assert_eq!(text.text_content().unwrap(), "check the settings menu");
    assert!(fragment.query_selector(".editAnswer").unwrap().is_some());
    assert!(fragment.query_selector(".likeAnswer").unwrap().is_some());
    let tally = fragment.query_selector(".tally").unwrap().unwrap();
    assert_eq!(tally.text_content().unwrap(), "0");

    arena.remove();
}

#[wasm_bindgen_test]
fn blank_submission_never_clears_or_sends() {
    let arena = arena();
    let composer = child(&arena, "form", None, None);
    composer.set_id("q_answer");
    let input = child(&composer, "input", None, None);
    input.set_id("answer");
    let question = child(&composer, "input", None, None);
    question.set_id("question_id");

    let input = input.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
    question
        .dyn_ref::<web_sys::HtmlInputElement>()
        .unwrap()
        .set_value("5");

    input.set_value("");
    assert!(answers::take_submission().is_none());
    assert_eq!(input.value(), "");

    input.set_value("look behind the waterfall");
    assert_eq!(
        answers::take_submission(),
        Some(("5".to_owned(), "look behind the waterfall".to_owned()))
    );
    assert_eq!(input.value(), "", "a real submission clears the input");

    arena.remove();
}

#[wasm_bindgen_test]
fn deleting_answer_leaves_no_controls() {
    let arena = arena();
    let composer = child(&arena, "form", None, None);
    composer.set_id("q_answer");
    let fragment = child(&arena, "p", None, None);
    fragment.set_id("77");
    child(&fragment, "span", Some("answer"), Some("gone soon"));

    answers::enter_edit("77");
    answers::remove_answer("77");

    assert!(document().get_element_by_id("77").is_none());
    assert!(!has_class(&composer, "hidden"));
    assert_eq!(answers::edit_state(), EditState::Viewing);
    assert!(document().query_selector(".box").unwrap().is_none());
    assert!(document().query_selector(".dlt").unwrap().is_none());

    arena.remove();
}

#[wasm_bindgen_test]
fn click_targets_map_to_actions() {
    let arena = arena();
    let fragment = child(&arena, "p", None, None);
    fragment.set_id("78");
    let edit = child(&fragment, "button", Some("editAnswer"), None);
    let like = child(&fragment, "button", Some("likeAnswer"), None);

    assert_eq!(classify_click(&edit), Some(Action::EditAnswer("78".to_owned())));
    assert_eq!(classify_click(&like), Some(Action::LikeAnswer("78".to_owned())));

    let delete_review = child(&arena, "button", Some("deletereview"), None);
    delete_review.set_id("79");
    assert_eq!(
        classify_click(&delete_review),
        Some(Action::DeleteReview("79".to_owned()))
    );

    let plain = child(&arena, "div", None, None);
    assert_eq!(classify_click(&plain), None);

    arena.remove();
}

#[wasm_bindgen_test]
fn nested_icon_click_resolves_to_button() {
    let arena = arena();
    let button = child(&arena, "button", Some("likeReview"), None);
    button.set_id("80");
    let icon = child(&button, "span", Some("icon"), None);

    assert_eq!(classify_click(&icon), Some(Action::LikeReview("80".to_owned())));

    arena.remove();
}

#[wasm_bindgen_test]
fn submit_targets_map_to_actions() {
    let arena = arena();
    let composer = child(&arena, "form", None, None);
    composer.set_id("q_answer");
    let other = child(&arena, "form", None, None);

    assert_eq!(classify_submit(&composer), Some(Action::SubmitAnswer));
    assert_eq!(classify_submit(&other), None);

    arena.remove();
}
