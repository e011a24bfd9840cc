extern crate console_error_panic_hook;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate wasm_bindgen_test;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

pub mod answers;
pub mod api;
pub mod dispatch;
pub mod payload;
pub mod questions;
pub mod reviews;

use wasm_bindgen::prelude::*;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Marker class the page stylesheet uses to hide elements.
pub const HIDDEN_CLASS: &'static str = "hidden";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(contents: &str);
}

/// Entry point called from the page once the module is loaded. Installs
/// the delegated listeners that drive everything else.
#[wasm_bindgen]
pub fn bootstrap() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    dispatch::install_listeners();
}

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn alert(message: &str) {
    web_sys::window().unwrap().alert_with_message(message).ok();
}

/// Blocking yes/no prompt. A failed dialog counts as a decline.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .unwrap()
        .confirm_with_message(message)
        .unwrap_or(false)
}

/// Full navigation away from the current page.
pub fn navigate(url: &str) {
    web_sys::window().unwrap().location().set_href(url).unwrap();
}

pub fn set_hidden(element: &Element, hidden: bool) {
    let classes = element.class_list();
    if hidden {
        classes.add_1(HIDDEN_CLASS).unwrap();
    } else {
        classes.remove_1(HIDDEN_CLASS).unwrap();
    }
}

pub fn set_hidden_all(document: &Document, class: &str, hidden: bool) {
    let nodes = document.query_selector_all(&format!(".{class}")).unwrap();
    for index in 0..nodes.length() {
        if let Some(node) = nodes.item(index) {
            if let Some(element) = node.dyn_ref::<Element>() {
                set_hidden(element, hidden);
            }
        }
    }
}

/// The tally is whatever text the server rendered; anything non-numeric
/// counts from zero.
pub fn bump_tally(current: &str, delta: i64) -> String {
    let count = current.trim().parse::<i64>().unwrap_or(0);
    (count + delta).to_string()
}

pub fn shift_tally(tally: &Element, delta: i64) {
    let current = tally.text_content().unwrap_or_default();
    tally.set_text_content(Some(&bump_tally(&current, delta)));
}

/// Swaps a vote button between its like and unlike states.
pub fn swap_vote_button(button: &Element, from: &str, to: &str, label: &str) {
    let classes = button.class_list();
    classes.remove_1(from).unwrap();
    classes.add_1(to).unwrap();
    button.set_text_content(Some(label));
}
