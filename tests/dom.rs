#![cfg(target_arch = "wasm32")]

extern crate blog_frontend;
extern crate wasm_bindgen_test;

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement};

use blog_frontend::post::Post;
use blog_frontend::view::{self, ViewState};
use blog_frontend::{document_and_root, render_page};

fn button_enabled(document: &Document, id: &str) -> bool {
    !view::element_by_id(document, id)
        .dyn_ref::<HtmlButtonElement>()
        .unwrap()
        .disabled()
}

fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 3,
            author: "Joe".into(),
            title: Some("Terran".into()),
            content: "gg".into(),
            datetime: "2024-01-05T10:00:00Z".into(),
        },
        Post {
            id: 4,
            author: "Mac".into(),
            title: None,
            content: "no title here".into(),
            datetime: "2024-01-06T10:00:00Z".into(),
        },
    ]
}

/// Installs the mount point and builds a fresh page under it.
fn fresh_page() -> Rc<RefCell<ViewState>> {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.query_selector("body").unwrap().unwrap();

    if document.query_selector("#blog_frontend_root").unwrap().is_none() {
        let root = document.create_element("div").unwrap();
        root.set_id("blog_frontend_root");
        body.append_child(&root).unwrap();
    }

    let state = Rc::new(RefCell::new(ViewState::new()));
    render_page(state.clone());
    state
}

#[wasm_bindgen_test]
fn page_starts_with_empty_list_and_disabled_submits() {
    fresh_page();
    let (document, _root) = document_and_root();

    let list = view::element_by_id(&document, view::POST_LIST_ID);
    assert_eq!(list.child_element_count(), 0);

    assert!(!button_enabled(&document, view::UPDATE_SUBMIT_ID));
    assert!(!button_enabled(&document, view::DELETE_SUBMIT_ID));
}

#[wasm_bindgen_test]
fn post_list_renders_one_entry_per_post() {
    fresh_page();
    let (document, _root) = document_and_root();

    view::render_post_list(&document, &sample_posts());

    let list = view::element_by_id(&document, view::POST_LIST_ID);
    assert_eq!(list.child_element_count(), 2);

    let first = list.first_element_child().unwrap();
    let title = first.query_selector("strong").unwrap().unwrap();
    assert_eq!(title.text_content().unwrap(), "Terran");

    let second = list.last_element_child().unwrap();
    let title = second.query_selector("strong").unwrap().unwrap();
    assert_eq!(title.text_content().unwrap(), "(No Title)");
    let meta = second.query_selector("small").unwrap().unwrap();
    assert_eq!(meta.text_content().unwrap(), "id: 4, 2024-01-06T10:00:00Z");
}

#[wasm_bindgen_test]
fn select_gets_prompt_plus_one_option_per_post() {
    fresh_page();
    let (document, _root) = document_and_root();

    view::render_post_options(
        &document,
        view::UPDATE_SELECT_ID,
        view::UPDATE_SELECT_PROMPT,
        &sample_posts(),
        None,
    );

    let select = view::element_by_id(&document, view::UPDATE_SELECT_ID);
    assert_eq!(select.child_element_count(), 3);

    let prompt = select.first_element_child().unwrap();
    assert_eq!(prompt.get_attribute("value").unwrap(), "");
    assert_eq!(prompt.text_content().unwrap(), "Select a post ID");

    let last = select.last_element_child().unwrap();
    assert_eq!(last.get_attribute("value").unwrap(), "4");
    assert_eq!(last.text_content().unwrap(), "ID 4: (No Title)");

    assert_eq!(view::select_value(&document, view::UPDATE_SELECT_ID), "");
}

#[wasm_bindgen_test]
fn still_valid_selection_survives_a_rebuild() {
    fresh_page();
    let (document, _root) = document_and_root();

    view::render_post_options(
        &document,
        view::DELETE_SELECT_ID,
        view::DELETE_SELECT_PROMPT,
        &sample_posts(),
        Some(3),
    );
    assert_eq!(view::select_value(&document, view::DELETE_SELECT_ID), "3");
}

#[wasm_bindgen_test]
fn seeding_the_update_form_clears_author_and_fills_content() {
    fresh_page();
    let (document, _root) = document_and_root();

    view::set_input_value(&document, view::UPDATE_AUTHOR_ID, "left over");
    view::seed_update_form(&document, &sample_posts()[0]);

    assert_eq!(view::input_value(&document, view::UPDATE_AUTHOR_ID), "");
    assert_eq!(view::textarea_value(&document, view::UPDATE_CONTENT_ID), "gg");
}

#[wasm_bindgen_test]
fn render_posts_enables_submits_from_state() {
    let state = fresh_page();
    let (document, _root) = document_and_root();

    {
        let mut state = state.borrow_mut();
        state.posts = sample_posts();
        state.selected_post_id = Some(4);
    }
    view::render_posts(&document, &state.borrow());

    assert!(button_enabled(&document, view::UPDATE_SUBMIT_ID));
    assert!(!button_enabled(&document, view::DELETE_SUBMIT_ID));
    assert_eq!(view::select_value(&document, view::UPDATE_SELECT_ID), "4");
}
