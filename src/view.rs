//! DOM rendering and element access. The page skeleton is built once by
//! `lib.rs`; everything here re-renders the dynamic parts from [`ViewState`]
//! or reads/writes single controls by id.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

use crate::forms;
use crate::post::Post;

pub const POST_LIST_ID: &'static str = "post-list";

pub const CREATE_AUTHOR_ID: &'static str = "create-author";
pub const CREATE_TITLE_ID: &'static str = "create-title";
pub const CREATE_CONTENT_ID: &'static str = "create-content";
pub const CREATE_SUBMIT_ID: &'static str = "create-submit";

pub const UPDATE_SELECT_ID: &'static str = "update-post-select";
pub const UPDATE_AUTHOR_ID: &'static str = "update-author";
pub const UPDATE_CONTENT_ID: &'static str = "update-content";
pub const UPDATE_SUBMIT_ID: &'static str = "update-submit";

pub const DELETE_SELECT_ID: &'static str = "delete-post-select";
pub const DELETE_SUBMIT_ID: &'static str = "delete-submit";

pub const RANGE_FROM_ID: &'static str = "range-from";
pub const RANGE_TO_ID: &'static str = "range-to";

pub const UPDATE_SELECT_PROMPT: &'static str = "Select a post ID";
pub const DELETE_SELECT_PROMPT: &'static str = "Select a post to delete";

/// Everything the page renders from. The post list is replaced wholesale
/// after every successful list fetch; the two selections survive refreshes
/// the way the rest of the form fields do.
pub struct ViewState {
    pub posts: Vec<Post>,
    pub selected_post_id: Option<u64>,
    pub delete_id: Option<u64>,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            posts: Vec::new(),
            selected_post_id: None,
            delete_id: None,
        }
    }
}

/// Re-renders every post-derived part of the page: the list, both selects
/// and the enablement of their submit buttons.
pub fn render_posts(document: &Document, state: &ViewState) {
    render_post_list(document, &state.posts);

    render_post_options(
        document,
        UPDATE_SELECT_ID,
        UPDATE_SELECT_PROMPT,
        &state.posts,
        state.selected_post_id,
    );
    render_post_options(
        document,
        DELETE_SELECT_ID,
        DELETE_SELECT_PROMPT,
        &state.posts,
        state.delete_id,
    );

    set_button_enabled(
        document,
        UPDATE_SUBMIT_ID,
        forms::update_enabled(state.selected_post_id),
    );
    set_button_enabled(
        document,
        DELETE_SUBMIT_ID,
        forms::delete_enabled(state.delete_id),
    );
}

pub fn render_post_list(document: &Document, posts: &[Post]) {
    let list = element_by_id(document, POST_LIST_ID);
    list.set_inner_html("");

    for post in posts {
        let entry = document.create_element("div").unwrap();

        let title = document.create_element("strong").unwrap();
        title.set_text_content(Some(post.display_title()));
        entry.append_child(&title).unwrap();

        let author = document.create_element("div").unwrap();
        author.set_text_content(Some(&format!("by {}", post.author)));
        entry.append_child(&author).unwrap();

        let content = document.create_element("div").unwrap();
        content.set_text_content(Some(&post.content));
        entry.append_child(&content).unwrap();

        let meta = document.create_element("small").unwrap();
        meta.set_text_content(Some(&format!("id: {}, {}", post.id, post.datetime)));
        entry.append_child(&meta).unwrap();

        list.append_child(&entry).unwrap();
    }
}

/// Rebuilds a post `<select>`: a prompt option with an empty value, then
/// one option per post. A still-valid previous selection is restored.
pub fn render_post_options(
    document: &Document,
    select_id: &str,
    prompt: &str,
    posts: &[Post],
    selected: Option<u64>,
) {
    let select = element_by_id(document, select_id);
    select.set_inner_html("");

    let prompt_option = document.create_element("option").unwrap();
    prompt_option.set_attribute("value", "").unwrap();
    prompt_option.set_text_content(Some(prompt));
    select.append_child(&prompt_option).unwrap();

    for post in posts {
        let option = document.create_element("option").unwrap();
        option.set_attribute("value", &post.id.to_string()).unwrap();
        option.set_text_content(Some(&format!("ID {}: {}", post.id, post.display_title())));
        select.append_child(&option).unwrap();
    }

    let value = selected.map(|id| id.to_string()).unwrap_or_default();
    select.dyn_ref::<HtmlSelectElement>().unwrap().set_value(&value);
}

/// Seeds the update form after a post is selected: the server's current
/// content is carried over, the author field is cleared so a new author can
/// be appended.
pub fn seed_update_form(document: &Document, post: &Post) {
    set_input_value(document, UPDATE_AUTHOR_ID, "");
    set_textarea_value(document, UPDATE_CONTENT_ID, &post.content);
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn element_by_id(document: &Document, id: &str) -> Element {
    document.get_element_by_id(id).unwrap()
}

pub fn create_in(document: &Document, parent: &Element, tag: &str) -> Element {
    let element = document.create_element(tag).unwrap();
    parent.append_child(&element).unwrap();
    element
}

pub fn input_value(document: &Document, id: &str) -> String {
    element_by_id(document, id)
        .dyn_ref::<HtmlInputElement>()
        .unwrap()
        .value()
}

pub fn set_input_value(document: &Document, id: &str, value: &str) {
    element_by_id(document, id)
        .dyn_ref::<HtmlInputElement>()
        .unwrap()
        .set_value(value);
}

pub fn textarea_value(document: &Document, id: &str) -> String {
    element_by_id(document, id)
        .dyn_ref::<HtmlTextAreaElement>()
        .unwrap()
        .value()
}

pub fn set_textarea_value(document: &Document, id: &str, value: &str) {
    element_by_id(document, id)
        .dyn_ref::<HtmlTextAreaElement>()
        .unwrap()
        .set_value(value);
}

pub fn select_value(document: &Document, id: &str) -> String {
    element_by_id(document, id)
        .dyn_ref::<HtmlSelectElement>()
        .unwrap()
        .value()
}

pub fn set_button_enabled(document: &Document, id: &str, enabled: bool) {
    element_by_id(document, id)
        .dyn_ref::<HtmlButtonElement>()
        .unwrap()
        .set_disabled(!enabled);
}
