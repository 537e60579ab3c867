extern crate console_error_panic_hook;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod api;
pub mod forms;
pub mod post;
pub mod view;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use post::{Post, PostCreate, PostUpdate};
use view::ViewState;

pub const ROOT_SELECTOR: &'static str = "#blog_frontend_root";
pub const API_BASE_URL: &'static str = "";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(contents: &str);
}

pub fn document_and_root() -> (Document, Element) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let root = document.query_selector(ROOT_SELECTOR).unwrap().unwrap();

    (document, root)
}

#[wasm_bindgen]
pub fn bootstrap() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let state = Rc::new(RefCell::new(ViewState::new()));
    render_page(state.clone());
    refresh_posts(state);
}

/// Replaces the displayed list (and everything derived from it) with the
/// given posts.
pub fn apply_posts(state: &Rc<RefCell<ViewState>>, posts: Vec<Post>) {
    state.borrow_mut().posts = posts;

    let (document, _root) = document_and_root();
    view::render_posts(&document, &state.borrow());
}

/// Fetches the full collection and replaces the displayed list. Runs on
/// bootstrap and after every successful mutation.
pub fn refresh_posts(state: Rc<RefCell<ViewState>>) {
    spawn_local(async move {
        match api::fetch_posts().await {
            Ok(posts) => apply_posts(&state, posts),
            Err(err) => view::alert(&err.message),
        }
    });
}

/// Builds the static page skeleton under the root element and wires every
/// control. The dynamic parts (list, select options, button enablement) are
/// filled in by `view::render_posts`.
pub fn render_page(state: Rc<RefCell<ViewState>>) {
    let (document, root) = document_and_root();
    root.set_inner_html("");

    let list_column = view::create_in(&document, &root, "div");
    let heading = view::create_in(&document, &list_column, "h2");
    heading.set_text_content(Some("All Posts"));
    let list = view::create_in(&document, &list_column, "div");
    list.set_id(view::POST_LIST_ID);

    let form_column = view::create_in(&document, &root, "div");
    render_create_form(&document, &form_column, state.clone());
    render_update_form(&document, &form_column, state.clone());
    render_delete_form(&document, &form_column, state.clone());
    render_range_form(&document, &form_column, state);
}

fn render_create_form(document: &Document, parent: &Element, state: Rc<RefCell<ViewState>>) {
    let heading = view::create_in(document, parent, "h3");
    heading.set_text_content(Some("Create Post"));

    let author = view::create_in(document, parent, "input");
    author.set_id(view::CREATE_AUTHOR_ID);
    author
        .dyn_ref::<HtmlInputElement>()
        .unwrap()
        .set_placeholder("Author");
    view::create_in(document, parent, "br");

    let title = view::create_in(document, parent, "input");
    title.set_id(view::CREATE_TITLE_ID);
    title
        .dyn_ref::<HtmlInputElement>()
        .unwrap()
        .set_placeholder("Title");
    view::create_in(document, parent, "br");

    let content = view::create_in(document, parent, "textarea");
    content.set_id(view::CREATE_CONTENT_ID);
    content
        .dyn_ref::<HtmlTextAreaElement>()
        .unwrap()
        .set_placeholder("Content");
    view::create_in(document, parent, "br");

    let submit = view::create_in(document, parent, "button");
    submit.set_id(view::CREATE_SUBMIT_ID);
    submit.set_text_content(Some("Submit"));

    let submit_click = Closure::<dyn FnMut()>::new(move || {
        let (document, _root) = document_and_root();
        let author = view::input_value(&document, view::CREATE_AUTHOR_ID);
        let title = view::input_value(&document, view::CREATE_TITLE_ID);
        let content = view::textarea_value(&document, view::CREATE_CONTENT_ID);

        if let Err(msg) = forms::validate_create(&author, &title, &content) {
            view::alert(msg);
            return;
        }

        let state = state.clone();
        spawn_local(async move {
            let new_post = PostCreate {
                author,
                title,
                content,
            };
            match api::create_post(&new_post).await {
                Ok(()) => refresh_posts(state),
                Err(err) => view::alert(&err.message),
            }
        });
    });

    let submit_el = submit.dyn_ref::<HtmlElement>().unwrap();
    submit_el.set_onclick(Some(submit_click.as_ref().unchecked_ref()));

    submit_click.forget();
}

fn render_update_form(document: &Document, parent: &Element, state: Rc<RefCell<ViewState>>) {
    let heading = view::create_in(document, parent, "h3");
    heading.set_text_content(Some("Update Post"));

    let select = view::create_in(document, parent, "select");
    select.set_id(view::UPDATE_SELECT_ID);
    view::create_in(document, parent, "br");

    let author = view::create_in(document, parent, "input");
    author.set_id(view::UPDATE_AUTHOR_ID);
    author
        .dyn_ref::<HtmlInputElement>()
        .unwrap()
        .set_placeholder("New Author (append)");
    view::create_in(document, parent, "br");

    let content = view::create_in(document, parent, "textarea");
    content.set_id(view::UPDATE_CONTENT_ID);
    content
        .dyn_ref::<HtmlTextAreaElement>()
        .unwrap()
        .set_placeholder("New Content");
    view::create_in(document, parent, "br");

    let submit = view::create_in(document, parent, "button");
    submit.set_id(view::UPDATE_SUBMIT_ID);
    submit.set_text_content(Some("Update"));
    view::set_button_enabled(document, view::UPDATE_SUBMIT_ID, false);

    // an empty select until the first refresh fills it
    view::render_post_options(
        document,
        view::UPDATE_SELECT_ID,
        view::UPDATE_SELECT_PROMPT,
        &[],
        None,
    );

    let select_state = state.clone();
    let select_change = Closure::<dyn FnMut()>::new(move || {
        let (document, _root) = document_and_root();
        let selection =
            forms::selection_from_value(&view::select_value(&document, view::UPDATE_SELECT_ID));
        select_state.borrow_mut().selected_post_id = selection;
        view::set_button_enabled(
            &document,
            view::UPDATE_SUBMIT_ID,
            forms::update_enabled(selection),
        );

        if let Some(id) = selection {
            spawn_local(async move {
                match api::fetch_post(id).await {
                    Ok(post) => {
                        let (document, _root) = document_and_root();
                        view::seed_update_form(&document, &post);
                    }
                    Err(err) => view::alert(&err.message),
                }
            });
        }
    });

    let select_el = select.dyn_ref::<HtmlElement>().unwrap();
    select_el.set_onchange(Some(select_change.as_ref().unchecked_ref()));

    select_change.forget();

    let submit_click = Closure::<dyn FnMut()>::new(move || {
        let id = match state.borrow().selected_post_id {
            Some(id) => id,
            None => return,
        };

        let (document, _root) = document_and_root();
        let author = view::input_value(&document, view::UPDATE_AUTHOR_ID);
        let content = view::textarea_value(&document, view::UPDATE_CONTENT_ID);

        if let Err(msg) = forms::validate_update(&author, &content) {
            view::alert(msg);
            return;
        }

        let state = state.clone();
        spawn_local(async move {
            let update = PostUpdate { author, content };
            match api::update_post(id, &update).await {
                Ok(()) => refresh_posts(state),
                Err(err) => view::alert(&err.message),
            }
        });
    });

    let submit_el = submit.dyn_ref::<HtmlElement>().unwrap();
    submit_el.set_onclick(Some(submit_click.as_ref().unchecked_ref()));

    submit_click.forget();
}

fn render_delete_form(document: &Document, parent: &Element, state: Rc<RefCell<ViewState>>) {
    let heading = view::create_in(document, parent, "h3");
    heading.set_text_content(Some("Delete Post"));

    let select = view::create_in(document, parent, "select");
    select.set_id(view::DELETE_SELECT_ID);
    view::create_in(document, parent, "br");

    let submit = view::create_in(document, parent, "button");
    submit.set_id(view::DELETE_SUBMIT_ID);
    submit.set_text_content(Some("Delete"));
    view::set_button_enabled(document, view::DELETE_SUBMIT_ID, false);

    view::render_post_options(
        document,
        view::DELETE_SELECT_ID,
        view::DELETE_SELECT_PROMPT,
        &[],
        None,
    );

    let select_state = state.clone();
    let select_change = Closure::<dyn FnMut()>::new(move || {
        let (document, _root) = document_and_root();
        let target =
            forms::selection_from_value(&view::select_value(&document, view::DELETE_SELECT_ID));
        select_state.borrow_mut().delete_id = target;
        view::set_button_enabled(
            &document,
            view::DELETE_SUBMIT_ID,
            forms::delete_enabled(target),
        );
    });

    let select_el = select.dyn_ref::<HtmlElement>().unwrap();
    select_el.set_onchange(Some(select_change.as_ref().unchecked_ref()));

    select_change.forget();

    let submit_click = Closure::<dyn FnMut()>::new(move || {
        let id = match state.borrow().delete_id {
            Some(id) => id,
            None => {
                view::alert(forms::DELETE_TARGET_MSG);
                return;
            }
        };

        let state = state.clone();
        spawn_local(async move {
            match api::delete_post(id).await {
                Ok(()) => refresh_posts(state),
                Err(err) => view::alert(&err.message),
            }
        });
    });

    let submit_el = submit.dyn_ref::<HtmlElement>().unwrap();
    submit_el.set_onclick(Some(submit_click.as_ref().unchecked_ref()));

    submit_click.forget();
}

fn render_range_form(document: &Document, parent: &Element, state: Rc<RefCell<ViewState>>) {
    let heading = view::create_in(document, parent, "h3");
    heading.set_text_content(Some("Search by Date Range"));

    let from = view::create_in(document, parent, "input");
    from.set_id(view::RANGE_FROM_ID);
    from.set_attribute("type", "date").unwrap();

    let to = view::create_in(document, parent, "input");
    to.set_id(view::RANGE_TO_ID);
    to.set_attribute("type", "date").unwrap();
    view::create_in(document, parent, "br");

    let submit = view::create_in(document, parent, "button");
    submit.set_text_content(Some("Search"));

    let submit_click = Closure::<dyn FnMut()>::new(move || {
        let (document, _root) = document_and_root();
        let from = view::input_value(&document, view::RANGE_FROM_ID);
        let to = view::input_value(&document, view::RANGE_TO_ID);

        let state = state.clone();
        spawn_local(async move {
            match api::fetch_range(&from, &to).await {
                Ok(posts) => apply_posts(&state, posts),
                Err(err) => view::alert(&err.message),
            }
        });
    });

    let submit_el = submit.dyn_ref::<HtmlElement>().unwrap();
    submit_el.set_onclick(Some(submit_click.as_ref().unchecked_ref()));

    submit_click.forget();
}
