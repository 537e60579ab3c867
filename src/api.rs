//! Network layer over the browser Fetch API. One function per backend
//! endpoint; every failure (network, non-2xx, unreadable body) collapses
//! into an [`ApiError`] carrying the message the caller alerts with.

use std::fmt;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::forms::{post_url, posts_url, range_url};
use crate::log;
use crate::post::{error_message, posts_from_json, Post, PostCreate, PostUpdate};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    fn new(message: &str) -> Self {
        ApiError {
            message: message.to_owned(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub async fn fetch_posts() -> Result<Vec<Post>, ApiError> {
    let fallback = "Failed to fetch posts";
    let text = send("GET", &posts_url(), None, fallback).await?;
    posts_from_json(&text).map_err(|_| ApiError::new(fallback))
}

pub async fn fetch_range(from: &str, to: &str) -> Result<Vec<Post>, ApiError> {
    let fallback = "Failed to fetch range";
    let text = send("GET", &range_url(from, to), None, fallback).await?;
    posts_from_json(&text).map_err(|_| ApiError::new(fallback))
}

pub async fn fetch_post(id: u64) -> Result<Post, ApiError> {
    let fallback = "Failed to fetch post data";
    let text = send("GET", &post_url(id), None, fallback).await?;
    serde_json::from_str(&text).map_err(|_| ApiError::new(fallback))
}

pub async fn create_post(new_post: &PostCreate) -> Result<(), ApiError> {
    let fallback = "Failed to create post";
    let body = serde_json::to_string(new_post).map_err(|_| ApiError::new(fallback))?;
    send("POST", &posts_url(), Some(body), fallback).await?;
    Ok(())
}

pub async fn update_post(id: u64, update: &PostUpdate) -> Result<(), ApiError> {
    let fallback = "Failed to update post";
    let body = serde_json::to_string(update).map_err(|_| ApiError::new(fallback))?;
    send("PUT", &post_url(id), Some(body), fallback).await?;
    Ok(())
}

pub async fn delete_post(id: u64) -> Result<(), ApiError> {
    send("DELETE", &post_url(id), None, "Failed to delete post").await?;
    Ok(())
}

/// Issues one request and reads the body as text. Non-2xx responses become
/// `Err` with the server's `error` field when it has one.
async fn send(
    method: &'static str,
    url: &str,
    body: Option<String>,
    fallback: &'static str,
) -> Result<String, ApiError> {
    log(&format!("{} {}", method, url));

    let mut opts = RequestInit::new();
    opts.method(method);
    let body_value = body.map(|body| JsValue::from_str(&body));
    opts.body(body_value.as_ref());

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| ApiError::new(fallback))?;
    if body_value.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| ApiError::new(fallback))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::new(fallback))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| ApiError::new(fallback))?;
    let response: Response = response.dyn_into().map_err(|_| ApiError::new(fallback))?;

    let text_promise = response.text().map_err(|_| ApiError::new(fallback))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| ApiError::new(fallback))?
        .as_string()
        .unwrap_or_default();

    if response.ok() {
        Ok(text)
    } else {
        log(&format!("{} {} -> status {}", method, url, response.status()));
        Err(ApiError::new(&error_message(&text, fallback)))
    }
}
