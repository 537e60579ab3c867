use serde_json::Value;

/// A post as the backend serves it. `id` and `datetime` are assigned by the
/// server; the client only carries them for display and for addressing
/// update/delete requests.
#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Post {
    pub id: u64,
    pub author: String,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    pub datetime: String,
}

impl Post {
    pub fn display_title(&self) -> &str {
        match self.title {
            Some(ref title) if !title.is_empty() => title,
            _ => "(No Title)",
        }
    }
}

/// Body of `POST /posts`.
#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostCreate {
    pub author: String,
    pub title: String,
    pub content: String,
}

/// Body of `PUT /posts/:id`. Only the fields the user typed in; any merge or
/// append semantics belong to the server.
#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostUpdate {
    pub author: String,
    pub content: String,
}

/// A list endpoint answering with JSON that is not an array counts as an
/// empty list. A body that is not JSON at all is an error.
pub fn posts_from_json(text: &str) -> Result<Vec<Post>, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        Ok(Vec::new())
    }
}

/// Non-2xx bodies may carry `{"error": "..."}`. Anything else falls back to
/// the per-action generic message.
pub fn error_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => match value.get("error").and_then(Value::as_str) {
            Some(msg) if !msg.is_empty() => msg.to_owned(),
            _ => fallback.to_owned(),
        },
        Err(_) => fallback.to_owned(),
    }
}
