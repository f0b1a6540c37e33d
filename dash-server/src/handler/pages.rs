use axum::response::{Html, Redirect};

pub async fn index() -> Redirect {
    Redirect::temporary("/dashboard")
}

/// Query strings and bodies are ignored; the page never varies.
pub async fn dashboard() -> Html<String> {
    Html(dash_ui::render_document())
}
