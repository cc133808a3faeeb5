//! Landing page handler.

use axum::{
    http::{header, StatusCode},
    response::Response,
};

/// GET / - HTML listing of the available API routes.
pub async fn landing_handler() -> Response {
    let html = "<h1>Climate API</h1>\
        <p>The available routes:</p>\
        <ul>\
        <li>/api/v1.0/precipitation</li>\
        <li>/api/v1.0/stations</li>\
        <li>/api/v1.0/tobs</li>\
        <li>/api/v1.0/&lt;start&gt; &mdash; for example: /api/v1.0/2017-01-25</li>\
        <li>/api/v1.0/&lt;start&gt;/&lt;end&gt; &mdash; for example: /api/v1.0/2011-06-09/2017-12-23</li>\
        </ul>";

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(html.into())
        .unwrap()
}
