// HTML front end: askama templates and axum handlers.

pub mod handlers;
