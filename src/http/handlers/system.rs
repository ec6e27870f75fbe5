//! System handlers: root banner, summary page, health

use axum::response::Html;
use axum::Json;

use crate::http::types::HealthResponse;

/// Year shown on the summary page
const SUMMARY_YEAR: i32 = 2025;

/// Root banner
pub async fn root() -> &'static str {
    "My Deployment"
}

/// Static summary page. Pure render, no store access.
pub async fn get_summary() -> Html<String> {
    Html(render_summary(SUMMARY_YEAR))
}

/// Health check. Always ok; performs no store access.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

fn render_summary(year: i32) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Movies Summary</title></head>\n\
         <body>\n\
         <h1>Movies Collection Summary</h1>\n\
         <p>This service inserts, lists, and clears a fixed set of sample movies.</p>\n\
         <p>&copy; {year}</p>\n\
         </body>\n\
         </html>\n"
    )
}
