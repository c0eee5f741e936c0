use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};

use super::layout::{escape, page};

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::warn!("404: no page at {}", req.path());
    let mut res = page(
        "Page not found",
        None,
        &format!(
            r#"<section class="card">
<h1>404</h1>
<p>Oops! Page not found</p>
<p class="muted">{}</p>
<p><a href="/">Return to Home</a></p>
</section>"#,
            escape(req.path())
        ),
    );
    *res.status_mut() = StatusCode::NOT_FOUND;
    res
}
