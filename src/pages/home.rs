use actix_web::{web, HttpResponse};

use super::layout::{page, NoticeQuery};
use crate::entities::{Color, Speed};

const SHOWCASE: [(Color, i32); 5] = [
    (Color::Red, 5),
    (Color::Blue, 3),
    (Color::Green, 4),
    (Color::Pink, 2),
    (Color::Yellow, 6),
];

const FEATURES: [(&str, &str); 3] = [
    (
        "Create Crewmates",
        "Customize name, speed, color, and category. Choose from different roles like Engineer, Scientist, or Impostor!",
    ),
    (
        "Manage Your Crew",
        "View all your crewmates in one place, edit their attributes, and track your crew statistics.",
    ),
    (
        "Advanced Features",
        "Category-based restrictions, crew success metrics, and detailed analytics for your space team.",
    ),
];

pub async fn home(query: web::Query<NoticeQuery>) -> HttpResponse {
    page(
        "Home",
        query.into_inner().into_notice().as_ref(),
        &render_home(),
    )
}

fn render_home() -> String {
    let showcase = SHOWCASE
        .iter()
        .map(|(color, speed)| {
            format!(
                r#"<div><span class="suit" style="background:{}"></span><br><span class="badge" style="background:#4f46e5">{}</span></div>"#,
                color.swatch().css(),
                Speed::saturating(*speed)
            )
        })
        .collect::<String>();

    let features = FEATURES
        .iter()
        .map(|(title, text)| {
            format!(
                r#"<div class="card"><h3>{}</h3><p class="muted">{}</p></div>"#,
                title, text
            )
        })
        .collect::<String>();

    format!(
        r#"<section>
<h1>Welcome to the Crewmate Creator!</h1>
<p>Here is where you can create your very own set of crewmates before sending them off into space!</p>
<div class="grid">{showcase}</div>
<p><a href="/create">Create New Crewmate</a> <a href="/gallery">View Gallery</a></p>
</section>
<section class="grid">{features}</section>"#,
        showcase = showcase,
        features = features,
    )
}
