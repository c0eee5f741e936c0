use actix_web::{web, HttpResponse};

use super::layout::{escape, page, Notice, NoticeQuery};
use crate::adapters::CrewmatesGateway;
use crate::entities::{Crewmate, CrewStatistics};
use crate::queries::{self, GalleryView};

pub async fn gallery(
    gateway: web::Data<CrewmatesGateway>,
    query: web::Query<NoticeQuery>,
) -> HttpResponse {
    let mut notice = query.into_inner().into_notice();
    let mut repo = gateway.get_ref().clone();
    let view = match queries::load_gallery(&mut repo).await {
        Ok(view) => view,
        Err(err) => {
            log::error!("Error fetching crewmates: {}", err);
            notice = Some(Notice::error("Failed to load crewmates. Please try again."));
            GalleryView::new(Vec::new())
        }
    };
    page("Gallery", notice.as_ref(), &render_gallery(&view))
}

pub fn render_card(crewmate: &Crewmate) -> String {
    let id = urlencoding::encode(crewmate.id.as_str());
    format!(
        r#"<article class="card">
<span class="suit" style="background:{swatch}"></span> <span class="badge" style="background:#4f46e5">{speed}</span>
<h3>{name}</h3>
<p class="muted">Speed: {label}<br>Color: {color}<br>Category: {category}</p>
<p><a href="/crewmate/{id}">View</a> <a href="/edit/{id}">Edit</a> <a href="/crewmate/{id}/delete">Delete</a></p>
</article>"#,
        swatch = crewmate.swatch().css(),
        speed = crewmate.speed,
        name = escape(&crewmate.name),
        label = crewmate.speed_label(),
        color = escape(&crewmate.color),
        category = escape(&crewmate.category),
        id = id,
    )
}

fn render_statistics(stats: &CrewStatistics) -> String {
    let composition = stats
        .category_distribution
        .iter()
        .map(|(category, &count)| {
            format!(
                r#"<div><strong>{}</strong><br>{}<br><span class="muted">{}%</span></div>"#,
                count,
                escape(category),
                stats.share_percent(count)
            )
        })
        .collect::<String>();

    format!(
        r#"<section class="grid" id="statistics">
<div class="card"><strong>{score}%</strong><br><span style="color:{tone}">{level}</span></div>
<div class="card"><strong>{total}</strong><br>Total Crewmates</div>
<div class="card"><strong>{average:.1}</strong><br>Average Speed</div>
<div class="card"><strong>{color}</strong><br>Popular Color</div>
</section>
<section class="card">
<h2>Crew Composition</h2>
<div class="grid">{composition}</div>
</section>"#,
        score = stats.success_score,
        tone = stats.success_level.tone(),
        level = stats.success_level,
        total = stats.total,
        average = stats.average_speed,
        color = escape(&stats.most_popular_color),
        composition = composition,
    )
}

pub fn render_gallery(view: &GalleryView) -> String {
    let total = view.crewmates.len();
    let summary = if view.is_empty() {
        "You haven't made a crewmate yet!".to_string()
    } else {
        format!(
            "Managing {} crewmate{} ready for space missions",
            total,
            if total == 1 { "" } else { "s" }
        )
    };

    let statistics = view
        .statistics
        .as_ref()
        .map(render_statistics)
        .unwrap_or_default();

    let crew = if view.is_empty() {
        r#"<section class="card">
<h3>No crewmates yet!</h3>
<p class="muted">Create your first crewmate to start building your space crew.</p>
<p><a href="/create">Create First Crewmate</a></p>
</section>"#
            .to_string()
    } else {
        format!(
            r#"<section class="grid">{}</section>"#,
            view.crewmates.iter().map(render_card).collect::<String>()
        )
    };

    format!(
        r#"<h1>Your Crewmate Gallery!</h1>
<p>{summary}</p>
{statistics}
<p><a href="/create">Create New Crewmate</a></p>
{crew}"#,
        summary = summary,
        statistics = statistics,
        crew = crew,
    )
}
