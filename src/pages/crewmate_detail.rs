use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::layout::{escape, page, redirect, Notice, NoticeQuery};
use crate::adapters::CrewmatesGateway;
use crate::commands::crewmates_command;
use crate::entities::{Crewmate, CrewmateId};
use crate::queries;

const LOAD_FAILED: &str = "Failed to load crewmate details. Please try again.";

async fn fetch(gateway: &CrewmatesGateway, id: &CrewmateId) -> Result<Crewmate, HttpResponse> {
    let mut repo = gateway.clone();
    queries::load_crewmate(&mut repo, id).await.map_err(|err| {
        log::error!("Error fetching crewmate {}: {}", id, err);
        redirect("/gallery", Some(Notice::error(LOAD_FAILED)))
    })
}

pub async fn detail(
    gateway: web::Data<CrewmatesGateway>,
    path: web::Path<String>,
    query: web::Query<NoticeQuery>,
) -> HttpResponse {
    let id = CrewmateId::from(path.into_inner());
    match fetch(&gateway, &id).await {
        Ok(crewmate) => page(
            &crewmate.name,
            query.into_inner().into_notice().as_ref(),
            &render_detail(&crewmate),
        ),
        Err(res) => res,
    }
}

pub fn render_detail(crewmate: &Crewmate) -> String {
    let id = urlencoding::encode(crewmate.id.as_str());
    let label = crewmate.speed_label();
    format!(
        r#"<p><a href="/gallery">Back to Gallery</a></p>
<section class="card">
<span class="suit" style="background:{swatch}"></span>
<h1>{name}</h1>
<p><span class="badge" style="background:{tone}">{label}</span> {category}</p>
<p class="muted">{role}</p>
<dl>
<dt>Speed</dt><dd>{speed}</dd>
<dt>Color</dt><dd>{color}</dd>
<dt>Category</dt><dd>{category}</dd>
<dt>Created</dt><dd>{created}</dd>
<dt>Efficiency Rating</dt><dd>{efficiency}%</dd>
</dl>
<p><a href="/edit/{id}">Edit Crewmate</a> <a href="/crewmate/{id}/delete">Delete Crewmate</a></p>
</section>"#,
        swatch = crewmate.swatch().css(),
        name = escape(&crewmate.name),
        tone = label.tone(),
        label = label,
        category = escape(&crewmate.category),
        role = crewmate.role_description(),
        speed = crewmate.speed,
        color = escape(&crewmate.color),
        created = crewmate.created_at.format("%B %-d, %Y"),
        efficiency = crewmate.efficiency_rating(),
        id = id,
    )
}

pub async fn confirm_delete(
    gateway: web::Data<CrewmatesGateway>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = CrewmateId::from(path.into_inner());
    let crewmate = match fetch(&gateway, &id).await {
        Ok(crewmate) => crewmate,
        Err(res) => return res,
    };
    let encoded = urlencoding::encode(id.as_str());
    let body = format!(
        r#"<section class="card">
<h1>Delete Crewmate</h1>
<p>Are you sure you want to delete {name}?</p>
<form method="post" action="/crewmate/{id}/delete">
<input type="hidden" name="name" value="{name}">
<a href="/crewmate/{id}">Cancel</a>
<button type="submit">Delete</button>
</form>
</section>"#,
        name = escape(&crewmate.name),
        id = encoded,
    );
    page("Delete Crewmate", None, &body)
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub name: Option<String>,
}

pub async fn delete(
    gateway: web::Data<CrewmatesGateway>,
    path: web::Path<String>,
    form: web::Form<DeleteForm>,
) -> HttpResponse {
    let id = CrewmateId::from(path.into_inner());
    let mut repo = gateway.get_ref().clone();
    match crewmates_command::delete(&mut repo, &id).await {
        Ok(()) => {
            let message = match form.into_inner().name.filter(|n| !n.trim().is_empty()) {
                Some(name) => format!("{} has been removed from your crew.", name),
                None => "Crewmate has been removed from your crew.".to_string(),
            };
            redirect("/gallery", Some(Notice::success(message)))
        }
        Err(err) => {
            log::error!("Error deleting crewmate {}: {}", id, err);
            redirect(
                "/gallery",
                Some(Notice::error("Failed to delete crewmate. Please try again.")),
            )
        }
    }
}
