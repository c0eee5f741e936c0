use actix_web::{web, HttpResponse};

use super::crewmate_form::{render_form, CrewmateFormData, FormMode, FormOutcome, FormView};
use super::layout::{page, redirect, Notice};
use crate::adapters::CrewmatesGateway;
use crate::commands::crewmates_command;
use crate::crew_error::CrewError;
use crate::entities::{CrewmateDraft, CrewmateId};
use crate::queries;

const CREATE_VIEW: FormView<'static> = FormView {
    title: "Create a New Crewmate",
    action: "/create",
    submit_label: "Create Crewmate",
    cancel_href: "/gallery",
};

fn edit_view<'a>(action: &'a str, cancel_href: &'a str) -> FormView<'a> {
    FormView {
        title: "Update Your Crewmate",
        action,
        submit_label: "Update Crewmate",
        cancel_href,
    }
}

fn edit_paths(id: &CrewmateId) -> (String, String) {
    let encoded = urlencoding::encode(id.as_str());
    (
        format!("/edit/{}", encoded),
        format!("/crewmate/{}", encoded),
    )
}

fn form_page(view: &FormView<'_>, draft: &CrewmateDraft, notice: Option<Notice>) -> HttpResponse {
    page(view.title, notice.as_ref(), &render_form(view, draft))
}

pub async fn new_crewmate() -> HttpResponse {
    form_page(&CREATE_VIEW, &CrewmateDraft::default(), None)
}

pub async fn create_crewmate(
    gateway: web::Data<CrewmatesGateway>,
    form: web::Form<CrewmateFormData>,
) -> HttpResponse {
    let draft = match form.into_inner().into_outcome(FormMode::Create) {
        FormOutcome::Render(draft) => return form_page(&CREATE_VIEW, &draft, None),
        FormOutcome::Rejected(draft, err) => {
            return form_page(&CREATE_VIEW, &draft, Some(Notice::error(err.to_string())))
        }
        FormOutcome::Submit(draft) => draft,
    };

    let mut repo = gateway.get_ref().clone();
    match crewmates_command::create(&mut repo, &draft).await {
        Ok(crewmate) => redirect(
            "/gallery",
            Some(Notice::success(format!(
                "{} has been created and is ready for space missions!",
                crewmate.name
            ))),
        ),
        Err(err) if err.is_user_error() => {
            form_page(&CREATE_VIEW, &draft, Some(Notice::error(err.to_string())))
        }
        Err(err) => {
            log::error!("Error creating crewmate: {}", err);
            form_page(
                &CREATE_VIEW,
                &draft,
                Some(Notice::error("Failed to create crewmate. Please try again.")),
            )
        }
    }
}

pub async fn edit_crewmate(
    gateway: web::Data<CrewmatesGateway>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = CrewmateId::from(path.into_inner());
    let mut repo = gateway.get_ref().clone();
    match queries::load_crewmate(&mut repo, &id).await {
        Ok(crewmate) => {
            let (action, cancel) = edit_paths(&id);
            form_page(
                &edit_view(&action, &cancel),
                &CrewmateDraft::from_crewmate(&crewmate),
                None,
            )
        }
        Err(err) => {
            log::error!("Error fetching crewmate {}: {}", id, err);
            redirect(
                "/gallery",
                Some(Notice::error(
                    "Failed to load crewmate details. Please try again.",
                )),
            )
        }
    }
}

pub async fn update_crewmate(
    gateway: web::Data<CrewmatesGateway>,
    path: web::Path<String>,
    form: web::Form<CrewmateFormData>,
) -> HttpResponse {
    let id = CrewmateId::from(path.into_inner());
    let (action, cancel) = edit_paths(&id);
    let view = edit_view(&action, &cancel);

    let draft = match form.into_inner().into_outcome(FormMode::Edit) {
        FormOutcome::Render(draft) => return form_page(&view, &draft, None),
        FormOutcome::Rejected(draft, err) => {
            return form_page(&view, &draft, Some(Notice::error(err.to_string())))
        }
        FormOutcome::Submit(draft) => draft,
    };

    let mut repo = gateway.get_ref().clone();
    match crewmates_command::update(&mut repo, &id, &draft).await {
        Ok(crewmate) => redirect(
            &cancel,
            Some(Notice::success(format!(
                "{} has been updated successfully!",
                crewmate.name
            ))),
        ),
        Err(err @ CrewError::Validation(_)) | Err(err @ CrewError::Draft(_)) => {
            form_page(&view, &draft, Some(Notice::error(err.to_string())))
        }
        Err(err) => {
            log::error!("Error updating crewmate {}: {}", id, err);
            form_page(
                &view,
                &draft,
                Some(Notice::error("Failed to update crewmate. Please try again.")),
            )
        }
    }
}
