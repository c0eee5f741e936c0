//! Server-rendered pages. Every handler clones the gateway and rebuilds its view
//! from a fresh store read.

use actix_web::web;

mod crewmate_detail;
mod crewmate_editor;
mod crewmate_form;
mod gallery;
mod home;
mod layout;
mod not_found;

pub use not_found::not_found;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home::home)))
        .service(web::resource("/gallery").route(web::get().to(gallery::gallery)))
        .service(
            web::resource("/create")
                .route(web::get().to(crewmate_editor::new_crewmate))
                .route(web::post().to(crewmate_editor::create_crewmate)),
        )
        .service(
            web::resource("/edit/{id}")
                .route(web::get().to(crewmate_editor::edit_crewmate))
                .route(web::post().to(crewmate_editor::update_crewmate)),
        )
        .service(web::resource("/crewmate/{id}").route(web::get().to(crewmate_detail::detail)))
        .service(
            web::resource("/crewmate/{id}/delete")
                .route(web::get().to(crewmate_detail::confirm_delete))
                .route(web::post().to(crewmate_detail::delete)),
        );
}

#[cfg(test)]
mod tests {
    use actix_web::dev::ServiceResponse;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};

    use super::crewmate_form::{CrewmateFormData, FormIntent};
    use super::*;
    use crate::adapters::{
        CrewmatesGateway, MemoryCrewmatesRepositoryImpl, RestCrewmatesRepositoryImpl,
    };
    use crate::app_config::RestGatewayConfig;
    use crate::entities::crewmate::tests::crewmate;
    use crate::ports::CrewmatesRepository;

    macro_rules! app {
        ($gateway:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($gateway))
                    .configure(configure)
                    .default_service(web::to(not_found)),
            )
            .await
        };
    }

    async fn body_text(res: ServiceResponse) -> String {
        String::from_utf8(test::read_body(res).await.to_vec()).unwrap()
    }

    fn location(res: &ServiceResponse) -> String {
        res.headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    fn form(name: &str, category: &str, previous: &str) -> CrewmateFormData {
        CrewmateFormData {
            name: name.to_string(),
            category: category.to_string(),
            previous_category: previous.to_string(),
            draft_speed: 2,
            draft_color: "red".to_string(),
            speed: None,
            color: None,
            intent: FormIntent::Save,
        }
    }

    #[actix_web::test]
    async fn test_home_and_unknown_paths() {
        let app = app!(CrewmatesGateway::Memory(MemoryCrewmatesRepositoryImpl::new()));

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/nowhere/at/all").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(body_text(res).await.contains("Oops! Page not found"));
    }

    #[actix_web::test]
    async fn test_empty_gallery_shows_zero_state() {
        let app = app!(CrewmatesGateway::Memory(MemoryCrewmatesRepositoryImpl::new()));
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/gallery").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains("No crewmates yet!"));
        assert!(!body.contains("Crew Composition"));
    }

    #[actix_web::test]
    async fn test_create_with_blank_name_is_blocked() {
        let store = MemoryCrewmatesRepositoryImpl::new();
        let app = app!(CrewmatesGateway::Memory(store.clone()));

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/create")
                .set_form(form("  ", "Crewmate", "Crewmate"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(body_text(res).await.contains("Crewmate name must not be blank"));
        assert!(store.clone().list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_category_change_rerenders_clamped_form() {
        let store = MemoryCrewmatesRepositoryImpl::new();
        let app = app!(CrewmatesGateway::Memory(store.clone()));

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/create")
                .set_form(form("Red", "Engineer", "Crewmate"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains(r#"<option value="Engineer" selected>"#));
        assert!(body.contains(r#"name="draft_speed" value="3""#));
        assert!(body.contains(r#"name="draft_color" value="blue""#));
        assert!(store.clone().list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_create_then_edit() {
        let store = MemoryCrewmatesRepositoryImpl::new();
        let app = app!(CrewmatesGateway::Memory(store.clone()));

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/create")
                .set_form(form("Red", "Crewmate", "Crewmate"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            location(&res),
            "/gallery?notice=Red%20has%20been%20created%20and%20is%20ready%20for%20space%20missions%21&tone=success"
        );

        let created = store.clone().list().await.unwrap().remove(0);
        assert_eq!(created.speed, 2);
        assert_eq!(created.color, "red");

        let mut edit = form("Red", "Crewmate", "Crewmate");
        edit.speed = Some(5);
        edit.color = Some("lime".to_string());
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/edit/{}", created.id))
                .set_form(edit)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert!(location(&res).starts_with(&format!("/crewmate/{}?notice=", created.id)));

        let updated = store.clone().list().await.unwrap().remove(0);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.speed, 5);
        assert_eq!(updated.color, "lime");
    }

    #[actix_web::test]
    async fn test_edit_prefills_stored_record() {
        let store = MemoryCrewmatesRepositoryImpl::new();
        store.insert_raw(crewmate("a", 4, "cyan", "Engineer"));
        let app = app!(CrewmatesGateway::Memory(store));

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/edit/a").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains("Update Your Crewmate"));
        assert!(body.contains(r#"name="speed" value="4" checked"#));
        assert!(body.contains(r#"name="color" value="cyan" checked"#));
    }

    #[actix_web::test]
    async fn test_confirmed_delete_removes_record() {
        let store = MemoryCrewmatesRepositoryImpl::new();
        store.insert_raw(crewmate("a", 4, "cyan", "Engineer"));
        let app = app!(CrewmatesGateway::Memory(store.clone()));

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/crewmate/a/delete").to_request(),
        )
        .await;
        assert!(body_text(res)
            .await
            .contains("Are you sure you want to delete crewmate a?"));
        // the confirmation page alone changes nothing
        assert_eq!(store.clone().list().await.unwrap().len(), 1);

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/crewmate/a/delete")
                .set_form([("name", "crewmate a")])
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert!(location(&res).contains("has%20been%20removed%20from%20your%20crew."));
        assert!(store.clone().list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_create_page_save_button_is_enabled_and_first() {
        let app = app!(CrewmatesGateway::Memory(MemoryCrewmatesRepositoryImpl::new()));
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/create").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains(r#"name="intent" value="save">Create Crewmate</button>"#));
        assert!(!body.contains("disabled"));
        let first_submit = body.find(r#"type="submit""#).unwrap();
        assert!(body[first_submit..].starts_with(r#"type="submit" name="intent" value="save""#));
    }

    #[actix_web::test]
    async fn test_create_with_state_outside_category_is_clamped_not_stored() {
        let store = MemoryCrewmatesRepositoryImpl::new();
        let app = app!(CrewmatesGateway::Memory(store.clone()));

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/create")
                .set_form([
                    ("name", "Doc"),
                    ("category", "Medic"),
                    ("previous_category", "Medic"),
                    ("draft_speed", "6"),
                    ("draft_color", "black"),
                ])
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains(r#"name="draft_speed" value="4""#));
        assert!(body.contains(r#"name="draft_color" value="white""#));
        assert!(store.clone().list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_unknown_notice_tone_still_renders() {
        let app = app!(CrewmatesGateway::Memory(MemoryCrewmatesRepositoryImpl::new()));
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/gallery?notice=Saved&tone=bogus")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(body_text(res).await.contains("Saved"));
    }

    #[actix_web::test]
    async fn test_missing_crewmate_redirects_to_gallery() {
        let app = app!(CrewmatesGateway::Memory(MemoryCrewmatesRepositoryImpl::new()));
        for uri in ["/crewmate/missing", "/edit/missing", "/crewmate/missing/delete"] {
            let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(res.status(), StatusCode::SEE_OTHER);
            assert!(location(&res).starts_with("/gallery?notice=Failed%20to%20load%20crewmate%20details."));
        }
    }

    #[actix_web::test]
    async fn test_store_failure_shows_generic_notice() {
        let gateway = CrewmatesGateway::Rest(RestCrewmatesRepositoryImpl::new(
            reqwest::Client::new(),
            RestGatewayConfig {
                url: "http://127.0.0.1:1".to_string(),
                api_key: "key".to_string(),
                table: "crewmates".to_string(),
            },
        ));
        let app = app!(gateway);
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/gallery").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains("Failed to load crewmates. Please try again."));
        assert!(body.contains("No crewmates yet!"));
    }
}
