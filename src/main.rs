use actix_web::{error, middleware, web, App, HttpResponse, HttpServer};
use juniper::http::graphiql::graphiql_source;
use juniper::http::GraphQLRequest;
use std::io;
use std::sync::Arc;

use crewmate_gallery::adapters::CrewmatesGateway;
use crewmate_gallery::app_config::AppConfig;
use crewmate_gallery::graphql::{create_schema, AppCtx, Schema};
use crewmate_gallery::pages;

async fn graphiql(config: web::Data<AppConfig>) -> HttpResponse {
    if !config.enable_graphiql {
        return HttpResponse::NotFound().body("Not found");
    }
    let html = graphiql_source("/graphql", None);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

async fn graphql(
    st: web::Data<Arc<Schema>>,
    gateway: web::Data<CrewmatesGateway>,
    data: web::Json<GraphQLRequest>,
) -> Result<HttpResponse, error::Error> {
    let ctx = AppCtx {
        gateway: gateway.get_ref().clone(),
    };
    let res = data.execute(&st, &ctx).await;
    let json = serde_json::to_string(&res)?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(json))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = AppConfig::from_env().map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    let host = config.host.clone();
    let port = config.port;
    let schema = Arc::new(create_schema());
    let gateway = CrewmatesGateway::connect(&config.gateway)
        .await
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    log::info!("listening on {}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(schema.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(gateway.clone()))
            .wrap(middleware::Logger::default())
            .service(web::resource("/graphql").route(web::post().to(graphql)))
            .service(web::resource("/graphiql").route(web::get().to(graphiql)))
            .configure(pages::configure)
            .default_service(web::to(pages::not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
