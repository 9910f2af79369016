mod auth;
mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

use std::env;

use dotenvy::dotenv;
use log::info;
use migration::{Migrator, MigratorTrait};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::state::AppState;
use crate::utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let state = AppState::new()
        .await
        .expect("failed to connect to database");

    Migrator::up(&state.db, None)
        .await
        .expect("failed to run migrations");

    if seed_requested() {
        database::seed::seed_demo_data(&state.db)
            .await
            .expect("failed to seed demo data");
    }

    let api = OpenApiRouter::new()
        .routes(routes!(routes::auth::login))
        .routes(routes!(routes::auth::whoami))
        .routes(routes!(routes::auth::ping))
        .routes(routes!(routes::course::get_courses, routes::course::create_course))
        .routes(routes!(
            routes::course::get_course_by_id,
            routes::course::update_course,
            routes::course::delete_course
        ))
        .routes(routes!(routes::course::link_teacher))
        .routes(routes!(routes::course::unlink_teacher))
        .routes(routes!(
            routes::course::get_reviews_for_course,
            routes::course::create_review_for_course
        ))
        .routes(routes!(routes::course::delete_review_for_course))
        .routes(routes!(routes::teacher::get_teachers, routes::teacher::create_teacher))
        .routes(routes!(
            routes::teacher::get_teacher_by_id,
            routes::teacher::update_teacher,
            routes::teacher::delete_teacher
        ))
        .routes(routes!(
            routes::teacher::get_reviews_for_teacher,
            routes::teacher::create_review_for_teacher
        ))
        .routes(routes!(routes::teacher::delete_review_for_teacher))
        .routes(routes!(
            routes::course_review::get_course_reviews,
            routes::course_review::create_course_review
        ))
        .routes(routes!(
            routes::course_review::get_course_review_by_id,
            routes::course_review::delete_course_review
        ))
        .routes(routes!(
            routes::teacher_review::get_teacher_reviews,
            routes::teacher_review::create_teacher_review
        ))
        .routes(routes!(
            routes::teacher_review::get_teacher_review_by_id,
            routes::teacher_review::delete_teacher_review
        ))
        .routes(routes!(routes::catalog::get_faculty_options))
        .routes(routes!(routes::catalog::create_faculty))
        .routes(routes!(
            routes::catalog::update_faculty,
            routes::catalog::delete_faculty
        ))
        .routes(routes!(routes::catalog::get_program_options))
        .routes(routes!(routes::catalog::create_program))
        .routes(routes!(
            routes::catalog::update_program,
            routes::catalog::delete_program
        ));

    let (router, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(routes::health::health))
        .nest("/api/v1", api)
        .split_for_parts();

    let app = router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state);

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind listener");
    info!("listening on http://0.0.0.0:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

fn seed_requested() -> bool {
    env::var("SEED_DEMO_DATA")
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
