pub mod config;
pub mod domain;
pub mod global;
pub mod shutdown;
pub mod state;
pub mod utils;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::{health, retrospective, section};
pub use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::health::handler::health_check,
        domain::retrospective::handler::get_retrospectives,
        domain::retrospective::handler::create_retrospective,
        domain::retrospective::handler::get_retrospective,
        domain::retrospective::handler::update_retrospective,
        domain::retrospective::handler::delete_retrospective,
        domain::retrospective::handler::toggle_bookmark,
        domain::section::handler::create_section,
        domain::section::handler::edit_section_content,
        domain::section::handler::increase_section_likes,
        domain::section::handler::delete_section,
    ),
    components(
        schemas(
            domain::health::dto::HealthStatus,
            domain::health::dto::HealthState,
            domain::health::dto::HealthChecks,
            domain::health::dto::CheckResult,
            domain::retrospective::entity::retrospective::ProjectStatus,
            domain::retrospective::dto::RetrospectiveType,
            domain::retrospective::dto::CreateRetrospectiveRequest,
            domain::retrospective::dto::CreateRetrospectiveResponse,
            domain::retrospective::dto::SuccessCreateRetrospectiveResponse,
            domain::retrospective::dto::RetrospectiveResponse,
            domain::retrospective::dto::RetrospectiveListResponse,
            domain::retrospective::dto::SuccessRetrospectiveListResponse,
            domain::retrospective::dto::SuccessRetrospectiveResponse,
            domain::retrospective::dto::UpdateRetrospectiveRequest,
            domain::retrospective::dto::ToggleBookmarkRequest,
            domain::retrospective::dto::ToggleBookmarkResponse,
            domain::retrospective::dto::SuccessToggleBookmarkResponse,
            domain::section::dto::CreateSectionRequest,
            domain::section::dto::CreateSectionResponse,
            domain::section::dto::SuccessCreateSectionResponse,
            domain::section::dto::EditSectionRequest,
            domain::section::dto::EditSectionResponse,
            domain::section::dto::SuccessEditSectionResponse,
            domain::section::dto::IncreaseSectionLikesRequest,
            domain::section::dto::IncreaseSectionLikesResponse,
            domain::section::dto::SuccessIncreaseSectionLikesResponse,
            utils::pagination::RetrospectivesOrderType,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "헬스체크 API"),
        (name = "Retrospective", description = "회고 관련 API"),
        (name = "Section", description = "회고 섹션 관련 API")
    )
)]
pub struct ApiDoc;

/// 라우터 구성
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health_check))
        .route(
            "/retrospectives",
            get(retrospective::handler::get_retrospectives)
                .post(retrospective::handler::create_retrospective),
        )
        .route(
            "/retrospectives/:retrospective_id",
            get(retrospective::handler::get_retrospective)
                .patch(retrospective::handler::update_retrospective)
                .delete(retrospective::handler::delete_retrospective),
        )
        .route(
            "/retrospectives/:retrospective_id/bookmarks",
            post(retrospective::handler::toggle_bookmark),
        )
        .route("/sections", post(section::handler::create_section))
        .route(
            "/sections/:section_id",
            patch(section::handler::edit_section_content).delete(section::handler::delete_section),
        )
        .route(
            "/sections/:section_id/likes",
            post(section::handler::increase_section_likes),
        )
        .layer(middleware::from_fn(global::middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
