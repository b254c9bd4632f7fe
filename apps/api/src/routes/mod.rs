pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enhance::handlers as enhance;
use crate::save::handlers as save;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/ai-enhance", post(enhance::handle_enhance))
        .route(
            "/api/save-resume",
            post(save::handle_save_resume).get(save::handle_get_saved_resume),
        )
        .route("/api/resumes", get(save::handle_list_resumes))
        .route("/api/resumes/:id", get(save::handle_get_resume_by_id))
        .with_state(state)
}
