use utoipa::OpenApi;

use crate::application::http::{
    assistant::router::AssistantApiDoc, health::router::HealthApiDoc,
    recipe::router::RecipeApiDoc, speech::router::SpeechApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe Generator API",
        description = "AI-powered recipe generation from ingredient images"
    ),
    nest(
        (path = "/api", api = RecipeApiDoc),
        (path = "/api", api = AssistantApiDoc),
        (path = "/api", api = SpeechApiDoc),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document including the unprefixed health routes.
    pub fn document() -> utoipa::openapi::OpenApi {
        ApiDoc::openapi().merge_from(HealthApiDoc::openapi())
    }
}
