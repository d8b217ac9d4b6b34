use crate::application::http::{
    breed::router::BreedApiDoc, chat::router::ChatApiDoc,
    feeding_plan::router::FeedingPlanApiDoc, health::router::HealthApiDoc,
    pet::router::PetApiDoc, ration::router::RationApiDoc, vet::router::VetApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FidoFeed API",
        description = "Daily food rations and meal plans for dogs."
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/breeds", api = BreedApiDoc),
        (path = "/rations", api = RationApiDoc),
        (path = "/feeding-plans", api = FeedingPlanApiDoc),
        (path = "/chat", api = ChatApiDoc),
        (path = "/vets", api = VetApiDoc),
        (path = "/pets", api = PetApiDoc),
    )
)]
pub struct ApiDoc;
