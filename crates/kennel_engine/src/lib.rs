//! Kennel engine: effect execution against the Dog API and the
//! image-recognition collaborator.
mod api;
mod bridge;
mod decode;
mod engine;
mod recognizer;

pub use api::{ApiError, ApiSettings, DogApiClient, DOG_API};
pub use bridge::AppRuntime;
pub use decode::{decode_images, decode_listing};
pub use engine::EngineHandle;
pub use recognizer::{Recognizer, RecognizerError, TOP_GUESSES};
