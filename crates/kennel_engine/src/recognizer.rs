use kennel_core::Classification;

/// Number of guesses requested from the model per picture.
pub const TOP_GUESSES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct RecognizerError(pub String);

/// External image-recognition collaborator.
///
/// Implementations wrap a real model; the engine only needs two things
/// from it: loading, and guesses for a picture. The returned list is in
/// model order, not confidence order.
#[async_trait::async_trait]
pub trait Recognizer: Send + Sync {
    /// Prepares the model for inference (weights download, warm-up).
    async fn load(&self) -> Result<(), RecognizerError>;

    /// Produces up to `limit` guesses for the picture.
    async fn classify(
        &self,
        picture: &[u8],
        limit: usize,
    ) -> Result<Vec<Classification>, RecognizerError>;
}
