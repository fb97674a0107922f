use crate::{Breeds, Picture, SearchOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The image-recognition model finished loading, or failed to.
    ModelLoaded(Result<(), String>),
    /// The remote breed listing was fetched and decoded, or failed.
    TaxonomyLoaded(Result<Breeds, String>),
    /// User dropped something; `None` means it was not a picture.
    PictureDropped(Option<Picture>),
    /// The classify-then-search chain finished for the current picture.
    SearchCompleted(Result<SearchOutcome, String>),
    /// Fallback for placeholder wiring.
    NoOp,
}
