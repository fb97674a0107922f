use crate::{Breeds, Picture};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start loading the image-recognition model.
    LoadModel,
    /// Fetch the breed listing from the remote taxonomy service.
    LoadTaxonomy,
    /// Run the model on the picture, resolve against the taxonomy and
    /// search for sample pictures. The taxonomy rides along so the
    /// executor needs no access to state.
    Classify { picture: Picture, breeds: Breeds },
    /// Surface a message to the user (executed as a log record; toast
    /// rendering lives outside this workspace).
    Notify {
        level: NoticeLevel,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}
