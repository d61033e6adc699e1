//! show_shelf - Browse and manage a local catalog of shows
//!
//! This library provides the core functionality for talking to the
//! companion show server, validating new show entries, previewing show
//! images, and batch-renaming local image directories.

mod app;
mod catalog;
mod image_store;
mod preview;
mod renamer;
mod validation;

pub use app::ShowShelfApp;
pub use catalog::{next_show_id, CatalogError, HttpCatalog, Show, ShowCatalog};
pub use image_store::{ImageStore, ImageStoreError};
pub use preview::{
    fetch_preview, fit_within, PreviewError, PreviewImage, PREVIEW_MAX_HEIGHT, PREVIEW_MAX_WIDTH,
};
pub use renamer::{
    execute_renames, plan_renames, rename_images, PlannedRename, RenameEvent, RenamerError,
};
pub use validation::{
    validate_new_show, validate_show_code, validate_show_name, ValidationError,
};

use std::io;
use thiserror::Error;

/// Top-level error type for show_shelf operations
#[derive(Debug, Error)]
pub enum ShowShelfError {
    /// Error while talking to the show catalog
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A show field failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Error while loading a preview image
    #[error("Preview error: {0}")]
    Preview(#[from] PreviewError),

    /// Error while storing a show image
    #[error("Image store error: {0}")]
    ImageStore(#[from] ImageStoreError),

    /// Error during a batch rename pass
    #[error("Rename error: {0}")]
    Renamer(#[from] RenamerError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
