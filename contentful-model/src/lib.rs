//! Wire model for the Contentful management API.
//!
//! Defines the typed resources the client reads and writes:
//! - [`ContentType`]: ordered [`Field`]s plus system metadata (a schema)
//! - [`Field`] / [`FieldKind`] / [`ArrayItemSpec`]: one schema field and its declared type
//! - [`Validation`]: constraint descriptions, decoded by discriminator key
//! - [`Entry`] / [`EntryField`]: content records and resolved field values
//! - [`Sys`] / [`Link`] / [`Versioned`]: server metadata and the version discipline
//! - [`Page`] / [`SyncPage`]: collection and sync envelopes
//!
//! Schema fields and validations are decoded in two phases: the document is
//! first read into a JSON map, then typed values are pulled out only for keys
//! that are present. Absent keys keep their zero value, unknown keys are
//! ignored, and a present key of the wrong shape is a [`DecodeError`].
//!
//! Nothing here performs I/O.

mod collection;
mod content_type;
mod entry;
mod error;
mod field;
mod raw;
mod sys;
pub mod validation;

pub use collection::{Page, SyncItem, SyncPage};
pub use content_type::ContentType;
pub use entry::{Entry, EntryField};
pub use error::{DecodeError, ModelResult};
pub use field::{ArrayItemSpec, Field, FieldKind};
pub use sys::{Link, LinkSys, NEW_RESOURCE_VERSION, Sys, Versioned};
pub use validation::{
    AssetFileSize, AssetImageDimensions, Bounds, DateBounds, DateRange, ImageDimensions,
    LinkContentType, MimeTypeGroup, NumericBounds, Pattern, PredefinedValues, Range, Regexp,
    Size, Unique, Validation,
};
