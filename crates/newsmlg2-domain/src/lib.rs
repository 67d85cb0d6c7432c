//! NewsML-G2 Domain Layer
//!
//! Value objects shared by the digitalwires → NewsML-G2 conversion.
//! The crate has no external dependencies. The JSON accessor, markup
//! handling and XML emission live in `newsmlg2-convert`, which builds these
//! objects fresh for every conversion.
//!
//! ## Key Concepts
//!
//! - **Category**: one tagged classification (subject, geo, provider, desk, ...)
//! - **EdNote**: an editorial note with a role and a publishability flag
//! - **Description**: free text tagged by role
//! - **Link**: a reference to associated media or an external page
//! - **Poi**: a point of interest taken from a category's geo payload
//! - **Rank**: the positive ordering key shared by all ranked collections
//! - **ItemKind**: the narrative nature of a news item (text, picture, ...)
//!
//! All value objects are immutable once built and compare by value.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod description;
pub mod ednote;
pub mod item_kind;
pub mod link;
pub mod poi;
pub mod rank;
pub mod traits;

// Re-exports for convenience
pub use category::{Category, CategoryAttr};
pub use description::Description;
pub use ednote::{EdNote, EdNoteAttr};
pub use item_kind::ItemKind;
pub use link::{Link, SEE_ALSO_REL};
pub use poi::Poi;
pub use rank::{sort_by_rank, Rank};
pub use traits::ItemConverter;
