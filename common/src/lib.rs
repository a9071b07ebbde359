pub mod draft;
pub mod error;
pub mod idea;

pub use draft::{Draft, ValidationError, DEFAULT_USERNAME};
pub use error::StoreError;
pub use idea::{CreateRequest, Idea, IdeaId, NewIdea};
