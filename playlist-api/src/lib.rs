pub mod constant;
pub mod draft;
pub mod rating;
pub mod song;

pub use draft::Draft;
pub use rating::{Rating, Star};
pub use song::Song;
