mod character;
mod curated;
mod image;

pub use character::{CharacterRef, Thumbnail};
pub use curated::CuratedEntry;
pub use image::{ImageDimensions, ImageSize, ImageSource};
