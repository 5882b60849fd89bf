mod rating;
mod text;

pub use rating::Rating;
pub use text::Text;

const LABEL_CLASS: &str = "block text-sm font-medium mb-1";
