pub mod section;
pub mod section_like;
