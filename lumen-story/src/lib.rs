//! # lumen-story
//!
//! Turns raw backend run data into the StoryViewModel the report page
//! renders: headline, executive brief, metric cards, and jargon-free
//! sections with sentiment and impact statements.

pub mod brief;
pub mod builder;
pub mod cards;
pub mod headline;
pub mod jargon;
pub mod sections;
pub mod sentiment;

pub use builder::transform_to_story;
