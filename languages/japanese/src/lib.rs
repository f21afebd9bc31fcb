pub mod jlpt;
pub mod romanizer;

pub use jlpt::{JlptLevel, KanjiLevels};
pub use romanizer::Romanizer;
