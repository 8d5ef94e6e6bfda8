pub mod media;
pub mod testing;
pub mod text;
