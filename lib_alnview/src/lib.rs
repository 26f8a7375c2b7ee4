pub mod alignment;
pub mod color;
pub mod error;
pub mod grid;
pub mod plain_text;
pub mod ruler;
pub mod transform;
