pub mod artifact;
pub mod category;
pub mod document;
pub mod table;
