pub mod categories;
pub mod form;
pub mod generate;
pub mod health;
pub mod runs;
