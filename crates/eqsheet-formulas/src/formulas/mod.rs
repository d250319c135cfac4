pub mod energy;
pub mod hookes_law;
pub mod ohms_law;
pub mod quadratic;
