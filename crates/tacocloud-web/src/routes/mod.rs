pub mod api;
pub mod design;
pub mod health;
