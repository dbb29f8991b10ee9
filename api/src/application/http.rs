pub mod fridge_analysis;
pub mod health;
pub mod home;
pub mod html;
pub mod recipe;
pub mod server;
