pub mod entities;
pub mod matcher;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use matcher::*;
pub use ports::*;
pub use value_objects::*;
