pub mod authentication;
pub mod system;
pub mod theaters;
pub mod users;
