pub mod compare;
pub mod export;
pub mod scenario;
pub mod sensitivity;
