pub mod ext;
pub mod logger;
