pub mod credentials_file;
pub mod session;
