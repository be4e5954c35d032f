pub mod certificate_registry;
pub mod user_directory;

pub use certificate_registry::CertificateRegistry;
pub use user_directory::UserDirectory;
