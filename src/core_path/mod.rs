// Secure resolution of request paths below the configured root

pub mod resolver;

pub use resolver::{resolve, resolve_directory_only, secure_join, ResolvedDirectory, ResolvedPath};
