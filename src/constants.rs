// src/constants.rs

pub const DEFAULT_FTP_PORT: u16 = 21;
pub const DEFAULT_ROOT_PATH: &str = "/";
pub const DEFAULT_USER: &str = "anonymous";

// Static configuration keys, matched case-insensitively
pub const KEY_ROOT_PATH: &str = "rootPath";
pub const KEY_SERVER: &str = "server";
pub const KEY_PORT: &str = "port";
pub const KEY_USER: &str = "user";
pub const KEY_PASSWORD: &str = "password";
pub const KEY_DIRECTORY: &str = "directory";

// Per-request metadata keys
pub const KEY_FILENAME: &str = "filename";
