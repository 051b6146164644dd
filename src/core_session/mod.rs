// Per-request FTP sessions and the client contract they drive

pub mod client;
pub mod session;

pub use client::{Connector, EntryKind, FtpClient, RemoteEntry, SuppaConnector};
pub use session::{with_session, DirectoryMode, Session, SessionPlan, SessionState};
