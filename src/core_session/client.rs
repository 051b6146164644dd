use crate::core_error::FtpClientError;
use log::debug;
use std::io::{Cursor, Read};
use std::str::FromStr;
use suppaftp::list::File as ListedFile;
use suppaftp::types::FileType;
use suppaftp::FtpStream;

/// Kind of a directory entry as reported by LIST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
    Link,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Folder => "folder",
            EntryKind::Link => "link",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// The call-level contract the session needs from an FTP client.
///
/// Names passed to `store`, `retrieve` and `delete` are base names relative
/// to the current working directory.
pub trait FtpClient {
    fn login(&mut self, user: &str, password: &str) -> Result<(), FtpClientError>;
    fn change_dir(&mut self, directory: &str) -> Result<(), FtpClientError>;
    fn make_dir(&mut self, directory: &str) -> Result<(), FtpClientError>;
    /// Replaces `name` with `data`; returns the number of bytes written.
    fn store(&mut self, name: &str, data: &[u8]) -> Result<u64, FtpClientError>;
    /// Reads the whole file. The data connection is drained and released
    /// before returning.
    fn retrieve(&mut self, name: &str) -> Result<Vec<u8>, FtpClientError>;
    /// Lists the current working directory in server order.
    fn list(&mut self) -> Result<Vec<RemoteEntry>, FtpClientError>;
    fn delete(&mut self, name: &str) -> Result<(), FtpClientError>;
    fn quit(&mut self) -> Result<(), FtpClientError>;
}

/// Opens fresh control connections. Shared by concurrent invocations.
pub trait Connector: Send + Sync {
    fn dial(&self, server: &str) -> Result<Box<dyn FtpClient + Send>, FtpClientError>;
}

/// Dials real servers through `suppaftp`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuppaConnector;

impl Connector for SuppaConnector {
    fn dial(&self, server: &str) -> Result<Box<dyn FtpClient + Send>, FtpClientError> {
        debug!("Dialing FTP server {}", server);
        let stream = FtpStream::connect(server)?;
        Ok(Box::new(SuppaClient { stream }))
    }
}

pub struct SuppaClient {
    stream: FtpStream,
}

impl FtpClient for SuppaClient {
    fn login(&mut self, user: &str, password: &str) -> Result<(), FtpClientError> {
        self.stream.login(user, password)?;
        // Payloads are opaque bytes; ASCII mode would rewrite line endings.
        self.stream.transfer_type(FileType::Binary)?;
        Ok(())
    }

    fn change_dir(&mut self, directory: &str) -> Result<(), FtpClientError> {
        self.stream.cwd(directory)?;
        Ok(())
    }

    fn make_dir(&mut self, directory: &str) -> Result<(), FtpClientError> {
        self.stream.mkdir(directory)?;
        Ok(())
    }

    fn store(&mut self, name: &str, data: &[u8]) -> Result<u64, FtpClientError> {
        let mut reader = Cursor::new(data);
        Ok(self.stream.put_file(name, &mut reader)?)
    }

    fn retrieve(&mut self, name: &str) -> Result<Vec<u8>, FtpClientError> {
        let mut data_stream = self.stream.retr_as_stream(name)?;
        let mut buffer = Vec::new();
        let read = data_stream.read_to_end(&mut buffer);
        // Finalize even after a failed read so the 226 reply is consumed.
        let finalized = self.stream.finalize_retr_stream(data_stream);
        read?;
        finalized?;
        Ok(buffer)
    }

    fn list(&mut self) -> Result<Vec<RemoteEntry>, FtpClientError> {
        let lines = self.stream.list(None)?;
        parse_listing(&lines)
    }

    fn delete(&mut self, name: &str) -> Result<(), FtpClientError> {
        self.stream.rm(name)?;
        Ok(())
    }

    fn quit(&mut self) -> Result<(), FtpClientError> {
        self.stream.quit()?;
        Ok(())
    }
}

/// Parses raw LIST output, keeping the server's order.
///
/// The `total N` summary that ls-style servers emit first is skipped; any
/// other unparseable line is an error.
pub fn parse_listing(lines: &[String]) -> Result<Vec<RemoteEntry>, FtpClientError> {
    let mut entries = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with("total ") {
            continue;
        }
        let listed =
            ListedFile::from_str(line).map_err(|_| FtpClientError::Listing(line.to_string()))?;
        let kind = if listed.is_symlink() {
            EntryKind::Link
        } else if listed.is_directory() {
            EntryKind::Folder
        } else {
            EntryKind::File
        };
        entries.push(RemoteEntry {
            name: listed.name().to_string(),
            kind,
        });
    }
    Ok(entries)
}
