//! In-memory FTP server used by the unit tests.

use crate::config::BindingConfig;
use crate::core_error::FtpClientError;
use crate::core_session::client::{Connector, EntryKind, FtpClient, RemoteEntry};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use suppaftp::types::Response;
use suppaftp::{FtpError, Status};

#[derive(Debug, Default)]
pub struct MemoryState {
    pub dirs: BTreeSet<String>,
    pub files: BTreeMap<String, Vec<u8>>,
    pub commands: Vec<String>,
    pub quits: usize,
    pub fail_dial: bool,
    pub fail_login: bool,
    pub fail_quit: bool,
}

#[derive(Clone, Default)]
pub struct MemoryFtp {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryFtp {
    pub fn with_dirs(dirs: &[&str]) -> Self {
        let ftp = Self::default();
        {
            let mut state = ftp.state();
            state.dirs.insert("/".to_string());
            for dir in dirs {
                // Make every ancestor exist as well
                let mut current = String::new();
                for part in dir.split('/').filter(|p| !p.is_empty()) {
                    current.push('/');
                    current.push_str(part);
                    state.dirs.insert(current.clone());
                }
            }
        }
        ftp
    }

    pub fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap()
    }

    pub fn commands(&self) -> Vec<String> {
        self.state().commands.clone()
    }

    pub fn quits(&self) -> usize {
        self.state().quits
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.state().files.get(path).cloned()
    }

    pub fn put_file(&self, path: &str, data: &[u8]) {
        self.state().files.insert(path.to_string(), data.to_vec());
    }
}

impl Connector for MemoryFtp {
    fn dial(&self, _server: &str) -> Result<Box<dyn FtpClient + Send>, FtpClientError> {
        if self.state().fail_dial {
            return Err(FtpClientError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )));
        }
        Ok(Box::new(MemoryClient {
            state: Arc::clone(&self.state),
            cwd: "/".to_string(),
        }))
    }
}

struct MemoryClient {
    state: Arc<Mutex<MemoryState>>,
    cwd: String,
}

fn reply(status: Status, message: &str) -> FtpClientError {
    FtpClientError::Ftp(FtpError::UnexpectedResponse(Response::new(
        status,
        message.as_bytes().to_vec(),
    )))
}

fn parent_of(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some(("", _)) | None => "/",
        Some((parent, _)) => parent,
    }
}

fn leaf_of(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

impl MemoryClient {
    fn absolute(&self, path: &str) -> String {
        if path.starts_with('/') {
            path.to_string()
        } else if self.cwd == "/" {
            format!("/{}", path)
        } else {
            format!("{}/{}", self.cwd, path)
        }
    }

    fn record(&self, command: String) -> MutexGuard<'_, MemoryState> {
        let mut state = self.state.lock().unwrap();
        state.commands.push(command);
        state
    }
}

impl FtpClient for MemoryClient {
    fn login(&mut self, user: &str, _password: &str) -> Result<(), FtpClientError> {
        let state = self.record(format!("USER {}", user));
        if state.fail_login {
            return Err(reply(Status::NotLoggedIn, "Login incorrect."));
        }
        Ok(())
    }

    fn change_dir(&mut self, directory: &str) -> Result<(), FtpClientError> {
        let target = self.absolute(directory);
        let exists = self.record(format!("CWD {}", directory)).dirs.contains(&target);
        if !exists {
            return Err(reply(Status::FileUnavailable, "Failed to change directory."));
        }
        self.cwd = target;
        Ok(())
    }

    fn make_dir(&mut self, directory: &str) -> Result<(), FtpClientError> {
        let target = self.absolute(directory);
        let mut state = self.record(format!("MKD {}", directory));
        if state.dirs.contains(&target) || !state.dirs.contains(parent_of(&target)) {
            return Err(reply(Status::FileUnavailable, "Create directory operation failed."));
        }
        state.dirs.insert(target);
        Ok(())
    }

    fn store(&mut self, name: &str, data: &[u8]) -> Result<u64, FtpClientError> {
        let target = self.absolute(name);
        let mut state = self.record(format!("STOR {}", name));
        state.files.insert(target, data.to_vec());
        Ok(data.len() as u64)
    }

    fn retrieve(&mut self, name: &str) -> Result<Vec<u8>, FtpClientError> {
        let target = self.absolute(name);
        let state = self.record(format!("RETR {}", name));
        state
            .files
            .get(&target)
            .cloned()
            .ok_or_else(|| reply(Status::FileUnavailable, "Failed to open file."))
    }

    fn list(&mut self) -> Result<Vec<RemoteEntry>, FtpClientError> {
        let cwd = self.cwd.clone();
        let state = self.record("LIST".to_string());
        let mut entries: Vec<RemoteEntry> = state
            .dirs
            .iter()
            .filter(|d| d.as_str() != "/" && parent_of(d) == cwd)
            .map(|d| RemoteEntry {
                name: leaf_of(d).to_string(),
                kind: EntryKind::Folder,
            })
            .chain(
                state
                    .files
                    .keys()
                    .filter(|f| parent_of(f) == cwd)
                    .map(|f| RemoteEntry {
                        name: leaf_of(f).to_string(),
                        kind: EntryKind::File,
                    }),
            )
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn delete(&mut self, name: &str) -> Result<(), FtpClientError> {
        let target = self.absolute(name);
        let mut state = self.record(format!("DELE {}", name));
        state
            .files
            .remove(&target)
            .map(|_| ())
            .ok_or_else(|| reply(Status::FileUnavailable, "Delete operation failed."))
    }

    fn quit(&mut self) -> Result<(), FtpClientError> {
        let mut state = self.record("QUIT".to_string());
        state.quits += 1;
        if state.fail_quit {
            return Err(reply(Status::NotAvailable, "Timeout."));
        }
        Ok(())
    }
}

/// Configuration rooted at `/srv/ftp/data`.
pub fn test_config() -> BindingConfig {
    let properties: HashMap<String, String> = [
        ("rootPath", "/srv/ftp/data"),
        ("server", "ftp.test"),
        ("user", "tester"),
        ("password", "secret"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    BindingConfig::from_properties(&properties).unwrap()
}
