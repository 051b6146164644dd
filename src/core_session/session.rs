use crate::config::BindingConfig;
use crate::core_error::{BindingError, FtpClientError};
use crate::core_handlers::operation::Operation;
use crate::core_session::client::{Connector, FtpClient};
use log::{debug, info, warn};

/// Lifecycle of one session. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SessionState {
    Disconnected,
    Connected,
    Authenticated,
    DirectoryReady,
    Completed,
}

/// How to treat a target directory that cannot be entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryMode {
    /// Issue one MKD and retry the CWD once.
    CreateMissing,
    MustExist,
}

/// What a single session is going to do.
#[derive(Debug, Clone, Copy)]
pub struct SessionPlan<'a> {
    pub operation: Operation,
    pub directory: &'a str,
    pub mode: DirectoryMode,
    /// Path named in action errors.
    pub target: &'a str,
}

/// One dial-through-quit conversation with the server.
///
/// If the session is dropped before [`close`](Session::close) ran, the drop
/// sends a best-effort QUIT so no control connection is left behind.
pub struct Session {
    operation: Operation,
    client: Box<dyn FtpClient + Send>,
    state: SessionState,
}

impl Session {
    pub fn open(
        connector: &dyn Connector,
        server: &str,
        operation: Operation,
    ) -> Result<Self, BindingError> {
        debug!("{}: connecting to {}", operation, server);
        let client = connector
            .dial(server)
            .map_err(|source| BindingError::Connection {
                server: server.to_string(),
                source,
            })?;
        Ok(Self {
            operation,
            client,
            state: SessionState::Connected,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    fn advance(&mut self, next: SessionState) {
        debug_assert!(next > self.state, "{:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub fn authenticate(&mut self, user: &str, password: &str) -> Result<(), BindingError> {
        self.client
            .login(user, password)
            .map_err(|source| BindingError::Auth {
                user: user.to_string(),
                source,
            })?;
        self.advance(SessionState::Authenticated);
        Ok(())
    }

    pub fn enter_directory(
        &mut self,
        directory: &str,
        mode: DirectoryMode,
    ) -> Result<(), BindingError> {
        let operation = self.operation;
        let directory_error = |source: FtpClientError| BindingError::Directory {
            operation,
            directory: directory.to_string(),
            source,
        };

        match self.client.change_dir(directory) {
            Ok(()) => {}
            Err(source) if mode == DirectoryMode::MustExist => return Err(directory_error(source)),
            Err(source) => {
                info!(
                    "{}: cannot enter {} ({}), creating it",
                    operation, directory, source
                );
                self.client.make_dir(directory).map_err(directory_error)?;
                self.client.change_dir(directory).map_err(directory_error)?;
            }
        }
        self.advance(SessionState::DirectoryReady);
        Ok(())
    }

    pub fn client_mut(&mut self) -> &mut dyn FtpClient {
        self.client.as_mut()
    }

    /// Sends QUIT. The session counts as completed whatever the outcome, so
    /// a failed QUIT is never repeated on drop.
    pub fn close(&mut self) -> Result<(), BindingError> {
        self.advance(SessionState::Completed);
        self.client
            .quit()
            .map_err(|source| BindingError::SessionClose {
                operation: self.operation,
                source,
            })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.state != SessionState::Completed {
            self.state = SessionState::Completed;
            if let Err(e) = self.client.quit() {
                warn!("{}: quit on abandoned session failed: {}", self.operation, e);
            }
        }
    }
}

/// Runs `action` inside a fresh session: dial, login, enter the directory,
/// act, quit.
///
/// QUIT is attempted on every path once the dial succeeded. When the action
/// succeeded but QUIT fails, the result is a [`BindingError::SessionClose`].
/// When an earlier step failed, that error wins and a failing QUIT is only
/// logged.
pub fn with_session<T, F>(
    connector: &dyn Connector,
    config: &BindingConfig,
    plan: &SessionPlan<'_>,
    action: F,
) -> Result<T, BindingError>
where
    F: FnOnce(&mut dyn FtpClient) -> Result<T, FtpClientError>,
{
    let mut session = Session::open(connector, &config.server, plan.operation)?;

    let outcome = run(&mut session, config, plan, action);
    match outcome {
        Ok(value) => {
            session.close()?;
            info!("{} completed for {}", plan.operation, plan.target);
            Ok(value)
        }
        Err(err) => {
            if let Err(close_err) = session.close() {
                warn!("{}", close_err);
            }
            Err(err)
        }
    }
}

fn run<T, F>(
    session: &mut Session,
    config: &BindingConfig,
    plan: &SessionPlan<'_>,
    action: F,
) -> Result<T, BindingError>
where
    F: FnOnce(&mut dyn FtpClient) -> Result<T, FtpClientError>,
{
    session.authenticate(&config.user, &config.password)?;
    session.enter_directory(plan.directory, plan.mode)?;
    action(session.client_mut()).map_err(|source| BindingError::Action {
        operation: plan.operation,
        target: plan.target.to_string(),
        source,
    })
}
