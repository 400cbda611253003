use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the fake transmission takes before it reports success.
pub const TRANSMIT_DELAY_MS: u64 = 2000;

const BOOT_LINES: [&str; 2] = ["> System initialized...", "> Waiting for connection..."];
const SENDING_LINES: [&str; 2] = ["> Encrypting data...", "> Establishing secure channel..."];
const SENT_LINES: [&str; 3] = [
    "> Message transmitted successfully!",
    "> Connection established.",
    "> Awaiting response...",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("name is required")]
    EmptyName,
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("message is required")]
    EmptyMessage,
    #[error("transmission already in progress")]
    Busy,
    #[error("message already sent")]
    AlreadySent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::EmptyName);
        }
        if !is_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        Ok(())
    }
}

// Same shape the browser accepts for type=email: one '@', both sides present,
// no whitespace.
fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// The simulated secure-terminal transcript behind the contact form. Nothing
/// leaves the page; the owner is responsible for calling [`complete`] once
/// [`TRANSMIT_DELAY_MS`] has elapsed after a successful [`submit`].
///
/// [`complete`]: Transmission::complete
/// [`submit`]: Transmission::submit
#[derive(Debug, Clone)]
pub struct Transmission {
    state: FormState,
    transcript: Vec<String>,
}

impl Default for Transmission {
    fn default() -> Self {
        Self::new()
    }
}

impl Transmission {
    pub fn new() -> Self {
        Self {
            state: FormState::Idle,
            transcript: BOOT_LINES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Queue a message. On success the form moves to `Sending` and the
    /// receipt lines are appended.
    pub fn submit(&mut self, msg: &ContactMessage) -> Result<(), ContactError> {
        match self.state {
            FormState::Sending => return Err(ContactError::Busy),
            FormState::Sent => return Err(ContactError::AlreadySent),
            FormState::Idle => {}
        }
        msg.validate()?;
        self.state = FormState::Sending;
        self.transcript
            .push(format!("> Received message from: {}", msg.name.trim()));
        self.transcript
            .extend(SENDING_LINES.iter().map(|s| s.to_string()));
        Ok(())
    }

    /// Record a rejected submission in the transcript.
    pub fn reject(&mut self, err: &ContactError) {
        self.transcript.push(format!("> ERROR: {err}"));
    }

    /// Finish an in-flight transmission. Returns `false` when nothing was
    /// being sent.
    pub fn complete(&mut self) -> bool {
        if self.state != FormState::Sending {
            return false;
        }
        self.state = FormState::Sent;
        self.transcript
            .extend(SENT_LINES.iter().map(|s| s.to_string()));
        true
    }
}
