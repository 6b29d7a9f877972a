//! Form state around the generator.
//!
//! A [`Session`] owns what the UI shows: the current config, the last
//! generated password and whether it was just copied. Generation stays in
//! [`crate::generate`]; this module only sequences it with the clipboard.
//!
//! The "copied" indicator is derived from the instant of the last successful
//! copy rather than a timer, so it clears itself once [`COPY_FEEDBACK`] has
//! elapsed and a later copy always gets its full window.

use std::time::{Duration, Instant};

use log::{debug, error};

use crate::clipboard::Clipboard;
use crate::config::GenerationConfig;
use crate::generate::generate;

/// How long a successful copy is reported as "copied".
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// What happened on a copy request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Nothing has been generated yet.
    NothingToCopy,
    /// The clipboard rejected the write. Already logged.
    Failed,
}

pub struct Session<C, K = SystemClock> {
    config: GenerationConfig,
    password: Option<String>,
    copied_at: Option<Instant>,
    clipboard: C,
    clock: K,
}

impl<C: Clipboard> Session<C> {
    pub fn new(config: GenerationConfig, clipboard: C) -> Self {
        Session::with_clock(config, clipboard, SystemClock)
    }
}

impl<C: Clipboard, K: Clock> Session<C, K> {
    pub fn with_clock(config: GenerationConfig, clipboard: C, clock: K) -> Self {
        Self {
            config,
            password: None,
            copied_at: None,
            clipboard,
            clock,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The last generated password, if any.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Generate a fresh password from the current config and reset the
    /// copied indicator.
    pub fn generate(&mut self) -> &str {
        debug!(
            "generating password (length {}, pool {})",
            self.config.length(),
            self.config.pool_size()
        );
        self.copied_at = None;
        self.password.insert(generate(&self.config))
    }

    /// Copy the current password to the clipboard.
    ///
    /// Failures are logged and leave the indicator untouched; they never
    /// propagate.
    pub fn copy(&mut self) -> CopyOutcome {
        let Some(password) = self.password.as_deref() else {
            return CopyOutcome::NothingToCopy;
        };
        match self.clipboard.write(password) {
            Ok(()) => {
                self.copied_at = Some(self.clock.now());
                debug!("password copied to clipboard");
                CopyOutcome::Copied
            }
            Err(e) => {
                error!("failed to copy password: {}", e);
                CopyOutcome::Failed
            }
        }
    }

    /// True for [`COPY_FEEDBACK`] after a successful copy, until the next
    /// generation.
    pub fn is_copied(&self) -> bool {
        self.copied_at
            .is_some_and(|at| self.clock.now().saturating_duration_since(at) < COPY_FEEDBACK)
    }

    /// Returns the stored (clamped) length.
    pub fn set_length(&mut self, length: usize) -> usize {
        self.config.set_length(length)
    }

    pub fn set_include_uppercase(&mut self, on: bool) {
        self.config.include_uppercase = on;
    }

    pub fn set_include_numbers(&mut self, on: bool) {
        self.config.include_numbers = on;
    }

    pub fn set_include_symbols(&mut self, on: bool) {
        self.config.include_symbols = on;
    }
}
