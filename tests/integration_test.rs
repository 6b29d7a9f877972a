use passgen_lib::clipboard::{Clipboard, ClipboardError};
use passgen_lib::config::GenerationConfig;
use passgen_lib::entropy::{Verdict, estimate};
use passgen_lib::generate::{generate, generate_many};
use passgen_lib::session::{CopyOutcome, Session};

/// Records every write; fails when `fail` is set.
#[derive(Default)]
struct RecordingClipboard {
    writes: Vec<String>,
    fail: bool,
}

impl Clipboard for RecordingClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("denied".into()));
        }
        self.writes.push(text.to_owned());
        Ok(())
    }
}

#[test]
fn integration_generate_and_entropy() {
    let config = GenerationConfig::new(32, true, true, true);
    let res = generate_many(&config, 2);
    assert_eq!(res.len(), 2);
    assert!(res.iter().all(|p| p.len() == 32));
    assert_eq!(estimate(&config).verdict, Verdict::VeryStrong);
}

#[test]
fn digits_and_lowercase_scenario() {
    let config = GenerationConfig::new(8, false, true, false);
    let out = generate(&config);
    assert_eq!(out.len(), 8);
    assert!(
        out.chars()
            .all(|c| "abcdefghijklmnopqrstuvwxyz0123456789".contains(c))
    );
}

#[test]
fn session_copies_latest_password() {
    let mut clipboard = RecordingClipboard::default();
    let mut session = Session::new(GenerationConfig::default(), &mut clipboard);
    assert_eq!(session.copy(), CopyOutcome::NothingToCopy);

    let first = session.generate().to_owned();
    assert_eq!(session.copy(), CopyOutcome::Copied);
    assert!(session.is_copied());

    let second = session.generate().to_owned();
    assert!(!session.is_copied());
    assert_eq!(session.copy(), CopyOutcome::Copied);
    assert_eq!(session.password(), Some(second.as_str()));

    drop(session);
    assert_eq!(clipboard.writes, vec![first, second]);
}

#[test]
fn session_survives_clipboard_failure() {
    let clipboard = RecordingClipboard {
        fail: true,
        ..Default::default()
    };
    let mut session = Session::new(GenerationConfig::default(), clipboard);
    session.generate();
    assert_eq!(session.copy(), CopyOutcome::Failed);
    assert!(!session.is_copied());
    assert!(session.password().is_some());
}
