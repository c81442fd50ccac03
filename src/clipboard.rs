use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::ClipboardError;

/// Copy text to the system clipboard.
/// Uses pbcopy on macOS, wl-copy on Wayland, xclip on X11.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let (cmd, args) = clipboard_command();
    pipe_to(cmd, args, text)
}

fn pipe_to(cmd: &'static str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ClipboardError::Spawn { cmd, source })?;

    // Close stdin before waiting, and reap the child even if the write failed.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    written?;

    if !status.success() {
        return Err(ClipboardError::Status { cmd, status });
    }

    Ok(())
}

#[cfg(target_os = "macos")]
fn clipboard_command() -> (&'static str, &'static [&'static str]) {
    ("pbcopy", &[])
}

#[cfg(not(target_os = "macos"))]
fn clipboard_command() -> (&'static str, &'static [&'static str]) {
    let session_type = std::env::var("XDG_SESSION_TYPE").unwrap_or_default();
    if session_type == "wayland" {
        ("wl-copy", &[])
    } else {
        ("xclip", &["-selection", "clipboard"])
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn reader_that_exits_early_is_a_write_error() {
        // `true` never reads stdin, so a payload larger than the pipe buffer hits a closed pipe.
        let payload = "x".repeat(1 << 20);
        let result = pipe_to("true", &[], &payload);
        assert!(matches!(result, Err(ClipboardError::Io(_))));
    }

    #[test]
    fn failing_tool_reports_its_status() {
        let result = pipe_to("false", &[], "");
        assert!(matches!(result, Err(ClipboardError::Status { cmd: "false", .. })));
    }

    #[test]
    fn missing_tool_is_a_spawn_error() {
        let result = pipe_to("newsdesk-no-such-clipboard-tool", &[], "text");
        assert!(matches!(result, Err(ClipboardError::Spawn { .. })));
    }
}
