//! Window command wire vocabulary.
//!
//! The controller accepts plain UTF-8 text commands with **no terminator**:
//! `window_open`, `window_close`, `window_status`, `set_open_angle=<int>`.
//! `Display` renders the exact bytes that go on the wire.

use std::fmt;

/// A command understood by the window controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    /// Open the window.
    Open,
    /// Close the window.
    Close,
    /// Ask the controller to report the current window state.
    Status,
    /// Set the opening angle. The controller's accepted range is
    /// undocumented; any integer is forwarded as-is.
    SetAngle(i32),
}

impl fmt::Display for WindowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("window_open"),
            Self::Close => f.write_str("window_close"),
            Self::Status => f.write_str("window_status"),
            Self::SetAngle(angle) => write!(f, "set_open_angle={angle}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_fixed_commands() {
        assert_eq!(WindowCommand::Open.to_string(), "window_open");
        assert_eq!(WindowCommand::Close.to_string(), "window_close");
        assert_eq!(WindowCommand::Status.to_string(), "window_status");
    }

    #[test]
    fn should_render_angle_without_terminator() {
        let wire = WindowCommand::SetAngle(45).to_string();
        assert_eq!(wire, "set_open_angle=45");
        assert!(!wire.ends_with('\n'));
    }

    #[test]
    fn should_forward_any_integer_angle() {
        assert_eq!(WindowCommand::SetAngle(-10).to_string(), "set_open_angle=-10");
        assert_eq!(WindowCommand::SetAngle(720).to_string(), "set_open_angle=720");
    }
}
