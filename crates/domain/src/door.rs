//! Front door state.

use std::fmt;

/// Latest reported door state, as stored (e.g. `open`, `closed`, `locked`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoorState(pub String);

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_raw_state() {
        assert_eq!(DoorState("locked".to_string()).to_string(), "locked");
    }
}
