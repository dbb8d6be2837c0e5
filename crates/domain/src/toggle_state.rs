use std::fmt;

/// State of the single user-facing unblock affordance for a displayed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleState {
    /// Nothing to offer: not a web page, or an IP page we do not manage.
    Inactive,
    /// The domain can be unblocked.
    Blocked,
    /// Currently served through its resolved IP; can be re-blocked.
    Unblocked,
}

impl ToggleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleState::Inactive => "inactive",
            ToggleState::Blocked => "blocked",
            ToggleState::Unblocked => "unblocked",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ToggleState::Inactive => "This site cannot be unblocked.",
            ToggleState::Blocked => "Unblock this site!",
            ToggleState::Unblocked => "Disable unblocker on this site.",
        }
    }
}

impl fmt::Display for ToggleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
