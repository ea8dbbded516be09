use crate::options::BlindOptions;

/// Visibility of a blind's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlindState {
    #[default]
    Closed,
    Open,
}

impl BlindState {
    pub fn is_open(self) -> bool {
        self == BlindState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            BlindState::Closed => BlindState::Open,
            BlindState::Open => BlindState::Closed,
        }
    }

    /// Modifier class marking this state on the content wrapper.
    pub fn class(self, options: &BlindOptions) -> String {
        let modifier = match self {
            BlindState::Closed => "closed",
            BlindState::Open => "open",
        };
        format!("{}--{modifier}", options.content_class())
    }
}
