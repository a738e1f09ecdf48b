//! Open/closed state of the responsive navbar's secondary menu.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Flip the state and return the new value. Always succeeds.
    pub fn toggle(&mut self) -> MenuState {
        *self = self.toggled();
        *self
    }

    pub fn toggled(self) -> MenuState {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// The secondary menu is shown exactly when the state is open.
    pub fn secondary_menu_visible(self) -> bool {
        self.is_open()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let state = MenuState::default();
        assert_eq!(state, MenuState::Closed);
        assert!(!state.secondary_menu_visible());
    }

    #[test]
    fn parity_of_toggles_decides_the_state() {
        let mut state = MenuState::default();
        for n in 1..=9 {
            let next = state.toggle();
            assert_eq!(next, state);
            assert_eq!(state.is_open(), n % 2 == 1, "after {n} toggles");
            assert_eq!(state.secondary_menu_visible(), state.is_open());
        }
    }

    #[test]
    fn renders_as_lowercase_words() {
        assert_eq!(MenuState::Open.to_string(), "open");
        assert_eq!(MenuState::Closed.toggled().as_str(), "open");
    }
}
