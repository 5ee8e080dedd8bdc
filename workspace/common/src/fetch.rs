use thiserror::Error;

/// API fetch state enum.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Failure of one forecast lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The service answered with a non-success status.
    #[error("City not found")]
    NotFound,
    /// Transport failure or an unreadable body, carrying the underlying
    /// message.
    #[error("{0}")]
    Network(String),
}

/// Mutually exclusive display mode of the forecast view.
///
/// Derived on every render from the welcome flag and the fetch state,
/// never stored, so contradictory flag combinations cannot exist.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<'a, T> {
    Welcome,
    Idle,
    Loading,
    Error(&'a str),
    Loaded(&'a T),
}

impl<'a, T> ViewState<'a, T> {
    /// The welcome banner wins over everything else during its window.
    pub fn derive(show_welcome: bool, fetch: &'a FetchState<T>) -> Self {
        if show_welcome {
            return Self::Welcome;
        }
        match fetch {
            FetchState::NotStarted => Self::Idle,
            FetchState::Loading => Self::Loading,
            FetchState::Error(message) => Self::Error(message),
            FetchState::Success(data) => Self::Loaded(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_state_accessors() {
        let state: FetchState<u32> = FetchState::default();
        assert!(!state.is_loading() && !state.is_success() && !state.is_error());
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), None);

        assert!(FetchState::<u32>::Loading.is_loading());

        let loaded = FetchState::Success(7u32);
        assert!(loaded.is_success());
        assert_eq!(loaded.data(), Some(&7));

        let failed = FetchState::<u32>::Error("boom".into());
        assert!(failed.is_error());
        assert_eq!(failed.error(), Some("boom"));
    }

    #[test]
    fn test_welcome_wins_over_every_fetch_state() {
        let states = [
            FetchState::NotStarted,
            FetchState::Loading,
            FetchState::Success(1u32),
            FetchState::Error("x".into()),
        ];
        for state in &states {
            assert_eq!(ViewState::derive(true, state), ViewState::Welcome);
        }
    }

    #[test]
    fn test_fetch_states_map_once_welcome_dismissed() {
        assert_eq!(
            ViewState::<u32>::derive(false, &FetchState::NotStarted),
            ViewState::Idle
        );
        assert_eq!(
            ViewState::<u32>::derive(false, &FetchState::Loading),
            ViewState::Loading
        );
        assert_eq!(
            ViewState::derive(false, &FetchState::Success(5u32)),
            ViewState::Loaded(&5)
        );
        assert_eq!(
            ViewState::<u32>::derive(false, &FetchState::Error("down".into())),
            ViewState::Error("down")
        );
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::NotFound.to_string(), "City not found");
        assert_eq!(
            FetchError::Network("connection refused".into()).to_string(),
            "connection refused"
        );
    }
}
