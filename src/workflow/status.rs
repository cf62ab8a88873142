/// Outcome shown to the operator. Exactly one is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Success(_) | RequestStatus::Error(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            RequestStatus::Success(message) | RequestStatus::Error(message) => Some(message),
            RequestStatus::Idle | RequestStatus::Loading => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_outcomes_are_terminal() {
        assert!(!RequestStatus::Idle.is_terminal());
        assert!(!RequestStatus::Loading.is_terminal());
        assert!(RequestStatus::Success("ok".into()).is_terminal());
        assert!(RequestStatus::Error("no".into()).is_terminal());
        assert_eq!(RequestStatus::Error("no".into()).message(), Some("no"));
        assert_eq!(RequestStatus::Loading.message(), None);
    }
}
