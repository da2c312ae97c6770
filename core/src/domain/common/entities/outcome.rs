/// Value produced by an operation that may substitute a deterministic
/// fallback when its provider is unavailable.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Live(T),
    Fallback { value: T, reason: String },
}

impl<T> Outcome<T> {
    pub fn fallback(value: T, reason: impl Into<String>) -> Self {
        Outcome::Fallback {
            value,
            reason: reason.into(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Live(value) => value,
            Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Outcome::Live(value) => value,
            Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Live(value) => Outcome::Live(f(value)),
            Outcome::Fallback { value, reason } => Outcome::Fallback {
                value: f(value),
                reason,
            },
        }
    }
}
