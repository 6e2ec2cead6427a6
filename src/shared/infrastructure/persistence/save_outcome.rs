use crate::shared::core::outcome::Outcome;

/// How a save that touched no rows is reported.
///
/// `Permissive` reports it as a success carrying the payload the handler already
/// prepared, so "nothing changed" and "written" look the same to the caller. An update
/// that repeats the stored values lands here. `Strict` turns it into a `Failure` with
/// the handler's message instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SavePolicy {
    #[default]
    Permissive,
    Strict,
}

impl SavePolicy {
    pub fn from_strict_writes(strict: bool) -> Self {
        if strict {
            SavePolicy::Strict
        } else {
            SavePolicy::Permissive
        }
    }

    pub fn outcome<T>(self, payload: T, rows_affected: usize, failure: &str) -> Outcome<T> {
        match (self, rows_affected) {
            (SavePolicy::Strict, 0) => Outcome::failure(failure),
            _ => Outcome::success(payload),
        }
    }

    pub fn unit_outcome(self, rows_affected: usize, failure: &str) -> Outcome<()> {
        self.outcome((), rows_affected, failure)
    }
}
