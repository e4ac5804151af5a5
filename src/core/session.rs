//! Login-scoped session state
//!
//! The portal keeps no global session singleton. Whoever needs the
//! signed-in student receives a [`SessionContext`] created at login and
//! dropped at logout. [`FetchSequencer`] guards the apply side of
//! asynchronous fetches: when the user switches terms faster than the
//! network answers, a stale response must never overwrite a newer one.
//! All of this runs on the single-threaded event loop, so plain `&mut`
//! state is enough.

use crate::core::models::StudentProfile;

/// Explicit session context created at login and torn down at logout
#[derive(Debug, Clone)]
pub struct SessionContext {
    student: StudentProfile,
}

impl SessionContext {
    /// Initialize the context with the freshly fetched profile
    #[must_use]
    pub const fn init(student: StudentProfile) -> Self {
        Self { student }
    }

    /// The signed-in student
    #[must_use]
    pub const fn student(&self) -> &StudentProfile {
        &self.student
    }

    /// Tear the session down, discarding the profile
    pub fn teardown(self) {
        drop(self);
    }
}

/// Ticket identifying one in-flight fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Orders fetch results so only the freshest one is applied
///
/// `begin` issues a monotonically increasing ticket per fetch; `accept`
/// answers whether a resolved fetch may still be applied. A result is
/// discarded exactly when a fetch issued later has already completed.
#[derive(Debug, Default)]
pub struct FetchSequencer {
    issued: u64,
    completed: u64,
}

impl FetchSequencer {
    /// Create a sequencer with no fetches issued
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issued: 0,
            completed: 0,
        }
    }

    /// Register a new fetch and return its ticket
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Decide whether the result of `ticket` should be applied
    ///
    /// Returns `false` when a newer fetch already completed (the result is
    /// stale and must be discarded). Otherwise marks the ticket completed
    /// and returns `true`.
    pub fn accept(&mut self, ticket: FetchTicket) -> bool {
        if ticket.0 <= self.completed {
            return false;
        }
        self.completed = ticket.0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Role;

    fn profile() -> StudentProfile {
        StudentProfile {
            id: "s-1".to_string(),
            name: "Asha Verma".to_string(),
            email: "asha@example.edu".to_string(),
            role: Role::Student,
            roll_number: "2021101".to_string(),
            program: "B.Tech CSE".to_string(),
            cgpa: 8.71,
            credits_completed: 96,
            is_active: true,
        }
    }

    #[test]
    fn context_exposes_the_profile_until_teardown() {
        let context = SessionContext::init(profile());
        assert_eq!(context.student().roll_number, "2021101");
        context.teardown();
    }

    #[test]
    fn in_order_results_are_all_applied() {
        let mut sequencer = FetchSequencer::new();
        let first = sequencer.begin();
        let second = sequencer.begin();

        assert!(sequencer.accept(first));
        assert!(sequencer.accept(second));
    }

    #[test]
    fn stale_result_after_newer_completion_is_discarded() {
        let mut sequencer = FetchSequencer::new();
        let stale = sequencer.begin();
        let fresh = sequencer.begin();

        // The newer fetch resolves first; the older one must be dropped.
        assert!(sequencer.accept(fresh));
        assert!(!sequencer.accept(stale));
    }

    #[test]
    fn a_ticket_is_applied_at_most_once() {
        let mut sequencer = FetchSequencer::new();
        let ticket = sequencer.begin();
        assert!(sequencer.accept(ticket));
        assert!(!sequencer.accept(ticket));
    }
}
