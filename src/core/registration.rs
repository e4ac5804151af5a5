//! Course registration validation
//!
//! Maintains a student's tentative registration set for a term and decides
//! whether a candidate course may join it. Operations are purely
//! functional: they never perform I/O and return a new set instead of
//! mutating in place, so the surrounding event loop can adopt or discard
//! the result. Rejections are ordinary values the caller branches on, each
//! carrying a stable reason code and a human-readable message.

use thiserror::Error;

use crate::core::models::CourseOffering;
use crate::core::sources::RegistrationPayload;

/// Maximum credits a student may register for in one term
pub const MAX_CREDITS: u32 = 22;

/// Why a candidate course was rejected from the registration set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// The course is already in the set
    #[error("course is already registered")]
    Duplicate,

    /// Adding the course would push the credit load past [`MAX_CREDITS`]
    #[error("credit limit exceeded: {load} + {candidate} credits is over the maximum of {max}")]
    CreditLimitExceeded {
        /// Current credit load of the set
        load: u32,
        /// Credits of the rejected candidate
        candidate: u32,
        /// The credit cap that would be exceeded
        max: u32,
    },

    /// The course overlaps an already-registered course on the same day
    #[error("schedule conflict with {with}")]
    ScheduleConflict {
        /// Code of the conflicting course already in the set
        with: String,
    },
}

impl RejectionReason {
    /// Stable machine-readable reason code for the UI layer
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Duplicate => "DUPLICATE",
            Self::CreditLimitExceeded { .. } => "CREDIT_LIMIT_EXCEEDED",
            Self::ScheduleConflict { .. } => "SCHEDULE_CONFLICT",
        }
    }
}

/// A student's tentative course selection for a term
///
/// Ordered by registration (append order is display order), unique by
/// course id. Invariants held after every successful [`try_register`]:
/// the credit load never exceeds [`MAX_CREDITS`] and no two members share
/// an overlapping same-day meeting.
///
/// [`try_register`]: RegistrationSet::try_register
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationSet {
    courses: Vec<CourseOffering>,
}

impl RegistrationSet {
    /// Create an empty registration set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
        }
    }

    /// Registered courses in registration order
    #[must_use]
    pub fn courses(&self) -> &[CourseOffering] {
        &self.courses
    }

    /// Number of registered courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Whether a course id is already registered
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.courses.iter().any(|c| c.id == id)
    }

    /// Total credits of the registered courses
    #[must_use]
    pub fn credit_load(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// Validate a candidate and, on success, return the set with it appended
    ///
    /// Checks run in a fixed order, cheapest first: duplicate id, then the
    /// credit cap, and only then the pairwise schedule scan. The first
    /// failing check decides the rejection.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] of the first failing check.
    pub fn try_register(&self, candidate: &CourseOffering) -> Result<Self, RejectionReason> {
        if self.contains(&candidate.id) {
            return Err(RejectionReason::Duplicate);
        }

        let load = self.credit_load();
        if load + candidate.credits > MAX_CREDITS {
            return Err(RejectionReason::CreditLimitExceeded {
                load,
                candidate: candidate.credits,
                max: MAX_CREDITS,
            });
        }

        if let Some(existing) = self
            .courses
            .iter()
            .find(|c| c.schedule.overlaps(&candidate.schedule))
        {
            return Err(RejectionReason::ScheduleConflict {
                with: existing.code.clone(),
            });
        }

        let mut next = self.clone();
        next.courses.push(candidate.clone());
        Ok(next)
    }

    /// Return the set without the course of the given id
    ///
    /// Removing an id that is not registered is a no-op, not an error.
    #[must_use]
    pub fn deregister(&self, id: &str) -> Self {
        Self {
            courses: self
                .courses
                .iter()
                .filter(|c| c.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Build the finalize-registration payload for the submission sink
    #[must_use]
    pub fn to_payload(&self, term: &str) -> RegistrationPayload {
        RegistrationPayload {
            term: term.to_string(),
            course_ids: self.courses.iter().map(|c| c.id.clone()).collect(),
        }
    }
}
