//! Document-request wizard
//!
//! Three-step flow for requesting official documents (transcript, degree
//! certificate, migration certificate): details, delivery, review. Step
//! transitions validate the fields collected so far; the fee is a pure
//! function of copies and delivery method. Submitting or cancelling
//! consumes the wizard, so a finished request can never be stepped again.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Fee per requested copy, in rupees
pub const UNIT_FEE: u32 = 150;

/// Flat surcharge for courier delivery, in rupees
pub const COURIER_FEE: u32 = 100;

/// Number of steps in the document-request flow
pub const LAST_STEP: u8 = 3;

/// Document kinds a student can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    /// Official transcript of all grades
    Transcript,
    /// Degree certificate
    DegreeCertificate,
    /// Migration certificate
    MigrationCertificate,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transcript => write!(f, "Official Transcript"),
            Self::DegreeCertificate => write!(f, "Degree Certificate"),
            Self::MigrationCertificate => write!(f, "Migration Certificate"),
        }
    }
}

/// Declared purpose of the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Purpose {
    /// Application to another institution
    HigherStudies,
    /// Visa paperwork
    VisaApplication,
    /// Internship paperwork
    Internship,
    /// Anything else
    Other,
}

/// How the document should be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    /// Digital copy via e-mail (no surcharge)
    #[default]
    Digital,
    /// Physical courier (adds [`COURIER_FEE`])
    Courier,
}

/// Fee for a request: `copies * UNIT_FEE` plus the courier surcharge
#[must_use]
pub const fn request_fee(copies: u32, delivery: DeliveryMethod) -> u32 {
    let surcharge = match delivery {
        DeliveryMethod::Digital => 0,
        DeliveryMethod::Courier => COURIER_FEE,
    };
    copies * UNIT_FEE + surcharge
}

/// Fields collected across the wizard steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestForm {
    /// Purpose of the request (step 1)
    pub purpose: Option<Purpose>,
    /// Number of copies, at least one (step 1)
    pub copies: u32,
    /// Delivery method (step 2)
    pub delivery: DeliveryMethod,
    /// Shipping address, required for courier delivery (step 2)
    pub address: String,
}

impl Default for RequestForm {
    fn default() -> Self {
        Self {
            purpose: None,
            copies: 1,
            delivery: DeliveryMethod::default(),
            address: String::new(),
        }
    }
}

/// Why a wizard transition was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WizardError {
    /// Step 1 needs a purpose
    #[error("select a purpose for the request")]
    MissingPurpose,

    /// Step 1 needs at least one copy
    #[error("at least one copy is required")]
    NoCopies,

    /// Courier delivery needs an address
    #[error("a shipping address is required for courier delivery")]
    MissingAddress,

    /// Submit is only valid from the review step
    #[error("cannot submit from step {0}; review the request first")]
    NotAtReviewStep(u8),
}

/// The finalized request handed to the submission sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRequestPayload {
    /// Requested document kind
    pub document: DocumentType,
    /// Declared purpose
    pub purpose: Purpose,
    /// Number of copies
    pub copies: u32,
    /// Delivery method
    pub delivery: DeliveryMethod,
    /// Shipping address, present for courier delivery only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Total fee in rupees
    pub fee: u32,
}

/// State machine for one document request
///
/// Created at step 1 with an empty form. `next` advances only when the
/// current step's fields validate; `back` always works and stops at step 1;
/// `submit` finalizes from the review step; `cancel` discards everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestWizard {
    document: DocumentType,
    step: u8,
    /// Form fields, filled in by the surrounding UI as the student types
    pub form: RequestForm,
}

impl RequestWizard {
    /// Open the wizard for a document type
    #[must_use]
    pub fn new(document: DocumentType) -> Self {
        Self {
            document,
            step: 1,
            form: RequestForm::default(),
        }
    }

    /// Document this request is for
    #[must_use]
    pub const fn document(&self) -> DocumentType {
        self.document
    }

    /// Current step, 1-based
    #[must_use]
    pub const fn step(&self) -> u8 {
        self.step
    }

    /// Whether the wizard is at the review step
    #[must_use]
    pub const fn at_review(&self) -> bool {
        self.step == LAST_STEP
    }

    /// Fee for the form as currently filled in
    #[must_use]
    pub const fn fee(&self) -> u32 {
        request_fee(self.form.copies, self.form.delivery)
    }

    /// Advance to the next step after validating the current one
    ///
    /// Already at the review step, this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the validation failure of the current step.
    pub fn next(&mut self) -> Result<u8, WizardError> {
        self.validate_step(self.step)?;
        if self.step < LAST_STEP {
            self.step += 1;
        }
        Ok(self.step)
    }

    /// Go back one step; a no-op at step 1
    pub fn back(&mut self) -> u8 {
        if self.step > 1 {
            self.step -= 1;
        }
        self.step
    }

    /// Finalize the request, consuming the wizard
    ///
    /// # Errors
    ///
    /// Fails unless the wizard is at the review step with every collected
    /// field valid.
    pub fn submit(self) -> Result<DocumentRequestPayload, WizardError> {
        if !self.at_review() {
            return Err(WizardError::NotAtReviewStep(self.step));
        }
        self.validate_step(1)?;
        self.validate_step(2)?;

        let purpose = self.form.purpose.ok_or(WizardError::MissingPurpose)?;
        let address = match self.form.delivery {
            DeliveryMethod::Courier => Some(self.form.address.trim().to_string()),
            DeliveryMethod::Digital => None,
        };

        Ok(DocumentRequestPayload {
            document: self.document,
            purpose,
            copies: self.form.copies,
            delivery: self.form.delivery,
            address,
            fee: request_fee(self.form.copies, self.form.delivery),
        })
    }

    /// Abandon the request, discarding the collected state
    pub fn cancel(self) {
        drop(self);
    }

    fn validate_step(&self, step: u8) -> Result<(), WizardError> {
        match step {
            1 => {
                if self.form.purpose.is_none() {
                    return Err(WizardError::MissingPurpose);
                }
                if self.form.copies == 0 {
                    return Err(WizardError::NoCopies);
                }
                Ok(())
            }
            2 => {
                if self.form.delivery == DeliveryMethod::Courier
                    && self.form.address.trim().is_empty()
                {
                    return Err(WizardError::MissingAddress);
                }
                Ok(())
            }
            // The review step collects nothing new.
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard() -> RequestWizard {
        let mut wizard = RequestWizard::new(DocumentType::Transcript);
        wizard.form.purpose = Some(Purpose::HigherStudies);
        wizard.form.copies = 2;
        wizard
    }

    #[test]
    fn opens_at_step_one_with_defaults() {
        let wizard = RequestWizard::new(DocumentType::DegreeCertificate);
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.form.copies, 1);
        assert_eq!(wizard.form.delivery, DeliveryMethod::Digital);
        assert!(wizard.form.purpose.is_none());
    }

    #[test]
    fn next_requires_a_purpose() {
        let mut wizard = RequestWizard::new(DocumentType::Transcript);
        assert_eq!(wizard.next(), Err(WizardError::MissingPurpose));
        assert_eq!(wizard.step(), 1);
    }

    #[test]
    fn next_requires_at_least_one_copy() {
        let mut wizard = filled_wizard();
        wizard.form.copies = 0;
        assert_eq!(wizard.next(), Err(WizardError::NoCopies));
    }

    #[test]
    fn walks_forward_and_back() {
        let mut wizard = filled_wizard();
        assert_eq!(wizard.next(), Ok(2));
        assert_eq!(wizard.next(), Ok(3));
        assert!(wizard.at_review());
        assert_eq!(wizard.back(), 2);
        assert_eq!(wizard.back(), 1);
        // Back at step 1 stays put.
        assert_eq!(wizard.back(), 1);
    }

    #[test]
    fn courier_requires_an_address() {
        let mut wizard = filled_wizard();
        assert_eq!(wizard.next(), Ok(2));
        wizard.form.delivery = DeliveryMethod::Courier;
        assert_eq!(wizard.next(), Err(WizardError::MissingAddress));

        wizard.form.address = "Hostel Block C, IIIT Delhi".to_string();
        assert_eq!(wizard.next(), Ok(3));
    }

    #[test]
    fn submit_is_rejected_before_the_review_step() {
        let wizard = filled_wizard();
        assert_eq!(wizard.submit(), Err(WizardError::NotAtReviewStep(1)));
    }

    #[test]
    fn submit_produces_payload_with_fee() {
        let mut wizard = filled_wizard();
        wizard.next().expect("to step 2");
        wizard.next().expect("to review");

        let payload = wizard.submit().expect("submits");
        assert_eq!(payload.document, DocumentType::Transcript);
        assert_eq!(payload.purpose, Purpose::HigherStudies);
        assert_eq!(payload.copies, 2);
        assert_eq!(payload.address, None);
        assert_eq!(payload.fee, 300);
    }

    #[test]
    fn courier_submission_carries_address_and_surcharge() {
        let mut wizard = filled_wizard();
        wizard.next().expect("to step 2");
        wizard.form.delivery = DeliveryMethod::Courier;
        wizard.form.address = "  Hostel Block C  ".to_string();
        wizard.next().expect("to review");

        let payload = wizard.submit().expect("submits");
        assert_eq!(payload.address.as_deref(), Some("Hostel Block C"));
        // 2 copies * 150 + 100 courier
        assert_eq!(payload.fee, 400);
    }

    #[test]
    fn fee_is_pure_in_copies_and_delivery() {
        assert_eq!(request_fee(1, DeliveryMethod::Digital), 150);
        assert_eq!(request_fee(3, DeliveryMethod::Digital), 450);
        assert_eq!(request_fee(1, DeliveryMethod::Courier), 250);
        assert_eq!(request_fee(0, DeliveryMethod::Courier), 100);
    }

    #[test]
    fn fee_tracks_the_form() {
        let mut wizard = filled_wizard();
        assert_eq!(wizard.fee(), 300);
        wizard.form.delivery = DeliveryMethod::Courier;
        assert_eq!(wizard.fee(), 400);
    }
}
