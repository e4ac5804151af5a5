//! Integration tests for the document-request wizard

use campus_analytics::core::requests::{
    request_fee, DeliveryMethod, DocumentType, Purpose, RequestWizard, WizardError, COURIER_FEE,
    UNIT_FEE,
};

#[test]
fn full_digital_request_flow() {
    let mut wizard = RequestWizard::new(DocumentType::Transcript);
    assert_eq!(wizard.step(), 1);

    // Step 1 cannot be left until its fields validate.
    assert_eq!(wizard.next(), Err(WizardError::MissingPurpose));
    wizard.form.purpose = Some(Purpose::HigherStudies);
    wizard.form.copies = 3;
    assert_eq!(wizard.next(), Ok(2));

    // Digital delivery needs no address.
    assert_eq!(wizard.next(), Ok(3));
    assert!(wizard.at_review());

    let payload = wizard.submit().expect("submits from review");
    assert_eq!(payload.document, DocumentType::Transcript);
    assert_eq!(payload.copies, 3);
    assert_eq!(payload.delivery, DeliveryMethod::Digital);
    assert_eq!(payload.address, None);
    assert_eq!(payload.fee, 3 * UNIT_FEE);
}

#[test]
fn courier_flow_charges_the_surcharge_and_keeps_the_address() {
    let mut wizard = RequestWizard::new(DocumentType::DegreeCertificate);
    wizard.form.purpose = Some(Purpose::VisaApplication);
    wizard.next().expect("to delivery step");

    wizard.form.delivery = DeliveryMethod::Courier;
    assert_eq!(wizard.next(), Err(WizardError::MissingAddress));

    wizard.form.address = "14 MG Road, New Delhi".to_string();
    wizard.next().expect("to review");

    let payload = wizard.submit().expect("submits");
    assert_eq!(payload.address.as_deref(), Some("14 MG Road, New Delhi"));
    assert_eq!(payload.fee, UNIT_FEE + COURIER_FEE);
}

#[test]
fn back_revises_earlier_steps_without_losing_fields() {
    let mut wizard = RequestWizard::new(DocumentType::MigrationCertificate);
    wizard.form.purpose = Some(Purpose::Other);
    wizard.next().expect("to step 2");
    wizard.next().expect("to review");

    // Go back and bump the copies; the collected fields survive.
    assert_eq!(wizard.back(), 2);
    assert_eq!(wizard.back(), 1);
    assert_eq!(wizard.back(), 1);
    wizard.form.copies = 2;

    wizard.next().expect("forward again");
    wizard.next().expect("to review again");
    let payload = wizard.submit().expect("submits");
    assert_eq!(payload.copies, 2);
    assert_eq!(payload.fee, 2 * UNIT_FEE);
}

#[test]
fn submit_outside_the_review_step_is_refused() {
    let mut wizard = RequestWizard::new(DocumentType::Transcript);
    wizard.form.purpose = Some(Purpose::Internship);

    assert_eq!(
        wizard.clone().submit(),
        Err(WizardError::NotAtReviewStep(1))
    );

    wizard.next().expect("to step 2");
    assert_eq!(wizard.submit(), Err(WizardError::NotAtReviewStep(2)));
}

#[test]
fn cancelling_discards_the_wizard() {
    let mut wizard = RequestWizard::new(DocumentType::Transcript);
    wizard.form.purpose = Some(Purpose::HigherStudies);
    // Consumes the wizard; the request is gone.
    wizard.cancel();
}

#[test]
fn fee_table_matches_the_portal() {
    assert_eq!(request_fee(1, DeliveryMethod::Digital), 150);
    assert_eq!(request_fee(2, DeliveryMethod::Digital), 300);
    assert_eq!(request_fee(1, DeliveryMethod::Courier), 250);
    assert_eq!(request_fee(4, DeliveryMethod::Courier), 700);
}

#[test]
fn payload_serializes_with_kebab_case_enums() {
    let mut wizard = RequestWizard::new(DocumentType::DegreeCertificate);
    wizard.form.purpose = Some(Purpose::HigherStudies);
    wizard.next().expect("to step 2");
    wizard.next().expect("to review");

    let payload = wizard.submit().expect("submits");
    let json = serde_json::to_string(&payload).expect("serializes");
    assert!(json.contains("\"degree-certificate\""));
    assert!(json.contains("\"higher-studies\""));
    assert!(json.contains("\"digital\""));
    assert!(!json.contains("address"));
}
