use super::*;

fn filled() -> ContactForm {
    ContactForm {
        name: " John Doe ".to_owned(),
        email: "john@example.com".to_owned(),
        phone: String::new(),
        message: "How can I order?".to_owned(),
    }
}

// =============================================================
// ContactForm::validate
// =============================================================

#[test]
fn validate_trims_fields() {
    let ok = filled().validate().unwrap();
    assert_eq!(ok.name, "John Doe");
    assert_eq!(ok.email, "john@example.com");
    assert_eq!(ok.phone, "");
}

#[test]
fn validate_requires_name() {
    let form = ContactForm { name: "   ".to_owned(), ..filled() };
    assert_eq!(form.validate(), Err(ContactFormError::MissingName));
}

#[test]
fn validate_requires_email() {
    let form = ContactForm { email: String::new(), ..filled() };
    assert_eq!(form.validate(), Err(ContactFormError::MissingEmail));
}

#[test]
fn validate_rejects_malformed_email() {
    for bad in ["john", "john@", "@example.com", "john@example", "jo hn@example.com", "a@b@c.com", "a@b..com"] {
        let form = ContactForm { email: bad.to_owned(), ..filled() };
        assert_eq!(form.validate(), Err(ContactFormError::InvalidEmail), "{bad}");
    }
}

#[test]
fn validate_requires_message() {
    let form = ContactForm { message: "\n".to_owned(), ..filled() };
    assert_eq!(form.validate(), Err(ContactFormError::MissingMessage));
}

#[test]
fn phone_is_optional() {
    let form = ContactForm { phone: " +1 (555) 123-4567 ".to_owned(), ..filled() };
    assert_eq!(form.validate().unwrap().phone, "+1 (555) 123-4567");
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(ContactFormError::InvalidEmail.to_string(), "Please enter a valid email address.");
}

// =============================================================
// ContactState submission lifecycle
// =============================================================

#[test]
fn begin_submit_marks_submitting() {
    let mut state = ContactState { form: filled(), ..ContactState::default() };
    let payload = state.begin_submit();
    assert_eq!(payload.map(|p| p.name), Some("John Doe".to_owned()));
    assert!(state.submitting);
    assert!(state.error.is_none());
}

#[test]
fn begin_submit_while_submitting_is_rejected() {
    let mut state = ContactState { form: filled(), ..ContactState::default() };
    assert!(state.begin_submit().is_some());
    assert!(state.begin_submit().is_none());
}

#[test]
fn begin_submit_records_validation_error() {
    let mut state = ContactState::default();
    assert!(state.begin_submit().is_none());
    assert!(!state.submitting);
    assert_eq!(state.error, Some(ContactFormError::MissingName));
}

#[test]
fn finish_submit_resets_form() {
    let mut state = ContactState { form: filled(), ..ContactState::default() };
    state.begin_submit();
    state.finish_submit();
    assert_eq!(state.form, ContactForm::default());
    assert!(!state.submitting);
}

#[test]
fn payload_serializes_all_fields() {
    let json = serde_json::to_value(filled().validate().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "John Doe",
            "email": "john@example.com",
            "phone": "",
            "message": "How can I order?"
        })
    );
}
