use super::*;

fn filled() -> ContactForm {
    let mut form = ContactForm::default();
    form.set_field(Field::Name, "Alice".to_owned());
    form.set_field(Field::Email, "a@example.com".to_owned());
    form.set_field(Field::Message, "hi".to_owned());
    form
}

#[test]
fn incomplete_form_sends_nothing_and_shows_notice() {
    let mut form = filled();
    form.set_field(Field::Email, "   ".to_owned());

    assert_eq!(form.begin_submit(), None);
    assert!(!form.submitting);
    let notice = form.notice.expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, INCOMPLETE);
}

#[test]
fn complete_form_yields_trimmed_payload() {
    let mut form = filled();
    form.set_field(Field::Name, "  Alice ".to_owned());

    let payload = form.begin_submit().expect("payload");
    assert_eq!(payload.name, "Alice");
    assert_eq!(payload.email, "a@example.com");
    assert_eq!(payload.message, "hi");
    assert!(form.submitting);
    assert_eq!(form.notice, None);
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut form = filled();
    assert!(form.begin_submit().is_some());
    assert_eq!(form.begin_submit(), None);
}

#[test]
fn success_clears_inputs() {
    let mut form = filled();
    form.begin_submit();
    form.finish_submit(&SubmitOutcome::Success { id: 7 });

    assert!(!form.submitting);
    assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    assert_eq!(form.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Success));
}

#[test]
fn server_error_keeps_inputs() {
    let mut form = filled();
    form.begin_submit();
    form.finish_submit(&SubmitOutcome::ServerError);

    assert_eq!(form.name, "Alice");
    assert_eq!(form.message, "hi");
    let notice = form.notice.expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, SEND_FAILED);
}

#[test]
fn validation_error_names_fields() {
    let mut form = filled();
    form.begin_submit();
    form.finish_submit(&SubmitOutcome::ValidationError { fields: vec!["name".to_owned(), "email".to_owned()] });

    assert_eq!(form.notice.expect("notice").text, "Please check: name, email");
    assert_eq!(form.email, "a@example.com");
}

#[test]
fn stale_dismiss_does_not_clear_newer_notice() {
    let mut form = ContactForm::default();
    form.begin_submit();
    let first = form.notice.as_ref().expect("incomplete notice").seq;

    form = ContactForm { name: "A".to_owned(), email: "b".to_owned(), message: "c".to_owned(), ..form };
    form.begin_submit();
    let second = form.finish_submit(&SubmitOutcome::ServerError);
    assert!(second > first);

    form.dismiss_notice(first);
    assert!(form.notice.is_some());
    form.dismiss_notice(second);
    assert_eq!(form.notice, None);
}
