use folio_contact::{ContactForm, ContactMessage};
use folio_kernel::prelude::*;

fn page() -> MemoryDocument {
    MemoryDocument::new(
        Element::new("body").child(
            Element::new("form")
                .id("message-form")
                .child(Element::new("input").id("sender-name"))
                .child(Element::new("input").id("sender-email"))
                .child(Element::new("input").id("message-subject"))
                .child(Element::new("textarea").id("message-content")),
        ),
    )
}

fn fill(doc: &mut MemoryDocument) {
    doc.set_value("sender-name", "Aiko");
    doc.set_value("sender-email", "a@x.com");
    doc.set_value("message-subject", "Hi");
    doc.set_value("message-content", "Hello");
}

#[test]
fn submitting_shows_an_addressed_confirmation() {
    let mut doc = page();
    fill(&mut doc);
    let mut form = ContactForm::new();

    assert_eq!(form.submit(&mut doc), Cue::Click);

    let overlay = doc.text("message-confirmation").unwrap();
    assert!(overlay.contains("Thank you, Aiko."));
    assert!(overlay.contains("a@x.com soon!"));
    assert!(doc.contains("close-confirmation"));
    assert_eq!(
        form.last_message(),
        Some(&ContactMessage {
            name: "Aiko".to_owned(),
            email: "a@x.com".to_owned(),
            subject: "Hi".to_owned(),
            message: "Hello".to_owned(),
        })
    );
}

#[test]
fn closing_removes_the_overlay_and_empties_the_form() {
    let mut doc = page();
    fill(&mut doc);
    let mut form = ContactForm::new();
    form.submit(&mut doc);

    ContactForm::close_confirmation(&mut doc);

    assert!(!doc.contains("message-confirmation"));
    assert_eq!(ContactMessage::read(&doc), ContactMessage::default());
}

#[test]
fn resubmitting_keeps_a_single_overlay() {
    let mut doc = page();
    fill(&mut doc);
    let mut form = ContactForm::new();

    form.submit(&mut doc);
    form.submit(&mut doc);

    assert_eq!(doc.ids_with_class("message-confirmation").len(), 1);
}

#[test]
fn clear_resets_fields_without_an_overlay() {
    let mut doc = page();
    fill(&mut doc);

    ContactForm::clear(&mut doc);

    assert_eq!(doc.value("sender-email").as_deref(), Some(""));
    assert!(!doc.contains("message-confirmation"));
}

#[test]
fn messages_serialize_with_field_names() {
    let mut doc = page();
    fill(&mut doc);
    let json = serde_json::to_value(ContactMessage::read(&doc)).unwrap();
    assert_eq!(json["email"], "a@x.com");
    assert_eq!(json["message"], "Hello");
}
