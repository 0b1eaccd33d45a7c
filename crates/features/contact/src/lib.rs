//! # Contact
//!
//! The message form never leaves the page: submitting it shows a confirmation overlay
//! addressed to the sender, and closing the overlay resets the form.

use folio_kernel::dom::ids::{
    CLOSE_CONFIRMATION, MESSAGE_CONFIRMATION, MESSAGE_CONTENT, MESSAGE_SUBJECT, SENDER_EMAIL,
    SENDER_NAME,
};
use folio_kernel::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

const FIELDS: [&str; 4] = [SENDER_NAME, SENDER_EMAIL, MESSAGE_SUBJECT, MESSAGE_CONTENT];

/// What the visitor typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Reads the form fields; absent fields read as empty.
    pub fn read(doc: &impl Document) -> Self {
        let field = |id: &str| doc.value(id).unwrap_or_default();
        Self {
            name: field(SENDER_NAME),
            email: field(SENDER_EMAIL),
            subject: field(MESSAGE_SUBJECT),
            message: field(MESSAGE_CONTENT),
        }
    }
}

#[derive(Debug, Default)]
pub struct ContactForm {
    last: Option<ContactMessage>,
}

impl ContactForm {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// The most recently submitted message.
    #[must_use]
    pub const fn last_message(&self) -> Option<&ContactMessage> {
        self.last.as_ref()
    }

    /// Shows the confirmation overlay for the current form content.
    ///
    /// A previous overlay that is still open is replaced.
    pub fn submit(&mut self, doc: &mut impl Document) -> Cue {
        let message = ContactMessage::read(doc);
        doc.remove(MESSAGE_CONFIRMATION);
        doc.append_to_body(confirmation(&message));

        info!(subject = %message.subject, "Contact message confirmed");
        self.last = Some(message);
        Cue::Click
    }

    /// Closes the overlay and empties the form.
    pub fn close_confirmation(doc: &mut impl Document) -> Cue {
        doc.remove(MESSAGE_CONFIRMATION);
        Self::clear(doc)
    }

    /// Resets every field to empty.
    pub fn clear(doc: &mut impl Document) -> Cue {
        for field in FIELDS {
            doc.set_value(field, "");
        }
        Cue::Click
    }
}

fn confirmation(message: &ContactMessage) -> Element {
    let content = Element::new("div")
        .class("confirmation-content")
        .style("background", "var(--card-bg)")
        .style("padding", "40px")
        .style("border-radius", "var(--radius-large)")
        .style("text-align", "center")
        .style("max-width", "500px")
        .style("box-shadow", "var(--shadow-heavy)")
        .style("animation", "pageFadeIn 0.5s forwards")
        .child(Element::new("i").class("fas").class("fa-paper-plane"))
        .child(Element::new("h3").text("Message Sent!"))
        .child(Element::new("p").text(format!(
            "Thank you, {}. Your message has been delivered to the digital forest.",
            message.name
        )))
        .child(Element::new("p").text(format!("I'll respond to you at {} soon!", message.email)))
        .child(Element::new("button").id(CLOSE_CONFIRMATION).class("btn-primary").text("OK"));

    Element::new("div")
        .id(MESSAGE_CONFIRMATION)
        .class(MESSAGE_CONFIRMATION)
        .style("position", "fixed")
        .style("inset", "0")
        .style("background-color", "rgba(0, 0, 0, 0.8)")
        .style("display", "flex")
        .style("justify-content", "center")
        .style("align-items", "center")
        .style("z-index", "1000")
        .style("backdrop-filter", "blur(10px)")
        .child(content)
}
