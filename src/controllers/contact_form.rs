//! Contact form submit handling. Nothing is sent anywhere.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement};

use crate::error::PageError;
use crate::state::contact::{ContactField, ContactSubmission};
use crate::util::dom::{alert, field_value, listen, optional_by_id};

const FORM_ID: &str = "contactForm";

fn read_submission(doc: &Document) -> Result<ContactSubmission, PageError> {
    let mut submission = ContactSubmission::default();
    for field in ContactField::ALL {
        submission.set_field(field, field_value(doc, field.element_id())?);
    }
    Ok(submission)
}

pub fn bind(doc: &Document) -> Result<(), PageError> {
    let Some(form) = optional_by_id(doc, FORM_ID) else {
        return Ok(());
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| PageError::WrongElementType { id: FORM_ID.to_owned(), expected: "form" })?;

    let doc = doc.clone();
    let target = form.clone();
    listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let submission = match read_submission(&doc) {
            Ok(submission) => submission,
            Err(e) => {
                log::warn!("contact form unreadable: {e}");
                return;
            }
        };
        let outcome = submission.submit();
        alert(outcome.message());
        if outcome.clears_form() {
            target.reset();
        }
    })
}
