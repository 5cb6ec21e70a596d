// SPDX-License-Identifier: MPL-2.0
//! Contact form: field editing, validation and submission.

mod form;
mod submit_button;

pub use form::{ContactForm, Event, Message, ViewContext, FIELD_IDS};
pub use submit_button::SubmitButton;
