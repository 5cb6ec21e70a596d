// SPDX-License-Identifier: MPL-2.0
//! Contact form controller.
//!
//! Submitting trims the four fields and validates them. A rejected form
//! reports the first failing rule to the parent and stays untouched. An
//! accepted form puts the submit control in its busy state and hands the
//! values to the [`ContactTransport`]; once the transport answers the
//! control is restored and, on success, the fields are cleared.

use super::submit_button::SubmitButton;
use crate::application::port::{ContactTransport, SubmitSurface, TransportError};
use crate::domain::contact::{FormFields, ValidationError};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text_editor, text_input, Column, Id, Text};
use iced::{Element, Length, Task};
use std::fmt;
use std::sync::Arc;

/// Widget ids of the four inputs, in tab order.
pub const FIELD_IDS: [&str; 4] = [
    "contact-name",
    "contact-email",
    "contact-subject",
    "contact-message",
];

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Focused inputs get a stronger outline while the visitor uses the keyboard.
    pub keyboard_navigation: bool,
}

/// Messages emitted by the form widgets and the transport.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    /// Replaces the whole message body.
    MessageChanged(String),
    /// An edit made in the multi-line message editor.
    MessageEdited(text_editor::Action),
    Submit,
    Submitted(Result<(), TransportError>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Validation failed; nothing was sent.
    Rejected(ValidationError),
    /// The transport accepted the message and the form was cleared.
    Delivered,
    /// The transport failed; the fields are kept for another attempt.
    Failed(TransportError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    /// Holds the values that were sent.
    Submitting(FormFields),
}

/// State of the contact form.
pub struct ContactForm<S: SubmitSurface = SubmitButton> {
    name: String,
    email: String,
    subject: String,
    message: String,
    /// Editor state mirroring `message`.
    editor: text_editor::Content,
    phase: Phase,
    submit: S,
    busy_label: String,
    transport: Arc<dyn ContactTransport>,
}

impl<S: SubmitSurface> ContactForm<S> {
    /// Creates an empty form.
    ///
    /// `busy_label` replaces the submit label while a submission is in flight.
    pub fn new(
        transport: Arc<dyn ContactTransport>,
        submit: S,
        busy_label: impl Into<String>,
    ) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            editor: text_editor::Content::new(),
            phase: Phase::Idle,
            submit,
            busy_label: busy_label.into(),
            transport,
        }
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::NameChanged(value) => self.name = value,
            Message::EmailChanged(value) => self.email = value,
            Message::SubjectChanged(value) => self.subject = value,
            Message::MessageChanged(value) => {
                self.editor = text_editor::Content::with_text(&value);
                self.message = value;
            }
            Message::MessageEdited(action) => {
                let edit = action.is_edit();
                self.editor.perform(action);
                if edit {
                    self.message = self.editor.text();
                }
            }
            Message::Submit => return self.submit(),
            Message::Submitted(result) => return (self.complete(result), Task::none()),
        }
        (Event::None, Task::none())
    }

    fn submit(&mut self) -> (Event, Task<Message>) {
        if self.is_submitting() {
            tracing::debug!("Submit ignored while a submission is in flight");
            return (Event::None, Task::none());
        }

        let fields = FormFields::trimmed(&self.name, &self.email, &self.subject, &self.message);
        if let Err(error) = fields.validate() {
            return (Event::Rejected(error), Task::none());
        }

        self.submit.set_busy(&self.busy_label);
        let delivery = self.transport.send(fields.clone());
        self.phase = Phase::Submitting(fields);

        (Event::None, Task::perform(delivery, Message::Submitted))
    }

    fn complete(&mut self, result: Result<(), TransportError>) -> Event {
        let Phase::Submitting(fields) = std::mem::replace(&mut self.phase, Phase::Idle) else {
            tracing::debug!("Submission result arrived with no submission in flight");
            return Event::None;
        };
        self.submit.restore();

        match result {
            Ok(()) => {
                tracing::info!(
                    name = %fields.name,
                    email = %fields.email,
                    subject = %fields.subject,
                    message = %fields.message,
                    "Form submitted successfully"
                );
                self.clear();
                Event::Delivered
            }
            Err(error) => {
                tracing::warn!(%error, "Contact form delivery failed");
                Event::Failed(error)
            }
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.editor = text_editor::Content::new();
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting(_))
    }

    /// Raw (untrimmed) field values: name, email, subject, message.
    #[must_use]
    pub fn values(&self) -> [&str; 4] {
        [&self.name, &self.email, &self.subject, &self.message]
    }

    #[must_use]
    pub fn submit_surface(&self) -> &S {
        &self.submit
    }
}

impl<S: SubmitSurface + fmt::Debug> fmt::Debug for ContactForm<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("subject", &self.subject)
            .field("message", &self.message)
            .field("phase", &self.phase)
            .field("submit", &self.submit)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

impl ContactForm<SubmitButton> {
    /// Render the form.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let keyboard_navigation = ctx.keyboard_navigation;

        let field = |index: usize, key: &str, value: &'a str, on_input: fn(String) -> Message| {
            let input = text_input(&i18n.tr(&format!("{key}-placeholder")), value)
                .id(Id::new(FIELD_IDS[index]))
                .on_input(on_input)
                .on_submit(Message::Submit)
                .padding(spacing::SM)
                .size(typography::BODY)
                .style(styles::text_input::field(keyboard_navigation));

            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(i18n.tr(&format!("{key}-label"))).size(typography::BODY_SM))
                .push(input)
        };

        Column::new()
            .spacing(spacing::MD)
            .max_width(sizing::FORM_MAX_WIDTH)
            .width(Length::Fill)
            .push(field(0, "contact-name", &self.name, Message::NameChanged))
            .push(field(1, "contact-email", &self.email, Message::EmailChanged))
            .push(field(2, "contact-subject", &self.subject, Message::SubjectChanged))
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(i18n.tr("contact-message-label")).size(typography::BODY_SM))
                    .push(
                        text_editor(&self.editor)
                            .id(Id::new(FIELD_IDS[3]))
                            .placeholder(i18n.tr("contact-message-placeholder"))
                            .on_action(Message::MessageEdited)
                            .height(sizing::TEXTAREA_HEIGHT)
                            .padding(spacing::SM)
                            .size(typography::BODY)
                            .style(styles::text_input::text_area(keyboard_navigation)),
                    ),
            )
            .push(self.submit.view(Message::Submit))
            .into()
    }
}
