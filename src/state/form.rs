//! Form field state and validation flow.
//!
//! Validation runs when focus leaves a field and on submit, which
//! re-runs every applicable rule. Any edit clears the
//! field's error so the user can retype optimistically. Submission is
//! simulated: a fixed delay, then a success notice that dismisses itself
//! and resets the form.

use crate::model::validate;
use crate::state::timers::SlotTimer;
use std::time::{Duration, Instant};

/// Simulated submission delay.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// How long the success notice stays up.
pub const SUCCESS_NOTICE_TIMEOUT: Duration = Duration::from_secs(8);

// ===== Field identity =====

/// Which form this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Membership application.
    Membership,
    /// Contact message.
    Contact,
}

/// Field identity; rules are keyed off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    /// Applicant's full name (membership).
    FullName,
    /// Email address (both forms).
    Email,
    /// Student ID, 8 to 10 digits (membership).
    StudentId,
    /// Declared major (membership).
    Major,
    /// Expected graduation year (membership).
    GraduationYear,
    /// Programming experience level (membership).
    Experience,
    /// Optional phone number (membership).
    Phone,
    /// Optional personal website (membership).
    Website,
    /// Sender's name (contact).
    Name,
    /// Message subject (contact).
    Subject,
    /// Message body, at least ten characters (contact).
    Message,
}

impl FieldId {
    /// Display label for the field.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full name",
            FieldId::Email => "Email",
            FieldId::StudentId => "Student ID",
            FieldId::Major => "Major",
            FieldId::GraduationYear => "Graduation year",
            FieldId::Experience => "Programming experience",
            FieldId::Phone => "Phone",
            FieldId::Website => "Website",
            FieldId::Name => "Name",
            FieldId::Subject => "Subject",
            FieldId::Message => "Message",
        }
    }
}

// ===== Field =====

/// One input field: value, requiredness, and the current inline error.
#[derive(Debug, Clone)]
pub struct Field {
    /// Which field this is.
    pub id: FieldId,
    /// Whether a blank value is an error.
    pub required: bool,
    /// Current input text.
    pub value: String,
    /// Inline validation error, if any.
    pub error: Option<String>,
}

impl Field {
    fn new(id: FieldId, required: bool) -> Self {
        Self {
            id,
            required,
            value: String::new(),
            error: None,
        }
    }

    /// Run this field's rules against its current value.
    /// Returns the error message, or `None` when valid.
    pub fn validate(&self) -> Option<String> {
        let value = self.value.trim();
        if value.is_empty() {
            return if self.required {
                Some("This field is required".to_string())
            } else {
                None
            };
        }
        match self.id {
            FieldId::Email => {
                (!validate::validate_email(value)).then(|| "Please enter a valid email address".to_string())
            }
            FieldId::Phone => {
                (!validate::validate_phone(value)).then(|| "Please enter a valid phone number".to_string())
            }
            FieldId::Website => {
                (!validate::validate_url(value)).then(|| "Please enter a valid URL".to_string())
            }
            FieldId::StudentId => {
                (!validate::validate_student_id(value)).then(|| "Student ID must be 8-10 digits".to_string())
            }
            FieldId::GraduationYear => {
                let valid = value
                    .parse::<i32>()
                    .is_ok_and(validate::validate_graduation_year);
                (!valid).then(|| "Please select a valid graduation year".to_string())
            }
            FieldId::Message => (!validate::validate_message(value))
                .then(|| "Message must be at least 10 characters long".to_string()),
            _ => None,
        }
    }
}

// ===== FormState =====

/// State of one form: its fields, focus, and submission lifecycle.
#[derive(Debug, Clone)]
pub struct FormState {
    kind: FormKind,
    fields: Vec<Field>,
    focused: usize,
    submitting: bool,
    submit_timer: SlotTimer,
    success: Option<String>,
    dismiss_timer: SlotTimer,
}

impl FormState {
    /// The membership application form.
    pub fn membership() -> Self {
        Self::with_fields(
            FormKind::Membership,
            vec![
                Field::new(FieldId::FullName, true),
                Field::new(FieldId::Email, true),
                Field::new(FieldId::StudentId, true),
                Field::new(FieldId::Major, true),
                Field::new(FieldId::GraduationYear, true),
                Field::new(FieldId::Experience, true),
                Field::new(FieldId::Phone, false),
                Field::new(FieldId::Website, false),
            ],
        )
    }

    /// The contact form.
    pub fn contact() -> Self {
        Self::with_fields(
            FormKind::Contact,
            vec![
                Field::new(FieldId::Name, true),
                Field::new(FieldId::Email, true),
                Field::new(FieldId::Subject, true),
                Field::new(FieldId::Message, true),
            ],
        )
    }

    fn with_fields(kind: FormKind, fields: Vec<Field>) -> Self {
        Self {
            kind,
            fields,
            focused: 0,
            submitting: false,
            submit_timer: SlotTimer::default(),
            success: None,
            dismiss_timer: SlotTimer::default(),
        }
    }

    /// Which form this is.
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// The fields in focus order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Index of the focused field.
    pub fn focused_index(&self) -> usize {
        self.focused
    }

    /// Whether a simulated submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The success notice, while it is showing.
    pub fn success_notice(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Type into the focused field. Clears that field's error.
    pub fn input_char(&mut self, ch: char) {
        if self.submitting {
            return;
        }
        let field = &mut self.fields[self.focused];
        field.value.push(ch);
        field.error = None;
    }

    /// Delete from the focused field. Clears that field's error.
    pub fn backspace(&mut self) {
        if self.submitting {
            return;
        }
        let field = &mut self.fields[self.focused];
        field.value.pop();
        field.error = None;
    }

    /// Move focus to the next field, blur-validating the one being left.
    pub fn focus_next(&mut self) {
        self.blur_current();
        self.focused = (self.focused + 1) % self.fields.len();
    }

    /// Move focus to the previous field, blur-validating the one being left.
    pub fn focus_prev(&mut self) {
        self.blur_current();
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    fn blur_current(&mut self) {
        let field = &mut self.fields[self.focused];
        field.error = field.validate();
    }

    /// Re-run every field rule. Returns overall validity and records
    /// inline errors.
    pub fn validate_all(&mut self) -> bool {
        let mut valid = true;
        for field in &mut self.fields {
            field.error = field.validate();
            valid &= field.error.is_none();
        }
        valid
    }

    /// Submit: re-validate everything, then start the simulated
    /// submission. Returns true when the submission was started.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.submitting {
            return false;
        }
        if !self.validate_all() {
            return false;
        }
        self.submitting = true;
        self.submit_timer.schedule(now, SUBMIT_DELAY);
        true
    }

    /// Drive the submission and dismissal timers.
    /// Returns true when visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.submit_timer.fire_if_due(now) {
            self.submitting = false;
            self.success = Some(self.success_message().to_string());
            self.dismiss_timer.schedule(now, SUCCESS_NOTICE_TIMEOUT);
            self.reset_fields();
            changed = true;
        }
        if self.dismiss_timer.fire_if_due(now) {
            self.success = None;
            changed = true;
        }
        changed
    }

    fn success_message(&self) -> &'static str {
        match self.kind {
            FormKind::Membership => {
                "Thank you! Your membership application has been submitted successfully."
            }
            FormKind::Contact => {
                "Thank you! Your message has been sent successfully. We'll get back to you soon."
            }
        }
    }

    fn reset_fields(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
        self.focused = 0;
    }
}
