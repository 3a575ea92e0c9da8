//! Contact form state.
//!
//! Field buffers, focus, and the submit lifecycle. The engine owns the
//! submission itself; this type only holds what the renderer needs.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Enter your full name",
            ContactField::Email => "Enter your email",
            ContactField::Subject => "Project inquiry",
            ContactField::Message => "Tell me about your project...",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Subject,
            ContactField::Subject => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Subject => ContactField::Email,
            ContactField::Message => ContactField::Subject,
        }
    }
}

/// Where a submission currently stands. Exactly two outcomes are ever
/// shown: a confirmation or a generic retry prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

impl SubmitStatus {
    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitStatus::Sending)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    focus: ContactField,
    status: SubmitStatus,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    #[must_use]
    pub fn focus(&self) -> ContactField {
        self.focus
    }

    #[must_use]
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn set_status(&mut self, status: SubmitStatus) {
        self.status = status;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn insert_char(&mut self, c: char) {
        self.field_mut(self.focus).push(c);
    }

    pub fn insert_newline(&mut self) {
        if self.focus == ContactField::Message {
            self.message.push('\n');
        }
    }

    pub fn backspace(&mut self) {
        self.field_mut(self.focus).pop();
    }

    /// All four fields carry non-whitespace content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|field| !self.value(*field).trim().is_empty())
    }

    /// Reset field buffers after a successful send; focus and status are
    /// left alone so the confirmation stays on screen.
    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.focus = ContactField::Name;
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}
