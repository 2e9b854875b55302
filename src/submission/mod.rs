pub mod application;
pub mod booking;
pub mod contact;
pub mod fields;
pub mod metadata;
pub mod parser;
pub mod pipeline;

pub use application::validate_application;
pub use booking::validate_booking;
pub use contact::validate_contact;
pub use fields::FieldMap;
pub use pipeline::Acknowledgement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Booking,
    Contact,
    Application,
    Service,
}

impl SubmissionKind {
    pub fn name(self) -> &'static str {
        match self {
            SubmissionKind::Booking => "booking",
            SubmissionKind::Contact => "contact",
            SubmissionKind::Application => "application",
            SubmissionKind::Service => "service",
        }
    }

    /// Key the record is returned under.
    pub fn envelope(self) -> &'static str {
        match self {
            SubmissionKind::Booking => "booking",
            SubmissionKind::Contact => "submission",
            SubmissionKind::Application => "application",
            SubmissionKind::Service => "service",
        }
    }

    pub fn confirmation(self) -> &'static str {
        match self {
            SubmissionKind::Booking => {
                "Booking request submitted successfully. We will contact you shortly to confirm your appointment."
            }
            SubmissionKind::Contact => "Thank you for your message. We will get back to you soon.",
            SubmissionKind::Application => {
                "Thank you for your application. We will review it and contact you soon."
            }
            SubmissionKind::Service => "Service created successfully",
        }
    }
}
