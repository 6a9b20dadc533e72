use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::core::time::{age_on, format_offset, parse_date_of_birth};
use crate::schemas::enrollment::{Enrollment, EnrollmentFormData, EnrollmentPayload};

pub const MIN_FULL_NAME_LEN: usize = 2;
pub const MIN_JOIN_REASON_LEN: usize = 50;
pub const MAX_JOIN_REASON_LEN: usize = 300;
pub const MIN_AGE_YEARS: i32 = 18;

/// Submission fields in check order; the first missing one is the one
/// reported.
const REQUIRED_FIELDS: &[&str] = &[
    "courseId",
    "courseName",
    "courseCode",
    "fullName",
    "email",
    "phone",
    "dateOfBirth",
    "qualification",
    "joinReason",
    "source",
    "agreedToTerms",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }

    fn missing(field: &'static str) -> Self {
        Self::new(field, format!("Missing required field: {field}"))
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+91-\d{10}$").expect("phone pattern"))
}

/// Stage 1: identity fields.
pub fn validate_identity(data: &EnrollmentFormData, today: Date) -> Result<(), FieldError> {
    let full_name = data.full_name.as_deref().unwrap_or("");
    if full_name.is_empty() {
        return Err(FieldError::new("fullName", "Full name is required"));
    }
    if full_name.chars().count() < MIN_FULL_NAME_LEN {
        return Err(FieldError::new(
            "fullName",
            format!("Name must be at least {MIN_FULL_NAME_LEN} characters"),
        ));
    }

    let email = data.email.as_deref().unwrap_or("");
    if email.is_empty() {
        return Err(FieldError::new("email", "Email is required"));
    }
    if !email_pattern().is_match(email) {
        return Err(FieldError::new("email", "Invalid email address"));
    }

    let phone = data.phone.as_deref().unwrap_or("");
    if phone.is_empty() {
        return Err(FieldError::new("phone", "Phone number is required"));
    }
    if !phone_pattern().is_match(phone) {
        return Err(FieldError::new("phone", "Phone must be in format +91-XXXXXXXXXX"));
    }

    let date_of_birth = data.date_of_birth.as_deref().unwrap_or("");
    if date_of_birth.is_empty() {
        return Err(FieldError::new("dateOfBirth", "Date of birth is required"));
    }
    let Some(birth) = parse_date_of_birth(date_of_birth) else {
        return Err(FieldError::new("dateOfBirth", "Date of birth must be in DD-MM-YYYY format"));
    };
    if age_on(birth, today) < MIN_AGE_YEARS {
        return Err(FieldError::new(
            "dateOfBirth",
            format!("You must be at least {MIN_AGE_YEARS} years old"),
        ));
    }

    Ok(())
}

/// Stage 2: profile fields.
pub fn validate_profile(data: &EnrollmentFormData) -> Result<(), FieldError> {
    if data.qualification.as_deref().unwrap_or("").is_empty() {
        return Err(FieldError::new("qualification", "Qualification is required"));
    }

    let join_reason = data.join_reason.as_deref().unwrap_or("");
    if join_reason.is_empty() {
        return Err(FieldError::new("joinReason", "Reason for joining is required"));
    }
    let reason_len = join_reason.chars().count();
    if reason_len < MIN_JOIN_REASON_LEN {
        return Err(FieldError::new(
            "joinReason",
            format!("Reason must be at least {MIN_JOIN_REASON_LEN} characters"),
        ));
    }
    if reason_len > MAX_JOIN_REASON_LEN {
        return Err(FieldError::new(
            "joinReason",
            format!("Reason must be at most {MAX_JOIN_REASON_LEN} characters"),
        ));
    }

    if data.source.as_deref().unwrap_or_default().is_empty() {
        return Err(FieldError::new("source", "Please select at least one source"));
    }

    if data.agreed_to_terms != Some(true) {
        return Err(FieldError::new(
            "agreedToTerms",
            "You must agree to the terms and conditions",
        ));
    }

    Ok(())
}

fn first_missing_field(payload: &EnrollmentPayload) -> Option<&'static str> {
    for &field in REQUIRED_FIELDS {
        let present = match field {
            "courseId" => is_present(&payload.course_id),
            "courseName" => is_present(&payload.course_name),
            "courseCode" => is_present(&payload.course_code),
            "fullName" => is_present(&payload.full_name),
            "email" => is_present(&payload.email),
            "phone" => is_present(&payload.phone),
            "dateOfBirth" => is_present(&payload.date_of_birth),
            "qualification" => is_present(&payload.qualification),
            "joinReason" => is_present(&payload.join_reason),
            "source" => payload.source.is_some(),
            "agreedToTerms" => payload.agreed_to_terms.is_some(),
            _ => true,
        };
        if !present {
            return Some(field);
        }
    }
    None
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|value| !value.is_empty())
}

fn form_data(payload: &EnrollmentPayload) -> EnrollmentFormData {
    EnrollmentFormData {
        full_name: payload.full_name.clone(),
        email: payload.email.clone(),
        phone: payload.phone.clone(),
        date_of_birth: payload.date_of_birth.clone(),
        qualification: payload.qualification.clone(),
        join_reason: payload.join_reason.clone(),
        source: payload.source.clone(),
        agreed_to_terms: payload.agreed_to_terms,
    }
}

/// Validate a submission and mint the enrollment record. The server keeps no
/// copy; the caller owns the returned record.
pub fn submit(payload: &EnrollmentPayload, now: OffsetDateTime) -> Result<Enrollment, FieldError> {
    if let Some(field) = first_missing_field(payload) {
        return Err(FieldError::missing(field));
    }

    let data = form_data(payload);
    validate_identity(&data, now.date())?;
    validate_profile(&data)?;

    Ok(Enrollment {
        id: Uuid::new_v4().to_string(),
        course_id: payload.course_id.clone().unwrap_or_default(),
        course_name: payload.course_name.clone().unwrap_or_default(),
        course_code: payload.course_code.clone().unwrap_or_default(),
        student_name: payload.full_name.clone().unwrap_or_default(),
        email: payload.email.clone().unwrap_or_default(),
        phone: payload.phone.clone().unwrap_or_default(),
        date_of_birth: payload.date_of_birth.clone().unwrap_or_default(),
        qualification: payload.qualification.clone().unwrap_or_default(),
        join_reason: payload.join_reason.clone().unwrap_or_default(),
        source: payload.source.clone().unwrap_or_default(),
        agreed_to_terms: payload.agreed_to_terms.unwrap_or_default(),
        enrolled_date: format_offset(now),
    })
}
