use serde::{Deserialize, Serialize};

/// Raw submission body. Everything is optional so a missing field can be
/// reported by name instead of failing deserialization wholesale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrollmentPayload {
    pub course_id: Option<String>,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub qualification: Option<String>,
    pub join_reason: Option<String>,
    pub source: Option<Vec<String>>,
    pub agreed_to_terms: Option<bool>,
}

/// The student-entered half of the enrollment form; also the shape drafts are
/// persisted in. Absent fields are simply not yet filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrollmentFormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreed_to_terms: Option<bool>,
}

impl EnrollmentFormData {
    /// Merge edits into the form data; `None` fields in the patch leave the
    /// existing values alone.
    pub fn merge(&mut self, patch: EnrollmentFormData) {
        if patch.full_name.is_some() {
            self.full_name = patch.full_name;
        }
        if patch.email.is_some() {
            self.email = patch.email;
        }
        if patch.phone.is_some() {
            self.phone = patch.phone;
        }
        if patch.date_of_birth.is_some() {
            self.date_of_birth = patch.date_of_birth;
        }
        if patch.qualification.is_some() {
            self.qualification = patch.qualification;
        }
        if patch.join_reason.is_some() {
            self.join_reason = patch.join_reason;
        }
        if patch.source.is_some() {
            self.source = patch.source;
        }
        if patch.agreed_to_terms.is_some() {
            self.agreed_to_terms = patch.agreed_to_terms;
        }
    }
}

/// A confirmed enrollment: the submitted payload snapshot plus the
/// server-stamped id and timestamp. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    pub course_code: String,
    pub student_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub qualification: String,
    pub join_reason: String,
    pub source: Vec<String>,
    pub agreed_to_terms: bool,
    pub enrolled_date: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct EnrollmentCreatedResponse {
    pub(crate) success: bool,
    pub(crate) enrollment: Enrollment,
}

#[derive(Debug, Serialize)]
pub(crate) struct EnrollmentListResponse {
    pub(crate) enrollments: Vec<Enrollment>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CancelResponse {
    pub(crate) success: bool,
    pub(crate) message: String,
}
