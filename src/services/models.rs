//! Domain entities and request payloads.
//!
//! All entities are owned by the in-memory data facade and have no identity
//! beyond process lifetime. Enum variants serialize to the wire spellings
//! the dashboards expect (`no-show`, `in-person`, `in-progress`, ...).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

// ---- Appointments ----------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub department: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    pub notes: Option<String>,
}

/// Status transitions are one-directional in practice
/// (scheduled → confirmed → completed, or → cancelled), though partial
/// updates may overwrite any field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    InPerson,
    Teleconsultation,
}

/// A bookable doctor-time unit. Booking flips it unavailable; cancelling
/// the appointment reopens it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub doctor_id: String,
    pub department: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

/// Used only by the booking flow; `available_slots` is computed from the
/// slot collection at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub department: String,
    pub rating: f32,
    pub available_slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub department: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    pub notes: Option<String>,
}

impl NewAppointment {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.patient_name.trim().is_empty() {
            errors.push(FieldError::new("patientName", "Patient name is required"));
        }
        if self.doctor_id.trim().is_empty() {
            errors.push(FieldError::new("doctorId", "Doctor is required"));
        }
        if self.department.trim().is_empty() {
            errors.push(FieldError::new("department", "Department is required"));
        }
        // Times are zero-padded HH:MM strings, so lexical order is
        // chronological order.
        if self.start_time >= self.end_time {
            errors.push(FieldError::new("startTime", "Start time must be before end time"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Partial update; any present field overwrites the stored one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPatch {
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}

// ---- Medical records -------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: RecordType,
    pub title: String,
    pub description: String,
    pub vital_signs: VitalSigns,
    pub diagnosis: Vec<Diagnosis>,
    pub treatment_plan: TreatmentPlan,
    pub notes: String,
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordType {
    Consultation,
    FollowUp,
    Emergency,
    Surgery,
    LabResult,
    Discharge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSigns {
    pub blood_pressure: String,
    pub heart_rate: String,
    pub temperature: String,
    pub respiratory_rate: String,
    pub oxygen_saturation: String,
    pub height: String,
    pub weight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub code: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentPlan {
    pub medications: Vec<Medication>,
    pub procedures: Vec<String>,
    pub follow_up: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedicalRecord {
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: RecordType,
    pub title: String,
    pub description: String,
    pub vital_signs: VitalSigns,
    pub diagnosis: Vec<Diagnosis>,
    pub treatment_plan: TreatmentPlan,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

// ---- Lab reports -----------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabReport {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub test_type: String,
    pub test_date: NaiveDate,
    pub status: ReportStatus,
    pub results: Vec<LabResult>,
    pub notes: String,
    pub lab_technician: String,
    pub reviewed_by: String,
    pub reviewed_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabResult {
    pub test_name: String,
    pub value: String,
    pub unit: String,
    pub reference_range: String,
    pub status: ResultFlag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultFlag {
    Normal,
    High,
    Low,
    Critical,
    Borderline,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLabReport {
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub test_type: String,
    pub test_date: NaiveDate,
    pub status: ReportStatus,
    #[serde(default)]
    pub results: Vec<LabResult>,
    #[serde(default)]
    pub notes: String,
    pub lab_technician: String,
    pub reviewed_by: String,
    pub reviewed_date: NaiveDate,
}

// ---- Patients --------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub blood_type: String,
    pub medical_history: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub blood_type: String,
    #[serde(default)]
    pub medical_history: Vec<String>,
}

impl NewPatient {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }
        if !self.email.contains('@') {
            errors.push(FieldError::new("email", "A valid email address is required"));
        }
        if self.phone.trim().is_empty() {
            errors.push(FieldError::new("phone", "Phone number is required"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn booking() -> NewAppointment {
        NewAppointment {
            patient_id: "pat-001".to_string(),
            patient_name: "John Doe".to_string(),
            doctor_id: "doc-001".to_string(),
            doctor_name: "Dr. Sarah Smith".to_string(),
            department: "Cardiology".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
            start_time: "09:00".to_string(),
            end_time: "09:30".to_string(),
            kind: AppointmentType::InPerson,
            notes: None,
        }
    }

    #[test]
    fn status_serializes_to_kebab_case() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::NoShow).unwrap(),
            "\"no-show\""
        );
        assert_eq!(
            serde_json::to_string(&ReportStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&AppointmentType::InPerson).unwrap(),
            "\"in-person\""
        );
    }

    #[test]
    fn valid_booking_passes() {
        assert!(booking().validate().is_ok());
    }

    #[test]
    fn inverted_times_are_rejected_per_field() {
        let mut request = booking();
        request.start_time = "10:00".to_string();
        request.end_time = "09:30".to_string();
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "startTime");
    }

    #[test]
    fn registration_collects_every_failing_field() {
        let request = NewPatient {
            name: " ".to_string(),
            email: "not-an-email".to_string(),
            phone: "".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1989, 5, 15).unwrap(),
            gender: Gender::Other,
            blood_type: "O+".to_string(),
            medical_history: vec![],
        };
        let errors = request.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "phone"]);
    }
}
