//! Data access facade.
//!
//! Four independent async resources own all domain data. Each is an
//! injectable repository trait so a real backend can replace the in-memory
//! implementation without touching the composer or the route handlers.

pub mod fixtures;
pub mod memory;
pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::config::DataConfig;
use models::{
    Appointment, AppointmentPatch, Doctor, LabReport, MedicalRecord, NewAppointment,
    NewLabReport, NewMedicalRecord, NewPatient, Patient, ReportStatus, TimeSlot,
};

/// Recoverable failures at the facade boundary. None of the fixture-backed
/// paths produce `Transient`; it exists for real backends (and for test
/// doubles standing in for them).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum DataError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("transient backend failure: {0}")]
    Transient(String),
    #[error("fetch timed out")]
    Timeout,
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Appointment>, DataError>;
    async fn get(&self, id: &str) -> Result<Appointment, DataError>;
    async fn available_slots(&self, doctor_id: &str, date: NaiveDate)
        -> Result<Vec<TimeSlot>, DataError>;
    async fn list_doctors(&self) -> Result<Vec<Doctor>, DataError>;
    async fn create(&self, request: NewAppointment) -> Result<Appointment, DataError>;
    async fn update(&self, id: &str, patch: AppointmentPatch) -> Result<Appointment, DataError>;
    /// Returns false when no such appointment exists.
    async fn cancel(&self, id: &str) -> Result<bool, DataError>;
}

#[async_trait]
pub trait MedicalRecordRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<MedicalRecord>, DataError>;
    async fn for_patient(&self, patient_id: &str) -> Result<Vec<MedicalRecord>, DataError>;
    async fn get(&self, id: &str) -> Result<MedicalRecord, DataError>;
    async fn create(&self, request: NewMedicalRecord) -> Result<MedicalRecord, DataError>;
}

#[async_trait]
pub trait LabReportRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<LabReport>, DataError>;
    async fn for_patient(&self, patient_id: &str) -> Result<Vec<LabReport>, DataError>;
    async fn by_status(&self, status: ReportStatus) -> Result<Vec<LabReport>, DataError>;
    async fn get(&self, id: &str) -> Result<LabReport, DataError>;
    async fn create(&self, request: NewLabReport) -> Result<LabReport, DataError>;
}

#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Patient>, DataError>;
    async fn get(&self, id: &str) -> Result<Patient, DataError>;
    async fn register(&self, request: NewPatient) -> Result<Patient, DataError>;
}

/// The four repositories bundled for injection.
#[derive(Clone)]
pub struct DataServices {
    pub appointments: Arc<dyn AppointmentRepository>,
    pub records: Arc<dyn MedicalRecordRepository>,
    pub lab_reports: Arc<dyn LabReportRepository>,
    pub patients: Arc<dyn PatientRepository>,
}

impl DataServices {
    /// Fixture-seeded in-memory services with the configured simulated
    /// latency.
    pub fn in_memory(config: &DataConfig) -> Self {
        let latency = config.latency();
        DataServices {
            appointments: Arc::new(memory::InMemoryAppointments::new(latency)),
            records: Arc::new(memory::InMemoryMedicalRecords::new(latency)),
            lab_reports: Arc::new(memory::InMemoryLabReports::new(latency)),
            patients: Arc::new(memory::InMemoryPatients::new(latency)),
        }
    }
}

/// The full datasets a dashboard view is composed from.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub appointments: Vec<Appointment>,
    pub records: Vec<MedicalRecord>,
    pub lab_reports: Vec<LabReport>,
    pub patients: Vec<Patient>,
}

/// Synthetic id in the fixtures' `prefix-xxxxxxxx` shape.
pub(crate) fn synth_id(prefix: &str) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &uuid[..8])
}
