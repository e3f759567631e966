//! In-memory repository implementations.
//!
//! Each repository wraps a fixture-seeded collection behind an `RwLock` and
//! sleeps before touching it to simulate network latency. State is
//! process-local and unsynchronized across callers beyond the lock itself:
//! concurrent writers are last-write-wins, which is acceptable for a
//! single-process portal.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use super::fixtures;
use super::models::{
    Appointment, AppointmentPatch, AppointmentStatus, Doctor, LabReport, MedicalRecord,
    NewAppointment, NewLabReport, NewMedicalRecord, NewPatient, Patient, ReportStatus, TimeSlot,
};
use super::{
    synth_id, AppointmentRepository, DataError, LabReportRepository, MedicalRecordRepository,
    PatientRepository,
};

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

// ---- Appointments ----------------------------------------------------------

pub struct InMemoryAppointments {
    appointments: RwLock<Vec<Appointment>>,
    slots: RwLock<Vec<TimeSlot>>,
    doctors: Vec<Doctor>,
    latency: Duration,
}

impl InMemoryAppointments {
    pub fn new(latency: Duration) -> Self {
        InMemoryAppointments {
            appointments: RwLock::new(fixtures::seed_appointments()),
            slots: RwLock::new(fixtures::seed_time_slots()),
            doctors: fixtures::seed_doctors(),
            latency,
        }
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointments {
    async fn list(&self) -> Result<Vec<Appointment>, DataError> {
        simulate_latency(self.latency).await;
        Ok(self.appointments.read().unwrap().clone())
    }

    async fn get(&self, id: &str) -> Result<Appointment, DataError> {
        simulate_latency(self.latency).await;
        self.appointments
            .read()
            .unwrap()
            .iter()
            .find(|appointment| appointment.id == id)
            .cloned()
            .ok_or_else(|| DataError::NotFound(format!("appointment {}", id)))
    }

    async fn available_slots(
        &self,
        doctor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, DataError> {
        simulate_latency(self.latency).await;
        Ok(self
            .slots
            .read()
            .unwrap()
            .iter()
            .filter(|slot| slot.doctor_id == doctor_id && slot.date == date && slot.is_available)
            .cloned()
            .collect())
    }

    async fn list_doctors(&self) -> Result<Vec<Doctor>, DataError> {
        simulate_latency(self.latency).await;
        let slots = self.slots.read().unwrap();
        Ok(self
            .doctors
            .iter()
            .map(|doctor| {
                let mut doctor = doctor.clone();
                doctor.available_slots = slots
                    .iter()
                    .filter(|slot| slot.doctor_id == doctor.id && slot.is_available)
                    .cloned()
                    .collect();
                doctor
            })
            .collect())
    }

    async fn create(&self, request: NewAppointment) -> Result<Appointment, DataError> {
        simulate_latency(self.latency).await;

        let appointment = Appointment {
            id: synth_id("apt"),
            patient_id: request.patient_id,
            patient_name: request.patient_name,
            doctor_id: request.doctor_id,
            doctor_name: request.doctor_name,
            department: request.department,
            date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
            status: AppointmentStatus::Scheduled,
            kind: request.kind,
            notes: request.notes,
        };

        // Close the matching slot, if the doctor had one open for this time.
        let mut slots = self.slots.write().unwrap();
        if let Some(slot) = slots.iter_mut().find(|slot| {
            slot.doctor_id == appointment.doctor_id
                && slot.date == appointment.date
                && slot.start_time == appointment.start_time
        }) {
            slot.is_available = false;
        }
        drop(slots);

        debug!(id = %appointment.id, "appointment created");
        self.appointments.write().unwrap().push(appointment.clone());
        Ok(appointment)
    }

    async fn update(&self, id: &str, patch: AppointmentPatch) -> Result<Appointment, DataError> {
        simulate_latency(self.latency).await;

        let mut appointments = self.appointments.write().unwrap();
        let appointment = appointments
            .iter_mut()
            .find(|appointment| appointment.id == id)
            .ok_or_else(|| DataError::NotFound(format!("appointment {}", id)))?;

        if let Some(date) = patch.date {
            appointment.date = date;
        }
        if let Some(start_time) = patch.start_time {
            appointment.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            appointment.end_time = end_time;
        }
        if let Some(status) = patch.status {
            appointment.status = status;
        }
        if let Some(notes) = patch.notes {
            appointment.notes = Some(notes);
        }

        Ok(appointment.clone())
    }

    async fn cancel(&self, id: &str) -> Result<bool, DataError> {
        simulate_latency(self.latency).await;

        let mut appointments = self.appointments.write().unwrap();
        let appointment = match appointments.iter_mut().find(|appointment| appointment.id == id) {
            Some(appointment) => appointment,
            None => return Ok(false),
        };

        appointment.status = AppointmentStatus::Cancelled;
        let doctor_id = appointment.doctor_id.clone();
        let date = appointment.date;
        let start_time = appointment.start_time.clone();
        drop(appointments);

        // Reopen the slot this appointment had claimed.
        let mut slots = self.slots.write().unwrap();
        if let Some(slot) = slots.iter_mut().find(|slot| {
            slot.doctor_id == doctor_id && slot.date == date && slot.start_time == start_time
        }) {
            slot.is_available = true;
        }

        debug!(id, "appointment cancelled");
        Ok(true)
    }
}

// ---- Medical records -------------------------------------------------------

pub struct InMemoryMedicalRecords {
    records: RwLock<Vec<MedicalRecord>>,
    latency: Duration,
}

impl InMemoryMedicalRecords {
    pub fn new(latency: Duration) -> Self {
        InMemoryMedicalRecords {
            records: RwLock::new(fixtures::seed_medical_records()),
            latency,
        }
    }
}

#[async_trait]
impl MedicalRecordRepository for InMemoryMedicalRecords {
    async fn list(&self) -> Result<Vec<MedicalRecord>, DataError> {
        simulate_latency(self.latency).await;
        Ok(self.records.read().unwrap().clone())
    }

    async fn for_patient(&self, patient_id: &str) -> Result<Vec<MedicalRecord>, DataError> {
        simulate_latency(self.latency).await;
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .filter(|record| record.patient_id == patient_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: &str) -> Result<MedicalRecord, DataError> {
        simulate_latency(self.latency).await;
        self.records
            .read()
            .unwrap()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| DataError::NotFound(format!("medical record {}", id)))
    }

    async fn create(&self, request: NewMedicalRecord) -> Result<MedicalRecord, DataError> {
        simulate_latency(self.latency).await;

        let record = MedicalRecord {
            id: synth_id("rec"),
            patient_id: request.patient_id,
            patient_name: request.patient_name,
            doctor_id: request.doctor_id,
            doctor_name: request.doctor_name,
            date: request.date,
            kind: request.kind,
            title: request.title,
            description: request.description,
            vital_signs: request.vital_signs,
            diagnosis: request.diagnosis,
            treatment_plan: request.treatment_plan,
            notes: request.notes,
            attachments: request.attachments,
        };

        self.records.write().unwrap().push(record.clone());
        Ok(record)
    }
}

// ---- Lab reports -----------------------------------------------------------

pub struct InMemoryLabReports {
    reports: RwLock<Vec<LabReport>>,
    latency: Duration,
}

impl InMemoryLabReports {
    pub fn new(latency: Duration) -> Self {
        InMemoryLabReports {
            reports: RwLock::new(fixtures::seed_lab_reports()),
            latency,
        }
    }
}

#[async_trait]
impl LabReportRepository for InMemoryLabReports {
    async fn list(&self) -> Result<Vec<LabReport>, DataError> {
        simulate_latency(self.latency).await;
        Ok(self.reports.read().unwrap().clone())
    }

    async fn for_patient(&self, patient_id: &str) -> Result<Vec<LabReport>, DataError> {
        simulate_latency(self.latency).await;
        Ok(self
            .reports
            .read()
            .unwrap()
            .iter()
            .filter(|report| report.patient_id == patient_id)
            .cloned()
            .collect())
    }

    async fn by_status(&self, status: ReportStatus) -> Result<Vec<LabReport>, DataError> {
        simulate_latency(self.latency).await;
        Ok(self
            .reports
            .read()
            .unwrap()
            .iter()
            .filter(|report| report.status == status)
            .cloned()
            .collect())
    }

    async fn get(&self, id: &str) -> Result<LabReport, DataError> {
        simulate_latency(self.latency).await;
        self.reports
            .read()
            .unwrap()
            .iter()
            .find(|report| report.id == id)
            .cloned()
            .ok_or_else(|| DataError::NotFound(format!("lab report {}", id)))
    }

    async fn create(&self, request: NewLabReport) -> Result<LabReport, DataError> {
        simulate_latency(self.latency).await;

        let report = LabReport {
            id: synth_id("lab"),
            patient_id: request.patient_id,
            patient_name: request.patient_name,
            doctor_id: request.doctor_id,
            doctor_name: request.doctor_name,
            test_type: request.test_type,
            test_date: request.test_date,
            status: request.status,
            results: request.results,
            notes: request.notes,
            lab_technician: request.lab_technician,
            reviewed_by: request.reviewed_by,
            reviewed_date: request.reviewed_date,
        };

        self.reports.write().unwrap().push(report.clone());
        Ok(report)
    }
}

// ---- Patients --------------------------------------------------------------

pub struct InMemoryPatients {
    patients: RwLock<Vec<Patient>>,
    latency: Duration,
}

impl InMemoryPatients {
    pub fn new(latency: Duration) -> Self {
        InMemoryPatients {
            patients: RwLock::new(fixtures::seed_patients()),
            latency,
        }
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatients {
    async fn list(&self) -> Result<Vec<Patient>, DataError> {
        simulate_latency(self.latency).await;
        Ok(self.patients.read().unwrap().clone())
    }

    async fn get(&self, id: &str) -> Result<Patient, DataError> {
        simulate_latency(self.latency).await;
        self.patients
            .read()
            .unwrap()
            .iter()
            .find(|patient| patient.id == id)
            .cloned()
            .ok_or_else(|| DataError::NotFound(format!("patient {}", id)))
    }

    async fn register(&self, request: NewPatient) -> Result<Patient, DataError> {
        simulate_latency(self.latency).await;

        let patient = Patient {
            id: synth_id("pat"),
            name: request.name,
            email: request.email,
            phone: request.phone,
            date_of_birth: request.date_of_birth,
            gender: request.gender,
            blood_type: request.blood_type,
            medical_history: request.medical_history,
        };

        self.patients.write().unwrap().push(patient.clone());
        debug!(id = %patient.id, "patient registered");
        Ok(patient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::models::{AppointmentType, Gender};
    use pretty_assertions::assert_eq;

    const NO_LATENCY: Duration = Duration::ZERO;

    fn booking_for_open_slot() -> NewAppointment {
        // Matches slot-002 (doc-001, 2024-10-15, 09:30), which starts open.
        NewAppointment {
            patient_id: "pat-001".to_string(),
            patient_name: "John Doe".to_string(),
            doctor_id: "doc-001".to_string(),
            doctor_name: "Dr. Sarah Smith".to_string(),
            department: "Cardiology".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
            start_time: "09:30".to_string(),
            end_time: "10:00".to_string(),
            kind: AppointmentType::InPerson,
            notes: None,
        }
    }

    async fn slot_available(repo: &InMemoryAppointments, slot_id: &str) -> bool {
        repo.slots
            .read()
            .unwrap()
            .iter()
            .find(|slot| slot.id == slot_id)
            .map(|slot| slot.is_available)
            .unwrap()
    }

    #[tokio::test]
    async fn create_defaults_to_scheduled_and_closes_the_slot() {
        let repo = InMemoryAppointments::new(NO_LATENCY);

        let created = repo.create(booking_for_open_slot()).await.unwrap();
        assert_eq!(created.status, AppointmentStatus::Scheduled);

        let listed = repo.list().await.unwrap();
        assert!(listed.iter().any(|a| a.id == created.id));
        assert!(!slot_available(&repo, "slot-002").await);
    }

    #[tokio::test]
    async fn cancel_reopens_the_slot_it_had_closed() {
        let repo = InMemoryAppointments::new(NO_LATENCY);
        let created = repo.create(booking_for_open_slot()).await.unwrap();
        assert!(!slot_available(&repo, "slot-002").await);

        let cancelled = repo.cancel(&created.id).await.unwrap();
        assert!(cancelled);
        assert_eq!(
            repo.get(&created.id).await.unwrap().status,
            AppointmentStatus::Cancelled
        );
        assert!(slot_available(&repo, "slot-002").await);
    }

    #[tokio::test]
    async fn cancel_unknown_id_returns_false() {
        let repo = InMemoryAppointments::new(NO_LATENCY);
        assert_eq!(repo.cancel("apt-nope").await.unwrap(), false);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let repo = InMemoryAppointments::new(NO_LATENCY);
        let err = repo.get("apt-nope").await.unwrap_err();
        assert_eq!(err, DataError::NotFound("appointment apt-nope".to_string()));
    }

    #[tokio::test]
    async fn available_slots_excludes_closed_ones() {
        let repo = InMemoryAppointments::new(NO_LATENCY);
        let date = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();

        let slots = repo.available_slots("doc-001", date).await.unwrap();
        let ids: Vec<_> = slots.iter().map(|slot| slot.id.as_str()).collect();
        // slot-003 is seeded unavailable.
        assert_eq!(ids, vec!["slot-001", "slot-002"]);
    }

    #[tokio::test]
    async fn doctors_carry_their_open_slots() {
        let repo = InMemoryAppointments::new(NO_LATENCY);
        let doctors = repo.list_doctors().await.unwrap();
        let sarah = doctors.iter().find(|d| d.id == "doc-001").unwrap();
        assert_eq!(sarah.available_slots.len(), 2);
    }

    #[tokio::test]
    async fn partial_update_overwrites_only_present_fields() {
        let repo = InMemoryAppointments::new(NO_LATENCY);
        let patch = AppointmentPatch {
            status: Some(AppointmentStatus::Confirmed),
            ..Default::default()
        };

        let updated = repo.update("apt-002", patch).await.unwrap();
        assert_eq!(updated.status, AppointmentStatus::Confirmed);
        assert_eq!(updated.start_time, "10:00");
    }

    #[tokio::test]
    async fn records_filter_by_patient() {
        let repo = InMemoryMedicalRecords::new(NO_LATENCY);
        assert_eq!(repo.for_patient("pat-001").await.unwrap().len(), 2);
        assert_eq!(repo.for_patient("pat-002").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn lab_reports_filter_by_status() {
        let repo = InMemoryLabReports::new(NO_LATENCY);
        assert_eq!(
            repo.by_status(ReportStatus::Completed).await.unwrap().len(),
            2
        );
        assert_eq!(repo.by_status(ReportStatus::Pending).await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn registration_appends_with_a_synthetic_id() {
        let repo = InMemoryPatients::new(NO_LATENCY);
        let registered = repo
            .register(NewPatient {
                name: "Michael Brown".to_string(),
                email: "michael.brown@example.com".to_string(),
                phone: "+1 (555) 222-3333".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1978, 2, 20).unwrap(),
                gender: Gender::Male,
                blood_type: "B+".to_string(),
                medical_history: vec![],
            })
            .await
            .unwrap();

        assert!(registered.id.starts_with("pat-"));
        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().any(|p| p.id == registered.id));
    }
}
