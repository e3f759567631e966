//! Scoped view composition.
//!
//! Given the viewer's role and identity, derives the subset of each dataset
//! the dashboard may show, and drives the loading → ready/error lifecycle
//! of a dashboard fetch. Datasets are fetched concurrently and joined; a
//! single failure fails the whole view (partial results are discarded).

pub mod sections;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use crate::auth::{Role, User};
use crate::services::models::{Appointment, LabReport, MedicalRecord, Patient};
use crate::services::{DataError, DataServices, Datasets};

/// Who is looking. Scoping is keyed on the stable subject id when one is
/// known; display-name equality is the fallback for mock sessions that
/// carry no stable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerIdentity {
    pub display_name: String,
    pub subject_id: Option<String>,
}

impl ViewerIdentity {
    pub fn from_user(user: &User) -> Self {
        ViewerIdentity {
            display_name: user.name.clone(),
            subject_id: None,
        }
    }

    pub fn with_subject(display_name: &str, subject_id: &str) -> Self {
        ViewerIdentity {
            display_name: display_name.to_string(),
            subject_id: Some(subject_id.to_string()),
        }
    }

    fn matches(&self, id: &str, name: &str) -> bool {
        match &self.subject_id {
            Some(subject_id) => subject_id == id,
            None => self.display_name == name,
        }
    }
}

/// The subset of each dataset visible to the current viewer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedView {
    pub appointments: Vec<Appointment>,
    pub records: Vec<MedicalRecord>,
    pub lab_reports: Vec<LabReport>,
}

/// Derive the role-scoped view over the full datasets.
///
/// Patients see only their own data. Doctors see their own appointments but
/// the full record/report sets — full caseload visibility is intentional.
/// Receptionists and lab technicians see everything.
pub fn derive_scoped_view(role: Role, identity: &ViewerIdentity, datasets: Datasets) -> ScopedView {
    let Datasets {
        appointments,
        records,
        lab_reports,
        ..
    } = datasets;

    match role {
        Role::Patient => ScopedView {
            appointments: appointments
                .into_iter()
                .filter(|a| identity.matches(&a.patient_id, &a.patient_name))
                .collect(),
            records: records
                .into_iter()
                .filter(|r| identity.matches(&r.patient_id, &r.patient_name))
                .collect(),
            lab_reports: lab_reports
                .into_iter()
                .filter(|r| identity.matches(&r.patient_id, &r.patient_name))
                .collect(),
        },
        Role::Doctor => ScopedView {
            appointments: appointments
                .into_iter()
                .filter(|a| identity.matches(&a.doctor_id, &a.doctor_name))
                .collect(),
            records,
            lab_reports,
        },
        Role::Receptionist | Role::LabTechnician => ScopedView {
            appointments,
            records,
            lab_reports,
        },
    }
}

/// Everything a dashboard needs once the fetches resolve. The patient
/// directory is only attached for staff roles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(flatten)]
    pub view: ScopedView,
    pub patients: Vec<Patient>,
}

/// Lifecycle of one dashboard fetch attempt. `Error` is terminal for the
/// attempt; a fresh loader re-enters `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(DataError),
    Ready(DashboardData),
}

/// Fans out the four dataset fetches, joins them, and composes the scoped
/// view. One loader corresponds to one navigation; it starts in `Loading`
/// and settles exactly once — unless it was abandoned first, in which case
/// late results are discarded rather than committed.
pub struct DashboardLoader {
    services: DataServices,
    fetch_timeout: Duration,
    alive: AtomicBool,
    state: RwLock<ViewState>,
}

impl DashboardLoader {
    pub fn new(services: DataServices, fetch_timeout: Duration) -> Self {
        DashboardLoader {
            services,
            fetch_timeout,
            alive: AtomicBool::new(true),
            state: RwLock::new(ViewState::Loading),
        }
    }

    /// Mark this view as gone; any in-flight fetch result will be dropped.
    pub fn abandon(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn state(&self) -> ViewState {
        self.state.read().unwrap().clone()
    }

    /// Fetch all datasets concurrently and settle the view state.
    pub async fn load(&self, role: Role, identity: &ViewerIdentity) -> ViewState {
        let (appointments, records, lab_reports, patients) = tokio::join!(
            self.fetch(self.services.appointments.list()),
            self.fetch(self.services.records.list()),
            self.fetch(self.services.lab_reports.list()),
            self.fetch(self.services.patients.list()),
        );

        let outcome = match (appointments, records, lab_reports, patients) {
            (Ok(appointments), Ok(records), Ok(lab_reports), Ok(patients)) => {
                let datasets = Datasets {
                    appointments,
                    records,
                    lab_reports,
                    patients,
                };
                let patients = match role {
                    Role::Patient => Vec::new(),
                    _ => datasets.patients.clone(),
                };
                ViewState::Ready(DashboardData {
                    view: derive_scoped_view(role, identity, datasets),
                    patients,
                })
            }
            (a, r, l, p) => {
                let error = [
                    a.err(),
                    r.err(),
                    l.err(),
                    p.err(),
                ]
                .into_iter()
                .flatten()
                .next()
                .unwrap_or(DataError::Transient("unknown fetch failure".to_string()));
                warn!(%error, "dashboard fetch failed");
                ViewState::Error(error)
            }
        };

        if !self.alive.load(Ordering::Acquire) {
            // The view was abandoned while the fetch was in flight; keep
            // whatever state it last showed instead of updating a disposed
            // view.
            return self.state();
        }

        *self.state.write().unwrap() = outcome.clone();
        outcome
    }

    async fn fetch<T>(
        &self,
        future: impl Future<Output = Result<Vec<T>, DataError>>,
    ) -> Result<Vec<T>, DataError> {
        match tokio::time::timeout(self.fetch_timeout, future).await {
            Ok(result) => result,
            Err(_) => Err(DataError::Timeout),
        }
    }
}
