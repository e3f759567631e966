//! Fixture data seeding the in-memory collections.
//!
//! Everything here is hardcoded and fictional; the collections stand in for
//! a real datastore and reset on every process start.

use chrono::NaiveDate;

use super::models::{
    Appointment, AppointmentStatus, AppointmentType, Diagnosis, Doctor, Gender, LabReport,
    LabResult, MedicalRecord, Medication, Patient, RecordType, ReportStatus, ResultFlag, TimeSlot,
    TreatmentPlan, VitalSigns,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}

pub fn seed_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "apt-001".into(),
            patient_id: "pat-001".into(),
            patient_name: "John Doe".into(),
            doctor_id: "doc-001".into(),
            doctor_name: "Dr. Sarah Smith".into(),
            department: "Cardiology".into(),
            date: date(2024, 10, 15),
            start_time: "09:00".into(),
            end_time: "09:30".into(),
            status: AppointmentStatus::Confirmed,
            kind: AppointmentType::Teleconsultation,
            notes: Some("Regular checkup".into()),
        },
        Appointment {
            id: "apt-002".into(),
            patient_id: "pat-002".into(),
            patient_name: "Jane Smith".into(),
            doctor_id: "doc-002".into(),
            doctor_name: "Dr. James Wilson".into(),
            department: "Dermatology".into(),
            date: date(2024, 10, 16),
            start_time: "10:00".into(),
            end_time: "10:30".into(),
            status: AppointmentStatus::Scheduled,
            kind: AppointmentType::InPerson,
            notes: Some("Follow-up visit".into()),
        },
    ]
}

pub fn seed_time_slots() -> Vec<TimeSlot> {
    let slot = |id: &str, doctor_id: &str, department: &str, d: NaiveDate, start: &str, end: &str, available: bool| TimeSlot {
        id: id.into(),
        doctor_id: doctor_id.into(),
        department: department.into(),
        date: d,
        start_time: start.into(),
        end_time: end.into(),
        is_available: available,
    };

    vec![
        slot("slot-001", "doc-001", "Cardiology", date(2024, 10, 15), "09:00", "09:30", true),
        slot("slot-002", "doc-001", "Cardiology", date(2024, 10, 15), "09:30", "10:00", true),
        slot("slot-003", "doc-001", "Cardiology", date(2024, 10, 15), "10:00", "10:30", false),
        slot("slot-004", "doc-002", "Dermatology", date(2024, 10, 16), "10:00", "10:30", true),
    ]
}

/// Doctors for the booking flow. `available_slots` is left empty here; the
/// repository attaches the open slots at read time.
pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: "doc-001".into(),
            name: "Dr. Sarah Smith".into(),
            specialization: "Cardiologist".into(),
            department: "Cardiology".into(),
            rating: 4.8,
            available_slots: Vec::new(),
        },
        Doctor {
            id: "doc-002".into(),
            name: "Dr. James Wilson".into(),
            specialization: "Dermatologist".into(),
            department: "Dermatology".into(),
            rating: 4.6,
            available_slots: Vec::new(),
        },
    ]
}

pub fn seed_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "pat-001".into(),
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            date_of_birth: date(1989, 5, 15),
            gender: Gender::Male,
            blood_type: "O+".into(),
            medical_history: vec!["Hypertension".into(), "Diabetes".into()],
        },
        Patient {
            id: "pat-002".into(),
            name: "Jane Smith".into(),
            email: "jane.smith@example.com".into(),
            phone: "+1 (555) 987-6543".into(),
            date_of_birth: date(1995, 12, 3),
            gender: Gender::Female,
            blood_type: "A+".into(),
            medical_history: vec!["Asthma".into()],
        },
    ]
}

pub fn seed_medical_records() -> Vec<MedicalRecord> {
    vec![
        MedicalRecord {
            id: "rec-001".into(),
            patient_id: "pat-001".into(),
            patient_name: "John Doe".into(),
            doctor_id: "doc-001".into(),
            doctor_name: "Dr. Sarah Smith".into(),
            date: date(2024, 10, 10),
            kind: RecordType::Consultation,
            title: "General Checkup".into(),
            description: "Routine general health examination".into(),
            vital_signs: VitalSigns {
                blood_pressure: "120/80 mmHg".into(),
                heart_rate: "72 bpm".into(),
                temperature: "98.6°F".into(),
                respiratory_rate: "16/min".into(),
                oxygen_saturation: "98%".into(),
                height: "175 cm".into(),
                weight: "70 kg".into(),
            },
            diagnosis: vec![Diagnosis {
                code: "Z00.00".into(),
                name: "Encounter for general adult medical examination without abnormal findings"
                    .into(),
                description: "Regular checkup with no significant findings".into(),
            }],
            treatment_plan: TreatmentPlan {
                medications: vec![],
                procedures: vec![],
                follow_up: "Return in 6 months for routine checkup".into(),
                recommendations: vec!["Maintain healthy diet".into(), "Regular exercise".into()],
            },
            notes: "Patient in good health. All vitals normal.".into(),
            attachments: vec![],
        },
        MedicalRecord {
            id: "rec-002".into(),
            patient_id: "pat-001".into(),
            patient_name: "John Doe".into(),
            doctor_id: "doc-001".into(),
            doctor_name: "Dr. Sarah Smith".into(),
            date: date(2024, 9, 15),
            kind: RecordType::FollowUp,
            title: "Cardiology Follow-up".into(),
            description: "Follow-up visit for hypertension management".into(),
            vital_signs: VitalSigns {
                blood_pressure: "135/85 mmHg".into(),
                heart_rate: "76 bpm".into(),
                temperature: "98.4°F".into(),
                respiratory_rate: "16/min".into(),
                oxygen_saturation: "99%".into(),
                height: "175 cm".into(),
                weight: "71 kg".into(),
            },
            diagnosis: vec![Diagnosis {
                code: "I10".into(),
                name: "Essential (primary) hypertension".into(),
                description: "High blood pressure, well controlled on current medication".into(),
            }],
            treatment_plan: TreatmentPlan {
                medications: vec![Medication {
                    name: "Lisinopril".into(),
                    dosage: "10mg".into(),
                    frequency: "once daily".into(),
                    duration: "ongoing".into(),
                }],
                procedures: vec![],
                follow_up: "Return in 3 months".into(),
                recommendations: vec![
                    "Continue current medication".into(),
                    "Monitor BP regularly".into(),
                ],
            },
            notes: "BP slightly elevated but within target range. Patient compliant with medication."
                .into(),
            attachments: vec!["echo-report.pdf".into(), "blood-work.pdf".into()],
        },
    ]
}

pub fn seed_lab_reports() -> Vec<LabReport> {
    let result = |name: &str, value: &str, unit: &str, range: &str, status: ResultFlag| LabResult {
        test_name: name.into(),
        value: value.into(),
        unit: unit.into(),
        reference_range: range.into(),
        status,
    };

    vec![
        LabReport {
            id: "lab-001".into(),
            patient_id: "pat-001".into(),
            patient_name: "John Doe".into(),
            doctor_id: "doc-001".into(),
            doctor_name: "Dr. Sarah Smith".into(),
            test_type: "Complete Blood Count (CBC)".into(),
            test_date: date(2024, 10, 5),
            status: ReportStatus::Completed,
            results: vec![
                result("White Blood Cell Count", "7.2", "x10^9/L", "4.0-11.0", ResultFlag::Normal),
                result("Red Blood Cell Count", "4.8", "x10^12/L", "4.2-5.4", ResultFlag::Normal),
                result("Hemoglobin", "14.2", "g/dL", "12.0-16.0", ResultFlag::Normal),
                result("Platelet Count", "280", "x10^9/L", "150-450", ResultFlag::Normal),
            ],
            notes: "All values within normal range. No abnormalities detected.".into(),
            lab_technician: "Tech. Mike".into(),
            reviewed_by: "Dr. Sarah Smith".into(),
            reviewed_date: date(2024, 10, 6),
        },
        LabReport {
            id: "lab-002".into(),
            patient_id: "pat-002".into(),
            patient_name: "Jane Smith".into(),
            doctor_id: "doc-002".into(),
            doctor_name: "Dr. James Wilson".into(),
            test_type: "Lipid Panel".into(),
            test_date: date(2024, 10, 8),
            status: ReportStatus::Completed,
            results: vec![
                result("Total Cholesterol", "198", "mg/dL", "<200", ResultFlag::Normal),
                result("LDL Cholesterol", "115", "mg/dL", "<100 optimal", ResultFlag::Borderline),
                result("HDL Cholesterol", "65", "mg/dL", ">40 for men, >50 for women", ResultFlag::Normal),
                result("Triglycerides", "89", "mg/dL", "<150", ResultFlag::Normal),
            ],
            notes: "LDL slightly elevated. Recommend lifestyle modifications.".into(),
            lab_technician: "Tech. Mike".into(),
            reviewed_by: "Dr. James Wilson".into(),
            reviewed_date: date(2024, 10, 9),
        },
    ]
}
