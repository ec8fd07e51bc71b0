//! Hospital records and the in-memory sample data behind the dashboard views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::department::DepartmentScoped;

fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Doctors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub experience_years: u32,
    pub email: String,
    pub phone: String,
    pub availability: String,
    pub department: String,
}

impl DepartmentScoped for Doctor {
    fn department(&self) -> &str {
        &self.department
    }
}

pub fn sample_doctors() -> Vec<Doctor> {
    let doctor = |id: &str, name: &str, dept: &str, years: u32, email: &str, phone: &str, availability: &str| Doctor {
        id: id.into(),
        name: name.into(),
        specialty: dept.into(),
        experience_years: years,
        email: email.into(),
        phone: phone.into(),
        availability: availability.into(),
        department: dept.into(),
    };
    vec![
        doctor("1", "Dr. James Wilson", "Cardiology", 12, "james.wilson@hospital.com", "(555) 123-4567", "Mon, Wed, Fri"),
        doctor("2", "Dr. Sarah Johnson", "Neurology", 8, "sarah.johnson@hospital.com", "(555) 987-6543", "Tue, Thu"),
        doctor("3", "Dr. Michael Chen", "Pediatrics", 10, "michael.chen@hospital.com", "(555) 456-7890", "Mon-Fri"),
        doctor("4", "Dr. Emily Rodriguez", "Psychology", 6, "emily.rodriguez@hospital.com", "(555) 789-0123", "Wed, Thu, Fri"),
    ]
}

// ---------------------------------------------------------------------------
// Patients
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub visit_date: NaiveDate,
    pub doctor: String,
    pub department: String,
    pub diagnosis: String,
    pub prescription: String,
    pub phone: String,
    pub billing_cents: i64,
}

impl Patient {
    /// Free-text search over id, name, doctor and diagnosis (case-insensitive substring).
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&self.name, &self.id, &self.doctor, &self.diagnosis]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

impl DepartmentScoped for Patient {
    fn department(&self) -> &str {
        &self.department
    }
}

pub fn sample_patients() -> Vec<Patient> {
    #[allow(clippy::too_many_arguments)]
    fn patient(
        id: &str,
        name: &str,
        age: u32,
        gender: &str,
        visit: NaiveDate,
        doctor: &str,
        department: &str,
        diagnosis: &str,
        prescription: &str,
        phone: &str,
        billing_cents: i64,
    ) -> Patient {
        Patient {
            id: id.into(),
            name: name.into(),
            age,
            gender: gender.into(),
            visit_date: visit,
            doctor: doctor.into(),
            department: department.into(),
            diagnosis: diagnosis.into(),
            prescription: prescription.into(),
            phone: phone.into(),
            billing_cents,
        }
    }
    vec![
        patient("P1001", "John Smith", 45, "Male", day(2024, 4, 2), "Dr. James Wilson", "Cardiology", "Hypertension", "Lisinopril 10mg", "(555) 234-5678", 25000),
        patient("P1002", "Emily Jones", 32, "Female", day(2024, 4, 3), "Dr. Sarah Johnson", "Neurology", "Migraine", "Sumatriptan 50mg", "(555) 345-6789", 18000),
        patient("P1003", "Michael Brown", 8, "Male", day(2024, 4, 3), "Dr. Michael Chen", "Pediatrics", "Common cold", "Acetaminophen 160mg", "(555) 456-7891", 9500),
        patient("P1004", "Sarah Wilson", 28, "Female", day(2024, 4, 4), "Dr. Emily Rodriguez", "Psychology", "Anxiety disorder", "Sertraline 50mg", "(555) 567-8901", 20000),
        patient("P1005", "David Johnson", 52, "Male", day(2024, 4, 4), "Dr. James Wilson", "Cardiology", "Arrhythmia", "Metoprolol 25mg", "(555) 678-9012", 32000),
        patient("P1006", "Jennifer Lee", 41, "Female", day(2024, 4, 5), "Dr. Emily Rodriguez", "Psychology", "Depression", "Fluoxetine 20mg", "(555) 789-0124", 16575),
        patient("P1007", "Robert Garcia", 11, "Male", day(2024, 4, 5), "Dr. Michael Chen", "Pediatrics", "Asthma", "Albuterol inhaler", "(555) 890-1234", 12000),
        patient("P1008", "Lisa Wong", 36, "Female", day(2024, 4, 6), "Dr. Sarah Johnson", "Neurology", "Epilepsy", "Levetiracetam 500mg", "(555) 901-2345", 27500),
    ]
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub patient_name: String,
    pub patient_id: String,
    pub doctor_name: String,
    pub doctor_id: String,
    pub appointment_type: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: BookingStatus,
}

pub fn sample_bookings() -> Vec<Booking> {
    let booking = |id: &str, patient: (&str, &str), doctor: (&str, &str), kind: &str, date: NaiveDate, time: &str, status: BookingStatus| Booking {
        id: id.into(),
        patient_name: patient.0.into(),
        patient_id: patient.1.into(),
        doctor_name: doctor.0.into(),
        doctor_id: doctor.1.into(),
        appointment_type: kind.into(),
        date,
        time: time.into(),
        status,
    };
    vec![
        booking("1", ("John Smith", "P1001"), ("Dr. James Wilson", "1"), "Follow-up", day(2024, 4, 6), "09:00 AM", BookingStatus::Confirmed),
        booking("2", ("Emily Jones", "P1002"), ("Dr. Sarah Johnson", "2"), "Consultation", day(2024, 4, 6), "10:30 AM", BookingStatus::Confirmed),
        booking("3", ("Michael Brown", "P1003"), ("Dr. Michael Chen", "3"), "Checkup", day(2024, 4, 6), "01:15 PM", BookingStatus::Pending),
        booking("4", ("Sarah Wilson", "P1004"), ("Dr. Emily Rodriguez", "4"), "Therapy Session", day(2024, 4, 7), "11:00 AM", BookingStatus::Completed),
        booking("5", ("David Johnson", "P1005"), ("Dr. James Wilson", "1"), "ECG Review", day(2024, 4, 8), "03:30 PM", BookingStatus::Cancelled),
    ]
}

// ---------------------------------------------------------------------------
// Billing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub patient_name: String,
    pub patient_id: String,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}

pub fn sample_invoices() -> Vec<Invoice> {
    let invoice = |id: &str, patient: (&str, &str), date: NaiveDate, category: &str, description: &str, amount_cents: i64, status: InvoiceStatus| Invoice {
        id: id.into(),
        patient_name: patient.0.into(),
        patient_id: patient.1.into(),
        date,
        category: category.into(),
        description: description.into(),
        amount_cents,
        status,
    };
    vec![
        invoice("INV-001", ("John Smith", "P1001"), day(2024, 4, 2), "Consultation", "Cardiology consultation", 25000, InvoiceStatus::Paid),
        invoice("INV-002", ("Emily Jones", "P1002"), day(2024, 4, 3), "Laboratory", "MRI brain scan", 18000, InvoiceStatus::Pending),
        invoice("INV-003", ("Michael Brown", "P1003"), day(2024, 4, 3), "Consultation", "Pediatric checkup", 9500, InvoiceStatus::Paid),
        invoice("INV-004", ("Sarah Wilson", "P1004"), day(2024, 4, 4), "Pharmacy", "Prescription refill", 7525, InvoiceStatus::Paid),
        invoice("INV-005", ("David Johnson", "P1005"), day(2024, 4, 5), "Laboratory", "Diabetes screening", 18500, InvoiceStatus::Pending),
        invoice("INV-007", ("Robert Garcia", "P1007"), day(2024, 4, 5), "Radiology", "Chest X-ray", 25550, InvoiceStatus::Overdue),
    ]
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount_cents: i64,
    pub kind: TransactionKind,
    pub category: String,
}

/// Income and expense totals, in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub income_cents: i64,
    pub expense_cents: i64,
}

impl LedgerSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions.iter().fold(Self::default(), |mut acc, t| {
            match t.kind {
                TransactionKind::Income => acc.income_cents += t.amount_cents,
                TransactionKind::Expense => acc.expense_cents += t.amount_cents,
            }
            acc
        })
    }

    pub fn net_cents(&self) -> i64 {
        self.income_cents - self.expense_cents
    }
}

pub fn sample_transactions() -> Vec<Transaction> {
    let tx = |id: &str, date: NaiveDate, description: &str, amount_cents: i64, kind: TransactionKind, category: &str| Transaction {
        id: id.into(),
        date,
        description: description.into(),
        amount_cents,
        kind,
        category: category.into(),
    };
    vec![
        tx("TRX001", day(2024, 4, 1), "Patient Consultations", 285000, TransactionKind::Income, "Services"),
        tx("TRX002", day(2024, 4, 1), "Staff Salaries", 1250000, TransactionKind::Expense, "Payroll"),
        tx("TRX003", day(2024, 4, 2), "Laboratory Tests", 175050, TransactionKind::Income, "Services"),
        tx("TRX004", day(2024, 4, 2), "Medical Supplies", 92575, TransactionKind::Expense, "Supplies"),
        tx("TRX005", day(2024, 4, 3), "Insurance Reimbursement", 345025, TransactionKind::Income, "Insurance"),
        tx("TRX006", day(2024, 4, 3), "Utility Bills", 78550, TransactionKind::Expense, "Utilities"),
        tx("TRX007", day(2024, 4, 4), "Pharmacy Sales", 165000, TransactionKind::Income, "Pharmacy"),
    ]
}

// ---------------------------------------------------------------------------
// Communication
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub sender_role: String,
    pub subject: String,
    pub content: String,
    pub date: NaiveDate,
    pub read: bool,
}

pub fn sample_messages() -> Vec<Message> {
    let message = |id: &str, sender: (&str, &str), subject: &str, content: &str, date: NaiveDate, read: bool| Message {
        id: id.into(),
        sender: sender.0.into(),
        sender_role: sender.1.into(),
        subject: subject.into(),
        content: content.into(),
        date,
        read,
    };
    vec![
        message(
            "MSG001",
            ("Dr. James Wilson", "Cardiologist"),
            "Patient Referral - John Smith",
            "I would like to refer patient John Smith (ID: P1001) to a specialist for further cardiac evaluation.",
            day(2024, 4, 5),
            true,
        ),
        message(
            "MSG002",
            ("Nursing Department", "Department"),
            "Staffing Request for Weekend",
            "We are requesting two more registered nurses for the night shift on Saturday and Sunday.",
            day(2024, 4, 5),
            false,
        ),
        message(
            "MSG003",
            ("Dr. Sarah Johnson", "Neurologist"),
            "Equipment Maintenance Required",
            "The MRI machine in Radiology needs maintenance after repeated calibration errors.",
            day(2024, 4, 6),
            false,
        ),
    ]
}
