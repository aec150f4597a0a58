use std::sync::Arc;

use crate::db::connection::Database;
use crate::db::models::{Appointment, Consultation, Doctor, Patient};
use crate::error::DatabaseError;

/// Read operations against the hospital schema.
///
/// Every method runs one fixed statement on the shared session and fully
/// materializes its rows before returning, so the session is never handed
/// back mid-cursor. The consultation lookup binds its id; no user input is
/// ever interpolated into SQL text.
pub struct DbOperations {
    db: Arc<Database>,
}

impl DbOperations {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list_patients(&self) -> Result<Vec<Patient>, DatabaseError> {
        let mut session = self.db.acquire().await?;
        let patients = sqlx::query_as::<_, Patient>("SELECT * FROM Patient")
            .fetch_all(&mut *session)
            .await?;

        Ok(patients)
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, DatabaseError> {
        let mut session = self.db.acquire().await?;
        let doctors = sqlx::query_as::<_, Doctor>("SELECT * FROM Doctor")
            .fetch_all(&mut *session)
            .await?;

        Ok(doctors)
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, DatabaseError> {
        let mut session = self.db.acquire().await?;
        let appointments = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT a.*, p.first_name AS patient_name, d.first_name AS doctor_name
            FROM Appointment a
            JOIN Patient p ON a.patientID = p.patientID
            JOIN Doctor d ON a.doctorID = d.doctorID
            "#,
        )
        .fetch_all(&mut *session)
        .await?;

        Ok(appointments)
    }

    pub async fn list_consultations(&self) -> Result<Vec<Consultation>, DatabaseError> {
        let mut session = self.db.acquire().await?;
        let consultations = sqlx::query_as::<_, Consultation>(
            r#"
            SELECT a.*,
                p.first_name AS patient_name, p.last_name AS patient_last_name,
                d.first_name AS doctor_name, d.last_name AS doctor_last_name,
                d.specialization AS doctor_specialization
            FROM Appointment a
            JOIN Patient p ON a.patientID = p.patientID
            JOIN Doctor d ON a.doctorID = d.doctorID
            ORDER BY a.appDate DESC, a.appTime DESC
            "#,
        )
        .fetch_all(&mut *session)
        .await?;

        Ok(consultations)
    }

    pub async fn get_consultation(&self, id: i32) -> Result<Option<Consultation>, DatabaseError> {
        let mut session = self.db.acquire().await?;
        let consultation = sqlx::query_as::<_, Consultation>(
            r#"
            SELECT a.*,
                p.first_name AS patient_name, p.last_name AS patient_last_name,
                d.first_name AS doctor_name, d.last_name AS doctor_last_name,
                d.specialization AS doctor_specialization
            FROM Appointment a
            JOIN Patient p ON a.patientID = p.patientID
            JOIN Doctor d ON a.doctorID = d.doctorID
            WHERE a.appID = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *session)
        .await?;

        Ok(consultation)
    }

    pub async fn count_patients(&self) -> Result<i64, DatabaseError> {
        let mut session = self.db.acquire().await?;
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Patient")
            .fetch_one(&mut *session)
            .await?;

        Ok(count)
    }

    pub async fn count_doctors(&self) -> Result<i64, DatabaseError> {
        let mut session = self.db.acquire().await?;
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Doctor")
            .fetch_one(&mut *session)
            .await?;

        Ok(count)
    }

    pub async fn count_appointments(&self) -> Result<i64, DatabaseError> {
        let mut session = self.db.acquire().await?;
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Appointment")
            .fetch_one(&mut *session)
            .await?;

        Ok(count)
    }
}
