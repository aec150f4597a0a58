use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the Patient table. The response key spellings follow the
/// frontend contract (`patientID`, `contactNo`, ...), the `sqlx` renames the
/// column spellings of the hospital schema.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(rename = "patientID")]
    #[sqlx(rename = "patientID")]
    pub patient_id: i32,
    #[sqlx(rename = "first_name")]
    pub name: String,
    #[sqlx(rename = "Age")]
    pub age: i32,
    #[sqlx(rename = "Gender")]
    pub gender: String,
    #[sqlx(rename = "ContactNo")]
    pub contact_no: String,
    #[sqlx(rename = "Email")]
    pub email: String,
    #[sqlx(rename = "Medical_history")]
    pub medical_history: String,
    #[sqlx(rename = "Insurance_details")]
    pub insurance_details: String,
    #[sqlx(rename = "EmergencyContact")]
    pub emergency_contact: String,
}

/// One row of the Doctor table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(rename = "doctorID")]
    #[sqlx(rename = "DoctorID")]
    pub doctor_id: i32,
    #[sqlx(rename = "first_name")]
    pub name: String,
    #[sqlx(rename = "Specialization")]
    pub specialisation: String,
    #[sqlx(rename = "PhoneNo")]
    pub phone_no: String,
    #[sqlx(rename = "Email")]
    pub email: String,
}

/// One row of the Appointment join. Patient and doctor are resolved to their
/// first names at query time; the raw ids present in the joined row are not
/// part of this record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "appID")]
    #[sqlx(rename = "appID")]
    pub app_id: i32,
    #[sqlx(rename = "patient_name")]
    pub patient_name: String,
    #[sqlx(rename = "doctor_name")]
    pub doctor_name: String,
    #[sqlx(rename = "appDate")]
    pub app_date: String,
    #[sqlx(rename = "appTime")]
    pub app_time: String,
    pub status: String,
}

/// One row of the consultations join: the full Appointment row plus the
/// joined names and specialisation. Response keys are the raw column names,
/// which is what the consultations endpoint has always returned.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Consultation {
    #[serde(rename = "appID")]
    #[sqlx(rename = "appID")]
    pub app_id: i32,
    #[serde(rename = "patientID")]
    #[sqlx(rename = "patientID")]
    pub patient_id: i32,
    #[serde(rename = "doctorID")]
    #[sqlx(rename = "doctorID")]
    pub doctor_id: i32,
    #[serde(rename = "appDate")]
    #[sqlx(rename = "appDate")]
    pub app_date: String,
    #[serde(rename = "appTime")]
    #[sqlx(rename = "appTime")]
    pub app_time: String,
    pub status: String,
    pub patient_name: String,
    pub patient_last_name: String,
    pub doctor_name: String,
    pub doctor_last_name: String,
    pub doctor_specialization: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patient_serialization() {
        let patient = Patient {
            patient_id: 1,
            name: "Alice".to_string(),
            age: 30,
            gender: "F".to_string(),
            contact_no: "555-1234".to_string(),
            email: "a@x.com".to_string(),
            medical_history: "none".to_string(),
            insurance_details: "PlanA".to_string(),
            emergency_contact: "Bob 555-5678".to_string(),
        };

        let value = serde_json::to_value(&patient).unwrap();
        assert_eq!(
            value,
            json!({
                "patientID": 1,
                "name": "Alice",
                "age": 30,
                "gender": "F",
                "contactNo": "555-1234",
                "email": "a@x.com",
                "medicalHistory": "none",
                "insuranceDetails": "PlanA",
                "emergencyContact": "Bob 555-5678"
            })
        );
    }

    #[test]
    fn test_doctor_serialization() {
        let doctor = Doctor {
            doctor_id: 7,
            name: "Meera".to_string(),
            specialisation: "Cardiology".to_string(),
            phone_no: "555-0007".to_string(),
            email: "meera@hospital.example".to_string(),
        };

        let value = serde_json::to_value(&doctor).unwrap();
        assert_eq!(
            value,
            json!({
                "doctorID": 7,
                "name": "Meera",
                "specialisation": "Cardiology",
                "phoneNo": "555-0007",
                "email": "meera@hospital.example"
            })
        );
    }

    #[test]
    fn test_appointment_serialization() {
        let appointment = Appointment {
            app_id: 3,
            patient_name: "Alice".to_string(),
            doctor_name: "Meera".to_string(),
            app_date: "2025-03-14".to_string(),
            app_time: "10:30:00".to_string(),
            status: "Scheduled".to_string(),
        };

        let value = serde_json::to_value(&appointment).unwrap();
        assert_eq!(
            value,
            json!({
                "appID": 3,
                "patientName": "Alice",
                "doctorName": "Meera",
                "appDate": "2025-03-14",
                "appTime": "10:30:00",
                "status": "Scheduled"
            })
        );
    }

    #[test]
    fn test_consultation_serialization_uses_column_keys() {
        let consultation = Consultation {
            app_id: 3,
            patient_id: 1,
            doctor_id: 7,
            app_date: "2025-03-14".to_string(),
            app_time: "10:30:00".to_string(),
            status: "Completed".to_string(),
            patient_name: "Alice".to_string(),
            patient_last_name: "Nguyen".to_string(),
            doctor_name: "Meera".to_string(),
            doctor_last_name: "Patel".to_string(),
            doctor_specialization: "Cardiology".to_string(),
        };

        let value = serde_json::to_value(&consultation).unwrap();
        assert_eq!(
            value,
            json!({
                "appID": 3,
                "patientID": 1,
                "doctorID": 7,
                "appDate": "2025-03-14",
                "appTime": "10:30:00",
                "status": "Completed",
                "patient_name": "Alice",
                "patient_last_name": "Nguyen",
                "doctor_name": "Meera",
                "doctor_last_name": "Patel",
                "doctor_specialization": "Cardiology"
            })
        );
    }

    #[test]
    fn test_patient_round_trip() {
        let json_text = r#"{
            "patientID": 2,
            "name": "Carlos",
            "age": 52,
            "gender": "M",
            "contactNo": "555-4321",
            "email": "c@x.com",
            "medicalHistory": "hypertension",
            "insuranceDetails": "PlanB",
            "emergencyContact": "Dana 555-8765"
        }"#;

        let patient: Patient = serde_json::from_str(json_text).unwrap();
        assert_eq!(patient.patient_id, 2);
        assert_eq!(patient.name, "Carlos");
        assert_eq!(patient.age, 52);
        assert_eq!(patient.medical_history, "hypertension");
    }
}
