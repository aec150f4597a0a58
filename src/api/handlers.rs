use actix_web::{web, HttpResponse};
use serde::Serialize;
use crate::AppState;
use crate::error::{AppError, DatabaseError};
use tracing::{info, error};

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}

pub async fn list_patients(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    match state.ops.list_patients().await {
        Ok(patients) => {
            info!("Fetched {} patients", patients.len());
            Ok(HttpResponse::Ok().json(patients))
        }
        Err(e) => {
            error!("Error fetching patients: {}", e);
            Err(e.into())
        }
    }
}

pub async fn list_doctors(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    match state.ops.list_doctors().await {
        Ok(doctors) => {
            info!("Fetched {} doctors", doctors.len());
            Ok(HttpResponse::Ok().json(doctors))
        }
        Err(e) => {
            error!("Error fetching doctors: {}", e);
            Err(e.into())
        }
    }
}

pub async fn list_appointments(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    match state.ops.list_appointments().await {
        Ok(appointments) => {
            info!("Fetched {} appointments", appointments.len());
            Ok(HttpResponse::Ok().json(appointments))
        }
        Err(e) => {
            error!("Error fetching appointments: {}", e);
            Err(e.into())
        }
    }
}

pub async fn list_consultations(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    match state.ops.list_consultations().await {
        Ok(consultations) => {
            info!("Fetched {} consultations", consultations.len());
            Ok(HttpResponse::Ok().json(consultations))
        }
        Err(e) => {
            error!("Error fetching consultations: {}", e);
            Err(e.into())
        }
    }
}

pub async fn get_consultation(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    match state.ops.get_consultation(id).await {
        Ok(Some(consultation)) => Ok(HttpResponse::Ok().json(consultation)),
        Ok(None) => {
            info!("Consultation {} not found", id);
            Err(DatabaseError::NotFound.into())
        }
        Err(e) => {
            error!("Error fetching consultation {}: {}", id, e);
            Err(e.into())
        }
    }
}

pub async fn count_patients(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    match state.ops.count_patients().await {
        Ok(count) => Ok(HttpResponse::Ok().json(CountResponse { count })),
        Err(e) => {
            error!("Error counting patients: {}", e);
            Err(e.into())
        }
    }
}

pub async fn count_doctors(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    match state.ops.count_doctors().await {
        Ok(count) => Ok(HttpResponse::Ok().json(CountResponse { count })),
        Err(e) => {
            error!("Error counting doctors: {}", e);
            Err(e.into())
        }
    }
}

pub async fn count_appointments(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    match state.ops.count_appointments().await {
        Ok(count) => Ok(HttpResponse::Ok().json(CountResponse { count })),
        Err(e) => {
            error!("Error counting appointments: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_response_serialization() {
        let value = serde_json::to_value(CountResponse { count: 12 }).unwrap();
        assert_eq!(value, serde_json::json!({ "count": 12 }));
    }
}
