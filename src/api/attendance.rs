use crate::{
    error::AppError,
    service::attendance::{AttendanceRecordService, INVALID_TIPO},
};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateRecord {
    #[schema(example = "11122233344")]
    pub cpf: String,
    #[schema(example = "2024-01-10")]
    pub data: String,
    #[schema(example = "08:00")]
    pub hora: String,
    /// "entrada" or "saida"; anything else, absent included, is rejected with 400
    #[serde(default)]
    #[schema(value_type = String, example = "entrada")]
    pub tipo: Option<Value>,
}

/// Register a clock-in/clock-out
#[utoipa::path(
    post,
    path = "/ponto",
    request_body = CreateRecord,
    responses(
        (status = 200, description = "Record created", body = crate::model::attendance::AttendanceRecord),
        (status = 400, description = "Invalid tipo", body = Object, example = json!({
            "error": "Tipo inválido. Deve ser \"entrada\" ou \"saida\"."
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Funcionário não encontrado."
        })),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "error": "Internal Server Error"
        }))
    ),
    tag = "Attendance"
)]
pub async fn create_record(
    service: web::Data<AttendanceRecordService>,
    payload: web::Json<CreateRecord>,
) -> Result<HttpResponse, AppError> {
    let CreateRecord {
        cpf,
        data,
        hora,
        tipo,
    } = payload.into_inner();

    let tipo = match tipo {
        Some(Value::String(tipo)) => tipo,
        _ => return Err(AppError::Validation(INVALID_TIPO.to_string())),
    };

    let record = service.create_record(&cpf, &data, &hora, &tipo).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// List an employee's records
#[utoipa::path(
    get,
    path = "/pontos/{cpf}",
    params(
        ("cpf", Path, description = "Employee cpf")
    ),
    responses(
        (status = 200, description = "Records of the employee, unordered", body = [crate::model::attendance::AttendanceRecord]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_records(
    service: web::Data<AttendanceRecordService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let cpf = path.into_inner();

    let records = service.list_records_for_employee(&cpf).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Delete an employee's records of one day
#[utoipa::path(
    delete,
    path = "/pontos/{cpf}/{data}",
    params(
        ("cpf", Path, description = "Employee cpf"),
        ("data", Path, description = "Day of the records, as stored")
    ),
    responses(
        (status = 200, description = "Records deleted (also when none matched)", body = Object, example = json!({
            "message": "Pontos registrados no dia 2024-01-10 para o funcionário de CPF 11122233344 foram excluídos com sucesso."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn delete_records_for_day(
    service: web::Data<AttendanceRecordService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (cpf, data) = path.into_inner();

    service.delete_records_for_day(&cpf, &data).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": format!(
            "Pontos registrados no dia {} para o funcionário de CPF {} foram excluídos com sucesso.",
            data, cpf
        )
    })))
}
