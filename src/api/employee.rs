use crate::{
    error::AppError,
    repository::employee::EmployeeRepository,
    service::attendance::EMPLOYEE_NOT_FOUND,
};
use actix_web::{HttpResponse, web};
use serde_json::json;

/// List employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "Every employee with all stored properties", body = [Object], example = json!([{
            "cpf": "11122233344",
            "nome": "Maria Silva"
        }])),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "error": "Internal Server Error"
        }))
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    repo: web::Data<EmployeeRepository>,
) -> Result<HttpResponse, AppError> {
    let employees = repo.list_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Get employee name by cpf
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(
        ("id", Path, description = "Employee cpf")
    ),
    responses(
        (status = 200, description = "Employee found", body = [crate::model::employee::EmployeeName]),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Funcionário não encontrado."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    repo: web::Data<EmployeeRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let cpf = path.into_inner();

    let found = repo.find_by_cpf(&cpf).await?;
    if found.is_empty() {
        return Ok(HttpResponse::NotFound().json(json!({
            "error": EMPLOYEE_NOT_FOUND
        })));
    }

    Ok(HttpResponse::Ok().json(found))
}
