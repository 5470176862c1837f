use crate::{
    error::AppError,
    graph::{GraphStore, Statement},
    model::attendance::{AttendanceRecord, Tipo},
    repository::employee::decode_column,
};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error, warn};

pub const INVALID_TIPO: &str = "Tipo inválido. Deve ser \"entrada\" ou \"saida\".";
pub const EMPLOYEE_NOT_FOUND: &str = "Funcionário não encontrado.";

/// Creates, lists and purges `Ponto` nodes hanging off an employee.
#[derive(Clone)]
pub struct AttendanceRecordService {
    store: Arc<dyn GraphStore>,
}

impl AttendanceRecordService {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Record one clock-in/out for the employee identified by `cpf`.
    ///
    /// `tipo` is checked before anything reaches the store. The record and
    /// its `REGISTROU` edge are written by one statement, so an unknown cpf
    /// leaves nothing behind and is reported as `NotFound`.
    pub async fn create_record(
        &self,
        cpf: &str,
        data: &str,
        hora: &str,
        tipo: &str,
    ) -> Result<AttendanceRecord, AppError> {
        let tipo = Tipo::from_str(tipo).map_err(|_| {
            debug!(cpf, tipo, "Rejected attendance record with invalid tipo");
            AppError::Validation(INVALID_TIPO.to_string())
        })?;

        let rows = self
            .store
            .execute(Statement::CreateRecord {
                cpf: cpf.to_string(),
                data: data.to_string(),
                hora: hora.to_string(),
                tipo: tipo.as_ref().to_string(),
            })
            .await
            .map_err(|e| {
                error!(error = %e, cpf, data, hora, "Failed to create attendance record");
                e
            })?;

        match decode_column::<AttendanceRecord>(rows, "p")?.into_iter().next() {
            Some(record) => Ok(record),
            None => {
                warn!(cpf, "Attendance record not created, employee does not exist");
                Err(AppError::NotFound(EMPLOYEE_NOT_FOUND.to_string()))
            }
        }
    }

    /// All records owned by `cpf`, in no particular order. Unknown cpf gives
    /// an empty list.
    pub async fn list_records_for_employee(
        &self,
        cpf: &str,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let rows = self
            .store
            .execute(Statement::ListRecords {
                cpf: cpf.to_string(),
            })
            .await
            .map_err(|e| {
                error!(error = %e, cpf, "Failed to list attendance records");
                e
            })?;

        Ok(decode_column(rows, "p")?)
    }

    /// Detach-delete every record of `cpf` on `data`. Deleting nothing is
    /// still a success.
    pub async fn delete_records_for_day(&self, cpf: &str, data: &str) -> Result<(), AppError> {
        self.store
            .execute(Statement::DeleteRecordsForDay {
                cpf: cpf.to_string(),
                data: data.to_string(),
            })
            .await
            .map_err(|e| {
                error!(error = %e, cpf, data, "Failed to delete attendance records");
                e
            })?;

        debug!(cpf, data, "Attendance records for day deleted");
        Ok(())
    }
}
