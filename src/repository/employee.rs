use crate::{
    error::AppError,
    graph::{GraphStore, Row, Statement, StoreError},
    model::employee::{Employee, EmployeeName},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{error, info};

/// Read-only access to `Funcionario` nodes. Employees are managed elsewhere.
#[derive(Clone)]
pub struct EmployeeRepository {
    store: Arc<dyn GraphStore>,
}

impl EmployeeRepository {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Every employee with all of its stored properties, in store order.
    pub async fn list_all(&self) -> Result<Vec<Employee>, AppError> {
        let rows = self
            .store
            .execute(Statement::ListEmployees)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list employees");
                e
            })?;

        Ok(decode_column(rows, "f")?)
    }

    /// Only `nome` is projected, unlike [`list_all`](Self::list_all).
    ///
    /// No match is a valid answer and comes back as an empty vec.
    pub async fn find_by_cpf(&self, cpf: &str) -> Result<Vec<EmployeeName>, AppError> {
        let rows = self
            .store
            .execute(Statement::FindEmployeeName {
                cpf: cpf.to_string(),
            })
            .await
            .map_err(|e| {
                error!(error = %e, cpf, "Failed to look up employee");
                e
            })?;

        if rows.is_empty() {
            info!(cpf, "Funcionário não encontrado.");
            return Ok(Vec::new());
        }

        Ok(rows
            .into_iter()
            .map(|row| serde_json::from_value(serde_json::Value::Object(row)))
            .collect::<Result<Vec<EmployeeName>, _>>()
            .map_err(StoreError::from)?)
    }
}

/// Decode the node held in `column` of every row.
pub(crate) fn decode_column<T: DeserializeOwned>(
    rows: Vec<Row>,
    column: &str,
) -> Result<Vec<T>, StoreError> {
    rows.into_iter()
        .map(|mut row| {
            let node = row
                .remove(column)
                .ok_or_else(|| StoreError(format!("row has no column `{}`", column)))?;
            serde_json::from_value(node).map_err(|e| {
                error!(error = %e, column, "Failed to decode node");
                StoreError::from(e)
            })
        })
        .collect()
}
