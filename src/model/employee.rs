use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A `Funcionario` node exactly as stored.
///
/// Employees are written by other systems, so no property is assumed to be
/// present or to have a given type; the map is serialized back out as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Employee(pub Map<String, Value>);

impl Employee {
    pub fn cpf(&self) -> Option<&Value> {
        self.0.get("cpf")
    }

    pub fn nome(&self) -> Option<&Value> {
        self.0.get("nome")
    }
}

/// Single-field projection returned by a lookup on cpf. `nome` is null when
/// the node has no such property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeName {
    #[serde(default)]
    #[schema(value_type = String, nullable = true, example = "Maria Silva")]
    pub nome: Value,
}
