use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Clock-in or clock-out marker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tipo {
    Entrada,
    Saida,
}

/// A `Ponto` node. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "data": "2024-01-10",
        "hora": "08:00",
        "tipo": "entrada",
        "funcionario": "11122233344"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = "2024-01-10")]
    pub data: String,

    #[schema(example = "08:00")]
    pub hora: String,

    pub tipo: Tipo,

    /// cpf of the owning employee
    #[schema(example = "11122233344")]
    pub funcionario: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tipo_accepts_only_the_two_exact_markers() {
        assert_eq!(Tipo::from_str("entrada").unwrap(), Tipo::Entrada);
        assert_eq!(Tipo::from_str("saida").unwrap(), Tipo::Saida);

        for bad in ["Entrada", "SAIDA", "saída", " entrada", "", "intervalo"] {
            assert!(Tipo::from_str(bad).is_err(), "{:?} accepted", bad);
        }
    }

    #[test]
    fn tipo_is_stored_lowercase() {
        assert_eq!(Tipo::Saida.as_ref(), "saida");
        assert_eq!(serde_json::to_value(Tipo::Entrada).unwrap(), "entrada");
    }
}
