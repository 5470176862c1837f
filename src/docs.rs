use crate::api::attendance::CreateRecord;
use crate::model::attendance::{AttendanceRecord, Tipo};
use crate::model::employee::EmployeeName;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ponto API",
        version = "0.1.0",
        description = r#"
## Employee attendance (ponto) API

Records clock-in (**entrada**) and clock-out (**saida**) events for employees
stored in a Neo4j graph. Each record hangs off its employee through a
`REGISTROU` relationship.

### 🔹 Key Features
- **Employees**
  - List employees and look up an employee's name by cpf
- **Attendance**
  - Register a clock-in/clock-out, list an employee's records, delete a day's records

### 📦 Response Format
- JSON responses
- Errors come back as `{"error": "..."}`

---
Built with **Rust**, **Actix Web**, **neo4rs**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,

        crate::api::attendance::create_record,
        crate::api::attendance::list_records,
        crate::api::attendance::delete_records_for_day
    ),
    components(
        schemas(
            CreateRecord,
            AttendanceRecord,
            Tipo,
            EmployeeName
        )
    ),
    tags(
        (name = "Employee", description = "Employee lookup APIs"),
        (name = "Attendance", description = "Attendance record APIs"),
    )
)]
pub struct ApiDoc;
