use neo4rs::{Query, query};

/// Every query the service issues. Values always travel as bound parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    ListEmployees,
    FindEmployeeName {
        cpf: String,
    },
    /// Match + create + relate in a single statement; yields no row when the
    /// employee does not exist.
    CreateRecord {
        cpf: String,
        data: String,
        hora: String,
        tipo: String,
    },
    ListRecords {
        cpf: String,
    },
    DeleteRecordsForDay {
        cpf: String,
        data: String,
    },
}

/// How a returned column has to be read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Node(&'static str),
    Scalar(&'static str),
}

impl Statement {
    pub fn cypher(&self) -> &'static str {
        match self {
            Statement::ListEmployees => "MATCH (f:Funcionario) RETURN f",
            Statement::FindEmployeeName { .. } => {
                "MATCH (f:Funcionario {cpf: $cpf}) RETURN f.nome AS nome"
            }
            Statement::CreateRecord { .. } => {
                r#"
                MATCH (f:Funcionario {cpf: $cpf})
                CREATE (p:Ponto {data: $data, hora: $hora, tipo: $tipo, funcionario: $cpf})
                CREATE (f)-[:REGISTROU]->(p)
                RETURN p
                "#
            }
            Statement::ListRecords { .. } => {
                "MATCH (f:Funcionario {cpf: $cpf})-[:REGISTROU]->(p:Ponto) RETURN p"
            }
            Statement::DeleteRecordsForDay { .. } => {
                "MATCH (f:Funcionario {cpf: $cpf})-[:REGISTROU]->(p:Ponto {data: $data}) DETACH DELETE p"
            }
        }
    }

    pub fn params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Statement::ListEmployees => vec![],
            Statement::FindEmployeeName { cpf } | Statement::ListRecords { cpf } => {
                vec![("cpf", cpf.as_str())]
            }
            Statement::CreateRecord {
                cpf,
                data,
                hora,
                tipo,
            } => vec![
                ("cpf", cpf.as_str()),
                ("data", data.as_str()),
                ("hora", hora.as_str()),
                ("tipo", tipo.as_str()),
            ],
            Statement::DeleteRecordsForDay { cpf, data } => {
                vec![("cpf", cpf.as_str()), ("data", data.as_str())]
            }
        }
    }

    pub fn columns(&self) -> &'static [Column] {
        match self {
            Statement::ListEmployees => &[Column::Node("f")],
            Statement::FindEmployeeName { .. } => &[Column::Scalar("nome")],
            Statement::CreateRecord { .. } | Statement::ListRecords { .. } => {
                &[Column::Node("p")]
            }
            Statement::DeleteRecordsForDay { .. } => &[],
        }
    }

    pub fn to_query(&self) -> Query {
        self.params()
            .into_iter()
            .fold(query(self.cypher()), |q, (name, value)| {
                q.param(name, value.to_string())
            })
    }
}
