//! In-memory graph for tests.
//!
//! Interprets each [`Statement`] the way the Cypher in `statement.rs` behaves
//! on Neo4j. Nodes and `REGISTROU` edges are kept apart so detach-delete can
//! be observed. State is locked for the whole statement, so every statement
//! is atomic.

use super::{GraphStore, Row, Statement, StoreError};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
struct State {
    employees: Vec<Map<String, Value>>,
    // (node id, properties)
    records: Vec<(u64, Map<String, Value>)>,
    // REGISTROU: (employee cpf, record node id)
    edges: Vec<(String, u64)>,
    next_id: u64,
}

#[derive(Default)]
pub struct MemoryGraph {
    state: Mutex<State>,
    executed: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employee(self, cpf: &str, nome: &str) -> Self {
        self.insert_employee(json!({ "cpf": cpf, "nome": nome }));
        self
    }

    /// Adds a `Funcionario` node with arbitrary properties.
    pub fn insert_employee(&self, props: Value) {
        if let Value::Object(map) = props {
            self.state.lock().unwrap().employees.push(map);
        }
    }

    /// Every subsequent statement fails as if the connection dropped.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn executed(&self) -> usize {
        self.executed.load(Ordering::SeqCst)
    }

    pub fn record_count(&self) -> usize {
        self.state.lock().unwrap().records.len()
    }

    pub fn edge_count(&self) -> usize {
        self.state.lock().unwrap().edges.len()
    }
}

fn has_cpf(props: &Map<String, Value>, cpf: &str) -> bool {
    props.get("cpf").and_then(Value::as_str) == Some(cpf)
}

fn single(column: &str, value: Value) -> Row {
    let mut row = Row::new();
    row.insert(column.to_string(), value);
    row
}

#[async_trait]
impl GraphStore for MemoryGraph {
    async fn execute(&self, statement: Statement) -> Result<Vec<Row>, StoreError> {
        self.executed.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError("connection refused".to_string()));
        }

        let mut state = self.state.lock().unwrap();
        let rows = match statement {
            Statement::ListEmployees => state
                .employees
                .iter()
                .map(|props| single("f", Value::Object(props.clone())))
                .collect(),

            Statement::FindEmployeeName { cpf } => state
                .employees
                .iter()
                .filter(|props| has_cpf(props, &cpf))
                .map(|props| single("nome", props.get("nome").cloned().unwrap_or(Value::Null)))
                .collect(),

            Statement::CreateRecord {
                cpf,
                data,
                hora,
                tipo,
            } => {
                let owners = state
                    .employees
                    .iter()
                    .filter(|props| has_cpf(props, &cpf))
                    .count();

                let mut rows = Vec::with_capacity(owners);
                for _ in 0..owners {
                    let id = state.next_id;
                    state.next_id += 1;

                    let props = json!({
                        "data": data,
                        "hora": hora,
                        "tipo": tipo,
                        "funcionario": cpf,
                    });
                    let Value::Object(props) = props else {
                        unreachable!()
                    };
                    state.records.push((id, props.clone()));
                    state.edges.push((cpf.clone(), id));
                    rows.push(single("p", Value::Object(props)));
                }
                rows
            }

            Statement::ListRecords { cpf } => {
                let state = &*state;
                state
                    .edges
                    .iter()
                    .filter(|(owner, _)| *owner == cpf)
                    .filter(|_| state.employees.iter().any(|e| has_cpf(e, &cpf)))
                    .filter_map(|(_, id)| state.records.iter().find(|(rid, _)| rid == id))
                    .map(|(_, props)| single("p", Value::Object(props.clone())))
                    .collect()
            }

            Statement::DeleteRecordsForDay { cpf, data } => {
                let doomed: Vec<u64> = state
                    .edges
                    .iter()
                    .filter(|(owner, _)| *owner == cpf)
                    .map(|(_, id)| *id)
                    .filter(|id| {
                        state.records.iter().any(|(rid, props)| {
                            rid == id && props.get("data").and_then(Value::as_str) == Some(data.as_str())
                        })
                    })
                    .collect();

                // detach: edges go with their nodes
                state.edges.retain(|(_, id)| !doomed.contains(id));
                state.records.retain(|(id, _)| !doomed.contains(id));
                Vec::new()
            }
        };

        Ok(rows)
    }
}
