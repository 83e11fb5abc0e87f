//! Shared fixtures for the RUC SDK integration tests.
//!
//! Provides sample records, an in-memory `RucService` that records every call,
//! and helpers for driving the blocking client against a wiremock server.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use ruc_sdk::{Operation, Result, Ruc, RucClient, RucError, RucRecord, RucService};

/// A record with the fields the list view reads.
pub fn record(ruc: &str, is_delete: Option<bool>) -> RucRecord {
    let mut r = RucRecord::new(ruc, format!("EMPRESA {ruc} S.A.C."));
    r.estado = Some("ACTIVO".into());
    r.condicion = Some("HABIDO".into());
    r.is_delete = is_delete;
    r
}

/// `n` records with sequential RUCs, all active.
pub fn active_records(n: usize) -> Vec<RucRecord> {
    (0..n)
        .map(|i| record(&format!("{:011}", 20_000_000_000u64 + i as u64), Some(false)))
        .collect()
}

/// Full record as the service serves it.
pub fn sample_json() -> serde_json::Value {
    serde_json::json!({
        "ruc": "20131312955",
        "razonSocial": "SUPERINTENDENCIA NACIONAL DE ADUANAS Y DE ADMINISTRACION TRIBUTARIA - SUNAT",
        "nombreComercial": "SUNAT",
        "telefonos": ["01-6343300", "01-6343301"],
        "tipo": "INSTITUCIONES PUBLICAS",
        "estado": "ACTIVO",
        "condicion": "HABIDO",
        "direccion": "AV. GARCILASO DE LA VEGA NRO. 1472 LIMA - LIMA - LIMA",
        "departamento": "LIMA",
        "provincia": "LIMA",
        "distrito": "LIMA",
        "fechaInscripcion": "1993-05-04",
        "sistEmsion": "MANUAL/COMPUTARIZADO",
        "sistContabilidad": "COMPUTARIZADO",
        "actExterior": "SIN ACTIVIDAD",
        "actEconomicas": ["Principal - 8411 - ACTIVIDADES DE LA ADMINISTRACION PUBLICA EN GENERAL"],
        "cpPago": ["FACTURA", "BOLETA DE VENTA"],
        "sistElectronica": ["FACTURA PORTAL DESDE 07/08/2013"],
        "fechaEmisorFe": "2013-08-07",
        "cpeElectronico": ["FACTURA (desde 07/08/2013)"],
        "fechaPle": "2013-01-01",
        "padrones": ["Incorporado al Régimen de Agentes de Retención de IGV"],
        "fechaBaja": null,
        "profesion": null,
        "ubigeo": "150101",
        "capital": null,
        "isDelete": false
    })
}

pub fn ruc(s: &str) -> Ruc {
    Ruc::parse(s).unwrap()
}

// ---------------------------------------------------------------------------
// FakeService
// ---------------------------------------------------------------------------

/// In-memory service that records calls and replays scripted results.
///
/// `list_all` answers from `list_results` in order and falls back to the
/// current `records` once the script is exhausted.
pub struct FakeService {
    pub records: RefCell<Vec<RucRecord>>,
    pub list_results: RefCell<VecDeque<Result<Vec<RucRecord>>>>,
    pub mutation_error: RefCell<Option<(u16, String)>>,
    pub fetch_calls: Cell<usize>,
    pub list_calls: Cell<usize>,
    pub mutations: RefCell<Vec<(String, bool)>>,
}

impl FakeService {
    pub fn new(records: Vec<RucRecord>) -> Self {
        Self {
            records: RefCell::new(records),
            list_results: RefCell::new(VecDeque::new()),
            mutation_error: RefCell::new(None),
            fetch_calls: Cell::new(0),
            list_calls: Cell::new(0),
            mutations: RefCell::new(Vec::new()),
        }
    }

    /// Make the next `list_all` fail with a server error.
    pub fn fail_next_list(&self, status: u16) {
        self.list_results
            .borrow_mut()
            .push_back(Err(RucError::server(status, None)));
    }

    /// Make every mutation fail with the given server message.
    pub fn fail_mutations(&self, status: u16, message: &str) {
        *self.mutation_error.borrow_mut() = Some((status, message.to_string()));
    }
}

impl RucService for FakeService {
    fn fetch_one(&self, ruc: &Ruc) -> Result<RucRecord> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        self.records
            .borrow()
            .iter()
            .find(|r| r.ruc == ruc.as_str())
            .cloned()
            .ok_or(RucError::NotFound)
    }

    fn list_all(&self) -> Result<Vec<RucRecord>> {
        self.list_calls.set(self.list_calls.get() + 1);
        if let Some(scripted) = self.list_results.borrow_mut().pop_front() {
            return scripted;
        }
        Ok(self.records.borrow().clone())
    }

    fn set_deleted(&self, ruc: &str, deleted: bool) -> Result<()> {
        self.mutations.borrow_mut().push((ruc.to_string(), deleted));
        if let Some((status, message)) = self.mutation_error.borrow().clone() {
            return Err(RucError::server(status, Some(message)));
        }
        for r in self.records.borrow_mut().iter_mut() {
            if r.ruc == ruc {
                r.is_delete = Some(deleted);
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Blocking client helpers
// ---------------------------------------------------------------------------

/// Run `f` against a `RucClient` pointed at `base_url` on the blocking pool.
///
/// The blocking client owns its own runtime and must not be built or
/// dropped inside an async context.
pub async fn with_client<F, T>(base_url: String, f: F) -> T
where
    F: FnOnce(&RucClient) -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let client = RucClient::new(&base_url, None).unwrap();
        f(&client)
    })
    .await
    .unwrap()
}

/// Base URL with the same `/api/ruc` prefix as the production service.
pub fn api_base(server_uri: &str) -> String {
    format!("{server_uri}/api/ruc")
}

/// URL of a local port that was just released, so connections are refused.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn unreachable_operation(err: &RucError) -> Option<Operation> {
    match err {
        RucError::Unreachable { operation, .. } => Some(*operation),
        _ => None,
    }
}
