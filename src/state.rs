use crate::config::AppConfig;
use crate::contracts::{ContractBook, ContractRecord};
use crate::errors::{DashboardError, DashboardResult};
use crate::hedging::tracker::{self, Transaction};
use crate::market::Commodity;
use portable_atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

// ── Messages OUT to dashboard clients ──

#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type")]
pub enum WsMessage {
    /// First frame on every connection
    #[serde(rename = "hello")]
    Hello { contracts: Vec<ContractRecord> },

    #[serde(rename = "simulation_run")]
    SimulationRun {
        commodity: Commodity,
        quantity: f64,
        locked_price: f64,
        difference: f64,
        timestamp: String,
    },

    #[serde(rename = "contract_created")]
    ContractCreated {
        contract_id: String,
        commodity: Commodity,
        buyer: String,
        seller: String,
        hash: String,
        timestamp: String,
    },
}

impl WsMessage {
    pub fn contract_created(record: &ContractRecord) -> Self {
        Self::ContractCreated {
            contract_id: record.id.clone(),
            commodity: record.commodity,
            buyer: record.buyer.clone(),
            seller: record.seller.clone(),
            hash: record.hash.clone(),
            timestamp: record.created_at.clone(),
        }
    }
}

// ── Request counters (lock-free) ──

pub struct PerfCounters {
    pub requests_served: AtomicU64,
    pub simulations_run: AtomicU64,
    pub contracts_created: AtomicU64,
    pub validation_errors: AtomicU64,
    pub ws_messages_sent: AtomicU64,
}

impl PerfCounters {
    pub fn new() -> Self {
        Self {
            requests_served: AtomicU64::new(0),
            simulations_run: AtomicU64::new(0),
            contracts_created: AtomicU64::new(0),
            validation_errors: AtomicU64::new(0),
            ws_messages_sent: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for PerfCounters {
    fn default() -> Self {
        Self::new()
    }
}

// ── Application shared state ──

pub struct AppState {
    pub config: AppConfig,

    // Only held for an insert or a clone, never across an await
    pub contracts: RwLock<ContractBook>,

    // Read-only decision history
    pub history: Vec<Transaction>,

    // Server -> Dashboard: event stream (broadcast for WS clients)
    pub ws_tx: broadcast::Sender<WsMessage>,

    pub counters: PerfCounters,
}

impl AppState {
    pub fn new(config: AppConfig) -> Arc<Self> {
        let (ws_tx, _) = broadcast::channel(config.ws_buffer);
        let contracts = RwLock::new(ContractBook::with_history(config.max_contracts));

        Arc::new(Self {
            config,
            contracts,
            history: tracker::transaction_history(),
            ws_tx,
            counters: PerfCounters::new(),
        })
    }

    #[inline]
    pub fn broadcast(&self, msg: WsMessage) {
        PerfCounters::bump(&self.counters.ws_messages_sent);
        // no subscribers is not an error
        let _ = self.ws_tx.send(msg);
    }

    pub fn with_contracts<T>(&self, f: impl FnOnce(&ContractBook) -> T) -> DashboardResult<T> {
        let book = self
            .contracts
            .read()
            .map_err(|e| DashboardError::Internal(format!("contract book lock poisoned: {e}")))?;
        Ok(f(&book))
    }

    pub fn with_contracts_mut<T>(&self, f: impl FnOnce(&mut ContractBook) -> T) -> DashboardResult<T> {
        let mut book = self
            .contracts
            .write()
            .map_err(|e| DashboardError::Internal(format!("contract book lock poisoned: {e}")))?;
        Ok(f(&mut book))
    }
}
