use crate::errors::{DashboardError, DashboardResult};
use crate::form::{FormNumber, RequiredFields};
use crate::market::Commodity;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::VecDeque;

/// Length of the hex body of a simulated contract reference.
const REFERENCE_HEX_LEN: usize = 26;

/// Raw contract form as submitted by the dashboard.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDraft {
    pub buyer: Option<String>,
    pub seller: Option<String>,
    pub commodity: Option<String>,
    pub quantity: Option<FormNumber>,
    pub price: Option<FormNumber>,
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub id: String,
    pub buyer: String,
    pub seller: String,
    pub commodity: Commodity,
    /// Quintals
    pub quantity: f64,
    /// Agreed ₹/quintal
    pub price: f64,
    pub expiry_date: NaiveDate,
    /// Random display reference. Not derived from the contract terms and
    /// not written to any ledger.
    pub hash: String,
    pub simulated: bool,
    pub status: ContractStatus,
    pub created_at: String,
}

/// `0x` + 26 lowercase hex chars from a fresh v4 UUID.
pub fn simulated_reference() -> String {
    let hex = uuid::Uuid::new_v4().simple().to_string();
    format!("0x{}", &hex[..REFERENCE_HEX_LEN])
}

impl ContractDraft {
    /// Validate the form and build an active record stamped at `now`.
    pub fn into_record(&self, now: DateTime<Utc>) -> DashboardResult<ContractRecord> {
        let commodity = match self.commodity.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.parse::<Commodity>()?,
            _ => Commodity::default(),
        };

        let mut fields = RequiredFields::new("missing fields");
        let buyer = fields.text("buyer", self.buyer.as_deref());
        let seller = fields.text("seller", self.seller.as_deref());
        let quantity = fields.number("quantity", self.quantity.as_ref())?;
        let price = fields.number("price", self.price.as_ref())?;
        let expiry_raw = fields.text("expiryDate", self.expiry_date.as_deref());
        fields.finish()?;

        let expiry_date = NaiveDate::parse_from_str(&expiry_raw, "%Y-%m-%d").map_err(|_| {
            DashboardError::Validation(format!("expiryDate must be YYYY-MM-DD, got {expiry_raw}"))
        })?;

        Ok(ContractRecord {
            id: uuid::Uuid::new_v4().to_string(),
            buyer,
            seller,
            commodity,
            quantity,
            price,
            expiry_date,
            hash: simulated_reference(),
            simulated: true,
            status: ContractStatus::Active,
            created_at: now.to_rfc3339(),
        })
    }
}

/// In-memory contract store. Bounded; the oldest created record is
/// evicted once `capacity` is reached. Lost on restart.
///
/// Archived contracts are read-only history. They appear in `history()` but
/// not in `list()`, so the contracts page starts empty.
#[derive(Debug, Clone)]
pub struct ContractBook {
    // oldest at front
    records: VecDeque<ContractRecord>,
    // newest first
    archive: Vec<ContractRecord>,
    capacity: usize,
}

impl ContractBook {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity.min(64)),
            archive: Vec::new(),
            capacity,
        }
    }

    /// Book with the two past contracts shown on the history page archived.
    pub fn with_history(capacity: usize) -> Self {
        let mut book = Self::new(capacity);
        book.archive = seeded_contracts();
        book
    }

    pub fn create(&mut self, draft: &ContractDraft, now: DateTime<Utc>) -> DashboardResult<ContractRecord> {
        let record = draft.into_record(now)?;
        self.insert(record.clone());
        Ok(record)
    }

    pub fn insert(&mut self, record: ContractRecord) {
        if self.records.len() >= self.capacity {
            if let Some(evicted) = self.records.pop_front() {
                tracing::debug!(contract_id = %evicted.id, "contract book full, evicting oldest");
            }
        }
        self.records.push_back(record);
    }

    /// Contracts created since startup, newest first.
    pub fn list(&self) -> Vec<ContractRecord> {
        self.records.iter().rev().cloned().collect()
    }

    /// Created contracts newest first, then the archive.
    pub fn history(&self) -> Vec<ContractRecord> {
        self.records.iter().rev().chain(self.archive.iter()).cloned().collect()
    }
}

fn seeded_contracts() -> Vec<ContractRecord> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        ContractRecord {
            id: "seed-1".into(),
            buyer: "AgriCorp Ltd".into(),
            seller: "Green Valley FPO".into(),
            commodity: Commodity::Mustard,
            quantity: 200.0,
            price: 5650.0,
            expiry_date: date(2025, 3, 31),
            hash: "0x3b7c0e5d9a21f4680c6e2b1a8f".into(),
            simulated: true,
            status: ContractStatus::Active,
            created_at: "2025-02-01T00:00:00+00:00".into(),
        },
        ContractRecord {
            id: "seed-2".into(),
            buyer: "FoodTech Industries".into(),
            seller: "Sunrise FPO".into(),
            commodity: Commodity::Soybean,
            quantity: 300.0,
            price: 4280.0,
            expiry_date: date(2025, 2, 28),
            hash: "0x9d4e1f7a2c60b83e5a19f0c4d7".into(),
            simulated: true,
            status: ContractStatus::Completed,
            created_at: "2025-01-29T00:00:00+00:00".into(),
        },
    ]
}
