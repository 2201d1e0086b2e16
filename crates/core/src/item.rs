use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Value object: a laboratory supply item (reagent or disposable).
///
/// Immutable after construction and compared **by value**: two items with the
/// same attributes are the same item for every consumer in this workspace.
/// Any "update" produces a new instance (see [`InventoryItem::with_quantity`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryItem {
    name: String,
    quantity: u32,
    exam_type: String,
    expiry: NaiveDate,
}

impl InventoryItem {
    /// Build a validated item.
    ///
    /// Rejects blank names and blank exam types; `quantity` is non-negative
    /// by type.
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        exam_type: impl Into<String>,
        expiry: NaiveDate,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let exam_type = exam_type.into();
        if exam_type.trim().is_empty() {
            return Err(DomainError::validation("exam type cannot be empty"));
        }
        Ok(Self {
            name,
            quantity,
            exam_type,
            expiry,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn exam_type(&self) -> &str {
        &self.exam_type
    }

    pub fn expiry(&self) -> NaiveDate {
        self.expiry
    }

    /// Case-folded name, the key used for name search and name ordering.
    ///
    /// Unicode lowercase fold, locale-independent.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Return a new item with the given quantity; `self` is untouched.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}
