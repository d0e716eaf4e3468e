//! The expense ledger: an ordered list of [`ExpenseRecord`]s plus the
//! aggregations the expense views need.
//!
//! The ledger owns its records and writes the whole sequence to its
//! [`KeyValueStore`] after every mutation. Writes are best-effort: a failed
//! write is logged and the in-memory state stays authoritative.
//!
//! The ledger has no locking. Callers sharing it across tasks serialize the
//! mutators themselves.
use core::fmt;

use serde::{Serialize, ser::SerializeMap};

use crate::{
    CategorySet, EngineError, ExpenseRecord, ResultEngine,
    storage::{KeyValueStore, MemoryStore},
};

/// Key the ledger sequence is stored under.
pub const LEDGER_KEY: &str = "expenses";

pub struct ExpenseLedger {
    records: Vec<ExpenseRecord>,
    categories: CategorySet,
    store: Box<dyn KeyValueStore>,
}

impl ExpenseLedger {
    /// Loads the ledger from `store`. A store without the ledger key yields an
    /// empty ledger; malformed content is an error.
    pub fn open(store: impl KeyValueStore + 'static, categories: CategorySet) -> ResultEngine<Self> {
        let records = match store.get(LEDGER_KEY)? {
            Some(raw) => serde_json::from_str::<Vec<ExpenseRecord>>(&raw).map_err(|err| {
                EngineError::Storage(format!("malformed \"{LEDGER_KEY}\" entry: {err}"))
            })?,
            None => Vec::new(),
        };

        let issues = StoredIssues::scan(&records, &categories);
        if issues.unknown_categories > 0 {
            tracing::warn!(
                "{} stored expenses use categories outside the configured set",
                issues.unknown_categories
            );
        }
        if issues.invalid_amounts > 0 {
            tracing::warn!(
                "{} stored expenses have an amount that is not a number greater than 0",
                issues.invalid_amounts
            );
        }
        tracing::debug!("loaded {} expenses", records.len());

        Ok(Self {
            records,
            categories,
            store: Box::new(store),
        })
    }

    /// Empty ledger backed by a private [`MemoryStore`].
    pub fn in_memory(categories: CategorySet) -> Self {
        Self {
            records: Vec::new(),
            categories,
            store: Box::new(MemoryStore::new()),
        }
    }

    /// Validates and appends a new expense.
    ///
    /// The description falls back to the category name when missing or blank.
    pub fn add_expense(
        &mut self,
        category: &str,
        amount: f64,
        description: Option<&str>,
    ) -> ResultEngine<ExpenseRecord> {
        self.categories.ensure_contains(category)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(EngineError::InvalidAmount(format!(
                "expense amount must be a number greater than 0, got {amount}"
            )));
        }

        let description = match description.map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => category.to_string(),
        };

        let record = ExpenseRecord::new(category.to_string(), amount, description);
        self.records.push(record.clone());
        tracing::debug!("added expense {} ({category}, {amount})", record.id);
        self.persist();

        Ok(record)
    }

    /// Removes the expense with `id`. Unknown ids are ignored.
    pub fn remove_expense(&mut self, id: &str) -> Option<ExpenseRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        let record = self.records.remove(index);
        tracing::debug!("removed expense {id}");
        self.persist();
        Some(record)
    }

    /// Sum of every amount, `0` for an empty ledger.
    #[must_use]
    pub fn total_expenses(&self) -> f64 {
        self.records.iter().fold(0.0, |acc, r| acc + r.amount)
    }

    /// Per-category sums. Categories without expenses are left out.
    ///
    /// Entries follow the configured category order; categories found in
    /// storage but no longer configured come last, in first-seen order.
    #[must_use]
    pub fn category_totals(&self) -> CategoryTotals {
        let mut entries: Vec<CategoryTotal> = Vec::new();
        for record in &self.records {
            match entries.iter_mut().find(|e| e.category == record.category) {
                Some(entry) => entry.amount += record.amount,
                None => entries.push(CategoryTotal {
                    category: record.category.clone(),
                    amount: record.amount,
                }),
            }
        }
        entries.sort_by_key(|e| self.categories.position(&e.category).unwrap_or(usize::MAX));
        CategoryTotals { entries }
    }

    #[must_use]
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(&self.records) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!("failed to encode expenses: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(LEDGER_KEY, &payload) {
            tracing::warn!("failed to persist expenses: {err}");
        }
    }
}

/// Records loaded from storage that the ledger itself would have rejected.
#[derive(Debug, Default, PartialEq, Eq)]
struct StoredIssues {
    unknown_categories: usize,
    invalid_amounts: usize,
}

impl StoredIssues {
    fn scan(records: &[ExpenseRecord], categories: &CategorySet) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            if !categories.contains(&r.category) {
                acc.unknown_categories += 1;
            }
            if !r.amount.is_finite() || r.amount <= 0.0 {
                acc.invalid_amounts += 1;
            }
            acc
        })
    }
}

impl fmt::Debug for ExpenseLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpenseLedger")
            .field("records", &self.records)
            .field("categories", &self.categories)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Category → summed amount, derived from the ledger on demand.
///
/// Serializes as a JSON object preserving the entry order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
}

impl CategoryTotals {
    #[must_use]
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.category, &entry.amount)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> ResultEngine<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> ResultEngine<()> {
            Err(EngineError::Storage("disk full".to_string()))
        }
    }

    fn ledger() -> ExpenseLedger {
        ExpenseLedger::in_memory(CategorySet::default())
    }

    #[test]
    fn empty_ledger_totals() {
        let ledger = ledger();
        assert_eq!(ledger.total_expenses(), 0.0);
        assert!(ledger.category_totals().is_empty());
    }

    #[test]
    fn add_rejects_unknown_category_and_bad_amounts() {
        let mut ledger = ledger();
        assert!(matches!(
            ledger.add_expense("Yachts", 10.0, None),
            Err(EngineError::InvalidCategory(_))
        ));
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ledger.add_expense("Food", amount, None),
                Err(EngineError::InvalidAmount(_))
            ));
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn description_defaults_to_category() {
        let mut ledger = ledger();
        let a = ledger.add_expense("Food", 10.0, None).unwrap();
        let b = ledger.add_expense("Food", 10.0, Some("   ")).unwrap();
        let c = ledger.add_expense("Food", 10.0, Some(" Groceries ")).unwrap();
        assert_eq!(a.description, "Food");
        assert_eq!(b.description, "Food");
        assert_eq!(c.description, "Groceries");
    }

    #[test]
    fn totals_group_and_follow_category_order() {
        let mut ledger = ledger();
        ledger.add_expense("Food", 200.0, None).unwrap();
        ledger.add_expense("Housing", 1200.0, Some("Rent")).unwrap();
        ledger.add_expense("Food", 50.5, None).unwrap();

        let totals = ledger.category_totals();
        let order: Vec<_> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(order, vec!["Housing", "Food"]);
        assert_eq!(totals.get("Food"), Some(250.5));
        assert_eq!(totals.get("Debt"), None);
        assert_eq!(ledger.total_expenses(), 1450.5);
        assert_eq!(totals, ledger.category_totals());
    }

    #[test]
    fn totals_serialize_as_object() {
        let mut ledger = ledger();
        ledger.add_expense("Utilities", 80.0, None).unwrap();
        let json = serde_json::to_string(&ledger.category_totals()).unwrap();
        assert_eq!(json, r#"{"Utilities":80.0}"#);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut ledger = ledger();
        ledger.add_expense("Debt", 300.0, None).unwrap();
        assert_eq!(ledger.remove_expense("missing"), None);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn mutations_are_persisted_in_order() {
        let store = MemoryStore::new();
        let mut ledger = ExpenseLedger::open(store.clone(), CategorySet::default()).unwrap();
        let first = ledger.add_expense("Food", 10.0, None).unwrap();
        let second = ledger.add_expense("Debt", 20.0, None).unwrap();

        let saved: Vec<ExpenseRecord> =
            serde_json::from_str(&store.get(LEDGER_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(saved, vec![first.clone(), second.clone()]);

        ledger.remove_expense(&first.id);
        let saved: Vec<ExpenseRecord> =
            serde_json::from_str(&store.get(LEDGER_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(saved, vec![second]);
    }

    #[test]
    fn failed_persistence_does_not_fail_mutation() {
        let mut ledger = ExpenseLedger::open(BrokenStore, CategorySet::default()).unwrap();
        let record = ledger.add_expense("Food", 12.0, None).unwrap();
        assert_eq!(ledger.get(&record.id), Some(&record));
    }

    #[test]
    fn open_rejects_malformed_content() {
        let store = MemoryStore::new().with_value(LEDGER_KEY, "{not json");
        assert!(matches!(
            ExpenseLedger::open(store, CategorySet::default()),
            Err(EngineError::Storage(_))
        ));
    }

    #[test]
    fn stored_records_with_bad_amounts_are_flagged_but_kept() {
        let raw = r#"[
            {"id":"1","category":"Food","amount":0,"description":"Free lunch"},
            {"id":"2","category":"Food","amount":-15.5,"description":"Refund"},
            {"id":"3","category":"Pets","amount":30,"description":"Vet"},
            {"id":"4","category":"Debt","amount":100,"description":"Card"}
        ]"#;
        let store = MemoryStore::new().with_value(LEDGER_KEY, raw);
        let ledger = ExpenseLedger::open(store, CategorySet::default()).unwrap();
        assert_eq!(
            StoredIssues::scan(ledger.records(), ledger.categories()),
            StoredIssues {
                unknown_categories: 1,
                invalid_amounts: 2,
            }
        );
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn unconfigured_stored_categories_come_last() {
        let raw = r#"[
            {"id":"1","category":"Pets","amount":30,"description":"Vet"},
            {"id":"2","category":"Food","amount":20,"description":"Food"}
        ]"#;
        let store = MemoryStore::new().with_value(LEDGER_KEY, raw);
        let ledger = ExpenseLedger::open(store, CategorySet::default()).unwrap();
        let order: Vec<_> = ledger
            .category_totals()
            .iter()
            .map(|t| t.category.clone())
            .collect();
        assert_eq!(order, vec!["Food".to_string(), "Pets".to_string()]);
    }
}
