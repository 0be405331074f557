//! Expense ledger - one user's ordered list of expenses
//!
//! The whole list is loaded when the ledger is opened and written back in
//! full after every add or remove. There is no unsaved state: once a
//! mutating call returns `Ok`, storage matches memory.

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::result::{Error, Result};
use crate::domain::{parse_amount, validate_amount, CategoryTotal, Entry, Expense, LedgerSummary};
use crate::ports::LedgerStore;

/// A user's expenses plus the store they persist to
pub struct ExpenseLedger {
    username: String,
    store: Arc<dyn LedgerStore>,
    expenses: Vec<Expense>,
    allowed_categories: Option<Vec<String>>,
}

impl ExpenseLedger {
    /// Load `username`'s ledger from `store`
    ///
    /// A user with nothing stored gets an empty ledger. A stored ledger that
    /// cannot be parsed is returned as `Error::CorruptStore` so it is not
    /// overwritten by the next add.
    pub fn open(username: impl Into<String>, store: Arc<dyn LedgerStore>) -> Result<Self> {
        let username = username.into();
        let expenses = store.load(&username)?.unwrap_or_default();

        Ok(Self {
            username,
            store,
            expenses,
            allowed_categories: None,
        })
    }

    /// Only accept categories from `categories` on add
    pub fn restrict_categories(mut self, categories: Vec<String>) -> Self {
        self.allowed_categories = Some(categories);
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Where this ledger is persisted
    pub fn location(&self) -> String {
        self.store.location(&self.username)
    }

    /// Append an expense stamped with the current time and persist
    pub fn add(&mut self, description: &str, amount: Decimal, category: &str) -> Result<Expense> {
        let amount = validate_amount(amount)?;
        let category = self.check_category(category)?;

        let expense = Expense::new(description, amount, category);
        self.expenses.push(expense.clone());

        if let Err(e) = self.persist() {
            self.expenses.pop();
            return Err(e);
        }

        tracing::info!(
            user = %self.username,
            category = %expense.category,
            amount = %expense.amount,
            records = self.expenses.len(),
            "added expense"
        );
        Ok(expense)
    }

    /// Parse `amount` as typed by the user, then [`add`](Self::add)
    pub fn add_raw(&mut self, description: &str, amount: &str, category: &str) -> Result<Expense> {
        let amount = parse_amount(amount)?;
        self.add(description, amount, category)
    }

    /// Remove the expense at `index` and persist
    ///
    /// An index outside `0..len()` does nothing and returns `Ok(None)`;
    /// storage is not touched.
    pub fn remove(&mut self, index: usize) -> Result<Option<Expense>> {
        if index >= self.expenses.len() {
            tracing::debug!(user = %self.username, index, len = self.expenses.len(), "remove ignored");
            return Ok(None);
        }

        let removed = self.expenses.remove(index);
        if let Err(e) = self.persist() {
            self.expenses.insert(index, removed);
            return Err(e);
        }

        tracing::info!(user = %self.username, index, records = self.expenses.len(), "removed expense");
        Ok(Some(removed))
    }

    /// Distinct categories in use, sorted
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.expenses.iter().map(|e| e.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Sum of every amount; zero for an empty ledger
    ///
    /// Amounts added through the ledger cannot overflow, but a hand-edited
    /// document can hold anything a `Decimal` parses, hence `Error::Overflow`.
    pub fn total(&self) -> Result<Decimal> {
        self.total_for(None)
    }

    /// Sum of amounts, optionally restricted to one category
    pub fn total_for(&self, category: Option<&str>) -> Result<Decimal> {
        sum_amounts(self.matching(category).map(|(_, e)| e.amount))
    }

    /// Expenses in order, optionally only those in `category`
    ///
    /// Each entry keeps its index in the full ledger.
    pub fn list(&self, category: Option<&str>) -> Vec<Entry> {
        self.matching(category)
            .map(|(index, expense)| Entry {
                index,
                expense: expense.clone(),
            })
            .collect()
    }

    /// Totals overall and per category
    pub fn summary(&self) -> Result<LedgerSummary> {
        let mut per_category: BTreeMap<&str, (usize, Decimal)> = BTreeMap::new();
        for expense in &self.expenses {
            let slot = per_category.entry(expense.category.as_str()).or_insert((0, Decimal::ZERO));
            slot.0 += 1;
            slot.1 = sum_amounts([slot.1, expense.amount])?;
        }

        let by_category: Vec<CategoryTotal> = per_category
            .into_iter()
            .map(|(category, (count, total))| CategoryTotal {
                category: category.to_string(),
                count,
                total,
            })
            .collect();

        Ok(LedgerSummary {
            username: self.username.clone(),
            count: self.expenses.len(),
            total: self.total()?,
            categories: by_category.iter().map(|c| c.category.clone()).collect(),
            by_category,
            first_recorded: self.expenses.iter().map(|e| e.timestamp.clone()).min(),
            last_recorded: self.expenses.iter().map(|e| e.timestamp.clone()).max(),
        })
    }

    fn matching<'a>(&'a self, category: Option<&'a str>) -> impl Iterator<Item = (usize, &'a Expense)> + 'a {
        self.expenses
            .iter()
            .enumerate()
            .filter(move |(_, e)| category.map_or(true, |c| e.category == c))
    }

    fn check_category<'c>(&self, category: &'c str) -> Result<&'c str> {
        let category = category.trim();
        if category.is_empty() {
            return Err(Error::validation("category cannot be empty"));
        }
        if let Some(allowed) = &self.allowed_categories {
            if !allowed.iter().any(|c| c == category) {
                return Err(Error::validation(format!(
                    "unknown category '{}' (expected one of: {})",
                    category,
                    allowed.join(", ")
                )));
            }
        }
        Ok(category)
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.username, &self.expenses)
    }
}

fn sum_amounts(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal> {
    amounts.into_iter().try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount)
            .ok_or_else(|| Error::Overflow(format!("{} + {} is out of range", acc, amount)))
    })
}
