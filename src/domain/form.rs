//! Add/edit form in front of the store.
//!
//! The form owns the raw field input. A submit with any required field blank
//! does nothing; otherwise it builds the [`Action`] for the caller to dispatch
//! and resets itself.
use chrono::NaiveDate;
use tracing::{debug, warn};

use super::{
    expense::{format_date, parse_amount, parse_display_date, ExpenseId, ExpenseRecord, ExpenseType},
    id::IdGenerator,
    store::Action,
};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ExpenseForm {
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub kind: ExpenseType,
    pub amount: String,
    editing: Option<ExpenseId>,
    today: NaiveDate,
}

impl ExpenseForm {
    /// Empty form with the date preset to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: Some(today),
            kind: ExpenseType::default(),
            amount: String::new(),
            editing: None,
            today,
        }
    }

    pub fn select_kind(&mut self, index: usize) {
        self.kind = ExpenseType::from_index(index);
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Caption for the submit button of a UI front end.
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Cập nhật"
        } else {
            "Thêm"
        }
    }

    /// Loads `record` into the fields; the next submit updates it.
    pub fn edit(&mut self, record: &ExpenseRecord) {
        self.title = record.title().to_owned();
        self.description = record.description().to_owned();
        self.date = match parse_display_date(record.date()) {
            Ok(date) => Some(date),
            Err(err) => {
                warn!(id = %record.id(), "{err}, date left empty");
                None
            }
        };
        self.kind = record.kind();
        self.amount = record.amount().to_string();
        self.editing = Some(record.id().clone());
    }

    /// Builds the action for the current input.
    ///
    /// Returns `Ok(None)` and leaves the form untouched when a required field
    /// is blank. A non-numeric amount is an error and also leaves the input in
    /// place.
    pub fn submit(&mut self, ids: &mut dyn IdGenerator) -> Result<Option<Action>> {
        let date = match self.date {
            Some(date) if !self.has_blank_field() => date,
            _ => {
                debug!("required field empty, nothing submitted");
                return Ok(None);
            }
        };

        let amount = parse_amount(&self.amount)?;

        let action = match self.editing.clone() {
            Some(id) => Action::Update(ExpenseRecord::new(
                id,
                self.title.as_str(),
                self.description.as_str(),
                format_date(date),
                self.kind,
                amount,
            )?),
            None => Action::Add(ExpenseRecord::new(
                ids.next_id(),
                self.title.as_str(),
                self.description.as_str(),
                format_date(date),
                self.kind,
                amount,
            )?),
        };

        self.reset();
        Ok(Some(action))
    }

    fn has_blank_field(&self) -> bool {
        self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.amount.trim().is_empty()
    }

    fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.date = Some(self.today);
        self.kind = ExpenseType::default();
        self.amount.clear();
        self.editing = None;
    }
}
