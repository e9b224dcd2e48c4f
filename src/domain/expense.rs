use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{ExpenseError, Result};

/// Shape of the stored date string (`3/7/2024`).
pub const DISPLAY_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Largest accepted amount, in either direction.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_808_348_672, 232_830_643, 0, false, 0);

// Parsing accepts one or two digit day and month, so the display form reads back.
const PARSE_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ExpenseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    #[default]
    Income,
    Expense,
}

impl ExpenseType {
    /// Label shown next to a record in the list, also written in the `label` column.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseType::Income => "Thu nhập",
            ExpenseType::Expense => "Chi tiêu",
        }
    }

    /// Maps a dropdown row to a type: the first row is income, any other is expense.
    pub fn from_index(index: usize) -> Self {
        if index == 0 {
            ExpenseType::Income
        } else {
            ExpenseType::Expense
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseType::Income => f.write_str("income"),
            ExpenseType::Expense => f.write_str("expense"),
        }
    }
}

impl FromStr for ExpenseType {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(ExpenseType::Income),
            "expense" => Ok(ExpenseType::Expense),
            _ => Err(ExpenseError::UnknownType(s.to_owned())),
        }
    }
}

/// A single income or expense entry.
///
/// Records are immutable once built; an update replaces the whole record.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    id: ExpenseId,
    title: String,
    description: String,
    date: String,
    kind: ExpenseType,
    amount: Decimal,
}

impl ExpenseRecord {
    /// Builds a record, rejecting a blank title, description or date.
    ///
    /// ```
    /// use expense_tracker::domain::{ExpenseRecord, ExpenseType};
    /// use rust_decimal_macros::dec;
    ///
    /// let r = ExpenseRecord::new("1", "Salary", "May", "5/31/2024", ExpenseType::Income, dec!(1000));
    /// assert!(r.is_ok());
    /// assert!(ExpenseRecord::new("2", " ", "May", "5/31/2024", ExpenseType::Income, dec!(1)).is_err());
    /// ```
    pub fn new(
        id: impl Into<ExpenseId>,
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        kind: ExpenseType,
        amount: Decimal,
    ) -> Result<Self> {
        let title = title.into();
        let description = description.into();
        let date = date.into();

        if title.trim().is_empty() {
            return Err(ExpenseError::MissingField("title"));
        }
        if description.trim().is_empty() {
            return Err(ExpenseError::MissingField("description"));
        }
        if date.trim().is_empty() {
            return Err(ExpenseError::MissingField("date"));
        }

        Ok(Self {
            id: id.into(),
            title,
            description,
            date,
            kind,
            amount,
        })
    }

    pub fn id(&self) -> &ExpenseId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn kind(&self) -> ExpenseType {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Parses user-entered amount text.
///
/// Anything that is not a plain number, or whose size exceeds [`MAX_AMOUNT`],
/// is rejected.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let amount =
        Decimal::from_str(raw.trim()).map_err(|_| ExpenseError::InvalidAmount(raw.to_owned()))?;
    if amount.abs() > MAX_AMOUNT {
        return Err(ExpenseError::AmountTooLarge(raw.to_owned()));
    }
    Ok(amount)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

pub fn parse_display_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), PARSE_DATE_FORMAT)
        .map_err(|_| ExpenseError::InvalidDate(raw.to_owned()))
}
