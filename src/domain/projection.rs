use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::expense::{ExpenseRecord, ExpenseType};

/// Records whose title contains `query`, ignoring case, in input order.
///
/// An empty query yields every record.
///
/// ```
/// use expense_tracker::domain::{search_filter, ExpenseRecord, ExpenseType};
/// use rust_decimal_macros::dec;
///
/// let records = vec![
///     ExpenseRecord::new("1", "Coffee", "x", "1/1/2024", ExpenseType::Expense, dec!(3)).unwrap(),
///     ExpenseRecord::new("2", "Rent", "x", "1/1/2024", ExpenseType::Expense, dec!(300)).unwrap(),
/// ];
/// let hits: Vec<_> = search_filter(&records, "COF").collect();
/// assert_eq!(hits.len(), 1);
/// ```
pub fn search_filter<'a>(
    records: &'a [ExpenseRecord],
    query: &str,
) -> impl Iterator<Item = &'a ExpenseRecord> + 'a {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(move |r| r.title().to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl Totals {
    /// `income - expense`, clamped to the `Decimal` range.
    pub fn balance(&self) -> Decimal {
        self.income.checked_sub(self.expense).unwrap_or(if self.expense.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
    }
}

// Amounts are capped when parsed, but records built directly can hold anything.
fn saturating_add(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or(if amount.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Sums income and expense amounts over `records`, in sequence order.
///
/// Callers pass the full list, not a search result, so the totals do not move
/// while the user filters.
pub fn totals(records: &[ExpenseRecord]) -> Totals {
    let mut t = Totals {
        income: dec!(0),
        expense: dec!(0),
    };

    for r in records.iter() {
        match r.kind() {
            ExpenseType::Income => t.income = saturating_add(t.income, r.amount()),
            ExpenseType::Expense => t.expense = saturating_add(t.expense, r.amount()),
        }
    }
    t
}
