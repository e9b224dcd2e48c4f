pub mod domain;
pub mod error;
pub mod reader;
pub mod writer;

use std::{io, path::Path};

use chrono::NaiveDate;
use tracing::info;

use domain::{search_filter, totals, IdGenerator, Store};
use reader::{get_content, get_reader};
use writer::{write_records, write_totals};

pub use error::{ExpenseError, Result};

/// Application runner
///
/// Replays the CSV script at `filename` through the form and the store, then
/// writes the records whose title matches `search` followed by the totals of
/// every record.
///
/// ```
/// use chrono::NaiveDate;
/// use expense_tracker::domain::SequentialIds;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let mut out = vec![];
/// expense_tracker::run("tests/expenses.csv".as_ref(), "", &mut SequentialIds::new(), today, &mut out).unwrap();
/// assert!(!out.is_empty());
/// ```
pub fn run<W: io::Write>(
    filename: &Path,
    search: &str,
    ids: &mut dyn IdGenerator,
    today: NaiveDate,
    mut out: W,
) -> Result<()> {
    let mut rdr = get_reader(filename)?;
    let mut store = Store::new();
    get_content(&mut rdr, &mut store, ids, today)?;

    let snapshot = store.snapshot();
    info!(records = snapshot.expenses().len(), "script replayed");

    write_records(&mut out, search_filter(snapshot.expenses(), search))?;
    writeln!(out)?;
    write_totals(&mut out, totals(snapshot.expenses()))?;
    Ok(())
}
