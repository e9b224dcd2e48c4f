use std::{fs::File, io, path::Path};

use chrono::NaiveDate;
use csv::{Reader, ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{Action, ExpenseForm, ExpenseId, IdGenerator, Store};
use crate::error::{ExpenseError, Result};

/// Date format of the `date` column.
pub const SCRIPT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScriptRow {
    action: String,
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    r#type: Option<String>,
    amount: Option<String>,
}

pub fn get_reader(filename: &Path) -> Result<Reader<File>> {
    Ok(ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_path(filename)?)
}

/// Replays every row of the script against `store`.
///
/// `add` and `update` rows go through a fresh [`ExpenseForm`], so a row with a
/// blank required field is skipped the same way an incomplete form is.
pub fn get_content<R>(
    rdr: &mut Reader<R>,
    store: &mut Store,
    ids: &mut dyn IdGenerator,
    today: NaiveDate,
) -> Result<()>
where
    R: io::Read,
{
    for result in rdr.deserialize() {
        let row: ScriptRow = result?;

        match row.action.to_lowercase().as_str() {
            "add" => {
                let mut form = ExpenseForm::new(today);
                fill_form(&mut form, &row)?;
                submit(&mut form, store, ids)?;
            }
            "update" => {
                let Some(id) = non_empty(&row.id) else {
                    debug!("update row without id, skipped");
                    continue;
                };
                let snapshot = store.snapshot();
                let Some(record) = snapshot.find(&ExpenseId::from(id)) else {
                    warn!(id, "no record to update");
                    continue;
                };

                let mut form = ExpenseForm::new(today);
                form.edit(record);
                fill_form(&mut form, &row)?;
                submit(&mut form, store, ids)?;
            }
            "remove" => match non_empty(&row.id) {
                Some(id) => store.dispatch(Action::Remove(ExpenseId::from(id))),
                None => debug!("remove row without id, skipped"),
            },
            _ => return Err(ExpenseError::UnknownAction(row.action)),
        }
    }
    Ok(())
}

// Only the columns present in the row overwrite the form.
fn fill_form(form: &mut ExpenseForm, row: &ScriptRow) -> Result<()> {
    if let Some(title) = non_empty(&row.title) {
        form.title = title.to_owned();
    }
    if let Some(description) = non_empty(&row.description) {
        form.description = description.to_owned();
    }
    if let Some(date) = non_empty(&row.date) {
        let parsed = NaiveDate::parse_from_str(date, SCRIPT_DATE_FORMAT)
            .map_err(|_| ExpenseError::InvalidDate(date.to_owned()))?;
        form.date = Some(parsed);
    }
    if let Some(kind) = non_empty(&row.r#type) {
        form.kind = kind.parse()?;
    }
    if let Some(amount) = non_empty(&row.amount) {
        form.amount = amount.to_owned();
    }
    Ok(())
}

fn submit(form: &mut ExpenseForm, store: &mut Store, ids: &mut dyn IdGenerator) -> Result<()> {
    match form.submit(ids)? {
        Some(action) => store.dispatch(action),
        None => debug!("incomplete row skipped"),
    }
    Ok(())
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{totals, ExpenseType, SequentialIds};
    use rust_decimal_macros::dec;

    const DATA: &str = "\
action, id, title, description, date, type, amount
add, , Salary, May salary, 2024-05-31, income, 1000
add, , Rent, June rent, 2024-06-01, expense, 300
add, , Coffee, , 2024-06-02, expense, 4
update, 2, , , , , 350
remove, 9";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn replay(data: &str) -> Result<Store> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(data.as_bytes());
        let mut store = Store::new();
        get_content(&mut rdr, &mut store, &mut SequentialIds::new(), today())?;
        Ok(store)
    }

    #[test]
    fn test_get_content_runs() {
        let store = replay(DATA).unwrap();
        let expenses = store.expenses();

        // the coffee row has no description and is skipped
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].title(), "Salary");
        assert_eq!(expenses[0].date(), "5/31/2024");
        assert_eq!(expenses[1].id().as_str(), "2");
        assert_eq!(expenses[1].kind(), ExpenseType::Expense);
        assert_eq!(expenses[1].description(), "June rent");
        assert_eq!(expenses[1].amount(), dec!(350));

        let t = totals(expenses);
        assert_eq!(t.income, dec!(1000));
        assert_eq!(t.expense, dec!(350));
    }

    #[test]
    fn test_add_defaults() {
        let store = replay("action,id,title,description,date,type,amount\nadd,,Gift,Birthday,,,50").unwrap();
        let r = &store.expenses()[0];

        assert_eq!(r.date(), "6/10/2024");
        assert_eq!(r.kind(), ExpenseType::Income);
    }

    #[test]
    fn test_remove_row() {
        let data = format!("{}\n{}", DATA, "remove, 1");
        let store = replay(&data).unwrap();

        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.expenses()[0].title(), "Rent");
    }

    #[test]
    fn test_get_content_bad_amount() {
        let data = format!("{}\n{}", DATA, "add, , Lunch, Noodles, 2024-06-03, expense, ten");
        match replay(&data) {
            Err(ExpenseError::InvalidAmount(raw)) => assert_eq!(raw, "ten"),
            other => panic!("error expected, got {:?}", other.map(|s| s.expenses().len())),
        }
    }

    #[test]
    fn test_get_content_bad_date() {
        let data = format!("{}\n{}", DATA, "add, , Lunch, Noodles, 03/06/2024, expense, 10");
        assert!(matches!(replay(&data), Err(ExpenseError::InvalidDate(_))));
    }

    #[test]
    fn test_get_content_unknown_action() {
        let data = format!("{}\n{}", DATA, "transfer, 1");
        match replay(&data) {
            Err(ExpenseError::UnknownAction(action)) => assert_eq!(action, "transfer"),
            _ => panic!("error expected"),
        }
    }
}
