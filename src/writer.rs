use std::io;

use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{ExpenseRecord, ExpenseType, Totals};
use crate::error::Result;

const RECORD_HEADERS: [&str; 7] = [
    "id",
    "title",
    "description",
    "date",
    "type",
    "label",
    "amount",
];

#[derive(Debug, Serialize)]
struct ExpenseRow<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    date: &'a str,
    r#type: ExpenseType,
    label: &'static str,
    amount: Decimal,
}

#[derive(Debug, Serialize)]
struct TotalsRow {
    income: Decimal,
    expense: Decimal,
    balance: Decimal,
}

/// Writes the header line followed by one line per record, even when there are none.
pub fn write_records<'a, W, I>(out: W, records: I) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(out);
    wtr.write_record(RECORD_HEADERS)?;

    for r in records {
        wtr.serialize(ExpenseRow {
            id: r.id().as_str(),
            title: r.title(),
            description: r.description(),
            date: r.date(),
            r#type: r.kind(),
            label: r.kind().label(),
            amount: r.amount(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_totals<W: io::Write>(out: W, t: Totals) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(out);
    wtr.serialize(TotalsRow {
        income: t.income,
        expense: t.expense,
        balance: t.balance(),
    })?;
    wtr.flush()?;
    Ok(())
}
