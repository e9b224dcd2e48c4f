use chrono::NaiveDate;
use expense_tracker::domain::{
    search_filter, totals, Action, ExpenseForm, ExpenseId, ExpenseRecord, ExpenseType,
    SequentialIds, Store,
};
use rust_decimal_macros::dec;

fn record(id: &str, title: &str, kind: ExpenseType, amount: rust_decimal::Decimal) -> ExpenseRecord {
    ExpenseRecord::new(id, title, "note", "1/1/2024", kind, amount).unwrap()
}

#[test]
fn salary_and_rent() {
    let mut store = Store::new();

    store.dispatch(Action::Add(record("1", "Salary", ExpenseType::Income, dec!(1000))));
    store.dispatch(Action::Add(record("2", "Rent", ExpenseType::Expense, dec!(300))));
    store.dispatch(Action::Update(record("2", "Rent", ExpenseType::Expense, dec!(350))));

    let expenses = store.expenses();
    assert_eq!(expenses.len(), 2);

    let rent = store.snapshot();
    let rent = rent.find(&ExpenseId::from("2")).unwrap();
    assert_eq!(rent.amount(), dec!(350));

    let t = totals(store.expenses());
    assert_eq!((t.income, t.expense), (dec!(1000), dec!(350)));
}

#[test]
fn form_add_then_edit() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let mut store = Store::new();
    let mut ids = SequentialIds::new();
    let mut form = ExpenseForm::new(today);

    form.title = String::from("Coffee");
    form.description = String::from("Corner shop");
    form.select_kind(1);
    form.amount = String::from("4.5");
    let action = form.submit(&mut ids).unwrap().unwrap();
    store.dispatch(action);

    let snapshot = store.snapshot();
    let added = &snapshot.expenses()[0];
    assert_eq!(added.date(), "6/10/2024");

    form.edit(added);
    form.title = String::from("Coffee beans");
    let action = form.submit(&mut ids).unwrap().unwrap();
    store.dispatch(action);

    assert_eq!(store.expenses().len(), 1);
    assert_eq!(store.expenses()[0].title(), "Coffee beans");
    assert_eq!(store.expenses()[0].id(), added.id());
    // the earlier snapshot still shows the old title
    assert_eq!(added.title(), "Coffee");
}

#[test]
fn run_script() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let mut out = vec![];

    expense_tracker::run(
        "tests/expenses.csv".as_ref(),
        "COFFEE",
        &mut SequentialIds::new(),
        today,
        &mut out,
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "id,title,description,date,type,label,amount\n\
         4,Coffee beans,1kg,6/3/2024,expense,Chi tiêu,18\n\
         \n\
         income,expense,balance\n\
         1000,368,632\n"
    );
}

#[test]
fn search_keeps_store_order() {
    let mut store = Store::new();
    for (id, title) in [("1", "Coffee"), ("2", "Rent"), ("3", "Coffee beans")] {
        store.dispatch(Action::Add(record(id, title, ExpenseType::Expense, dec!(1))));
    }

    let hits: Vec<&str> = search_filter(store.expenses(), "coffee")
        .map(|r| r.id().as_str())
        .collect();
    assert_eq!(hits, vec!["1", "3"]);
}
