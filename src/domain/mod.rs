pub mod expense;
pub mod form;
pub mod id;
pub mod projection;
pub mod store;

pub use expense::{ExpenseId, ExpenseRecord, ExpenseType};
pub use form::ExpenseForm;
pub use id::{IdGenerator, SequentialIds, TimestampIds, UuidIds};
pub use projection::{search_filter, totals, Totals};
pub use store::{Action, AppState, Store, SubscriptionId};
