use std::sync::Arc;

use super::expense::{ExpenseId, ExpenseRecord};

/// The three transitions the store understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add(ExpenseRecord),
    Remove(ExpenseId),
    Update(ExpenseRecord),
}

/// Ordered list of records at one point in time.
///
/// Transitions borrow the current state and return a new one, so a snapshot
/// never changes after it has been handed out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    expenses: Vec<ExpenseRecord>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn find(&self, id: &ExpenseId) -> Option<&ExpenseRecord> {
        self.expenses.iter().find(|r| r.id() == id)
    }

    /// Appends `record`. Id uniqueness is the caller's job.
    pub fn add(&self, record: ExpenseRecord) -> Self {
        let mut expenses = Vec::with_capacity(self.expenses.len() + 1);
        expenses.extend(self.expenses.iter().cloned());
        expenses.push(record);
        Self { expenses }
    }

    pub fn remove(&self, id: &ExpenseId) -> Self {
        Self {
            expenses: self
                .expenses
                .iter()
                .filter(|r| r.id() != id)
                .cloned()
                .collect(),
        }
    }

    /// Replaces the record sharing `record`'s id, keeping its position.
    pub fn update(&self, record: ExpenseRecord) -> Self {
        Self {
            expenses: self
                .expenses
                .iter()
                .map(|r| {
                    if r.id() == record.id() {
                        record.clone()
                    } else {
                        r.clone()
                    }
                })
                .collect(),
        }
    }

    pub fn reduce(&self, action: &Action) -> Self {
        match action {
            Action::Add(record) => self.add(record.clone()),
            Action::Remove(id) => self.remove(id),
            Action::Update(record) => self.update(record.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Arc<AppState>)>;

/// Owner of the current state.
///
/// Every dispatch swaps in a new snapshot and hands it to the subscribers.
pub struct Store {
    state: Arc<AppState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    pub fn new() -> Self {
        Self {
            state: Arc::new(AppState::new()),
            listeners: vec![],
            next_subscription: 0,
        }
    }

    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        self.state.expenses()
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state = Arc::new(self.state.reduce(&action));

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Arc<AppState>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
