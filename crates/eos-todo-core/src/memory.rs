//! In-Memory Ledger
//!
//! Scripted `TodoLedger` used by the session tests. Records every call,
//! can fail chosen operations and can hold actions until the test releases
//! them, to control the order in which responses arrive.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::domain::{Account, LedgerError, LedgerResult, TodoId, TodoItem};
use crate::ledger::{
    Authorization, PermissionUpdate, TableQuery, TableRows, TodoContract, TodoLedger,
};

/// A contract action as it reached the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedAction {
    pub name: &'static str,
    pub sender: String,
    pub id: TodoId,
    pub authorization: Vec<String>,
}

/// An action held back until the test answers it
pub struct HeldAction {
    pub action: RecordedAction,
    reply: oneshot::Sender<LedgerResult<()>>,
}

impl HeldAction {
    pub fn resolve(self, outcome: LedgerResult<()>) {
        let _ = self.reply.send(outcome);
    }
}

#[derive(Default)]
struct MemoryState {
    accounts: Vec<Account>,
    rows: Vec<TodoItem>,
    page_size: Option<usize>,
    queries: Vec<TableQuery>,
    updates: Vec<PermissionUpdate>,
    actions: Vec<RecordedAction>,
    failing: HashSet<&'static str>,
    hold_actions: bool,
    held: Vec<HeldAction>,
}

#[derive(Clone, Default)]
pub struct MemoryLedger {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, account: Account) -> Self {
        self.state.borrow_mut().accounts.push(account);
        self
    }

    pub fn with_rows(self, rows: Vec<TodoItem>) -> Self {
        self.state.borrow_mut().rows = rows;
        self
    }

    /// Serve table reads in pages of `size` rows
    pub fn with_page_size(self, size: usize) -> Self {
        self.state.borrow_mut().page_size = Some(size);
        self
    }

    /// Make an operation fail: `get_account`, `update_permission`,
    /// `get_table_rows`, `contract` or an action name
    pub fn failing(self, operation: &'static str) -> Self {
        self.state.borrow_mut().failing.insert(operation);
        self
    }

    /// Hold every contract action until released through [`MemoryLedger::take_held`]
    pub fn holding_actions(self) -> Self {
        self.state.borrow_mut().hold_actions = true;
        self
    }

    pub fn queries(&self) -> Vec<TableQuery> {
        self.state.borrow().queries.clone()
    }

    pub fn updates(&self) -> Vec<PermissionUpdate> {
        self.state.borrow().updates.clone()
    }

    pub fn actions(&self) -> Vec<RecordedAction> {
        self.state.borrow().actions.clone()
    }

    pub fn held_count(&self) -> usize {
        self.state.borrow().held.len()
    }

    pub fn take_held(&self) -> Vec<HeldAction> {
        std::mem::take(&mut self.state.borrow_mut().held)
    }

    fn check(&self, operation: &'static str) -> LedgerResult<()> {
        if self.state.borrow().failing.contains(operation) {
            return Err(LedgerError::Remote(format!("{} rejected", operation)));
        }
        Ok(())
    }

    async fn act(
        &self,
        name: &'static str,
        sender: &str,
        id: TodoId,
        auth: &Authorization,
    ) -> LedgerResult<()> {
        let action = RecordedAction {
            name,
            sender: sender.to_string(),
            id,
            authorization: auth.authorization.clone(),
        };
        let receiver = {
            let mut state = self.state.borrow_mut();
            state.actions.push(action.clone());
            if !state.hold_actions {
                None
            } else {
                let (reply, receiver) = oneshot::channel();
                state.held.push(HeldAction { action, reply });
                Some(receiver)
            }
        };

        match receiver {
            Some(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(LedgerError::Remote("held action dropped".to_string()))),
            None => self.check(name),
        }
    }
}

#[async_trait(?Send)]
impl TodoContract for MemoryLedger {
    async fn create(
        &self,
        sender: &str,
        id: TodoId,
        description: &str,
        auth: &Authorization,
    ) -> LedgerResult<()> {
        self.act("create", sender, id, auth).await?;
        self.state.borrow_mut().rows.push(TodoItem::new(id, description));
        Ok(())
    }

    async fn complete(&self, sender: &str, id: TodoId, auth: &Authorization) -> LedgerResult<()> {
        self.act("complete", sender, id, auth).await?;
        if let Some(row) = self.state.borrow_mut().rows.iter_mut().find(|r| r.id == id) {
            row.completed = true;
        }
        Ok(())
    }

    async fn destroy(&self, sender: &str, id: TodoId, auth: &Authorization) -> LedgerResult<()> {
        self.act("destroy", sender, id, auth).await?;
        self.state.borrow_mut().rows.retain(|r| r.id != id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl TodoLedger for MemoryLedger {
    type Contract = MemoryLedger;

    async fn get_account(&self, name: &str) -> LedgerResult<Account> {
        self.check("get_account")?;
        self.state
            .borrow()
            .accounts
            .iter()
            .find(|a| a.account_name == name)
            .cloned()
            .ok_or_else(|| LedgerError::Remote(format!("unknown account {}", name)))
    }

    async fn update_permission(&self, update: &PermissionUpdate) -> LedgerResult<()> {
        self.check("update_permission")?;
        let mut state = self.state.borrow_mut();
        state.updates.push(update.clone());
        let permission = state
            .accounts
            .iter_mut()
            .filter(|a| a.account_name == update.account)
            .flat_map(|a| a.permissions.iter_mut())
            .find(|p| p.perm_name == update.permission);
        if let Some(permission) = permission {
            permission.required_auth = update.auth.clone();
        }
        Ok(())
    }

    async fn get_table_rows(&self, query: &TableQuery) -> LedgerResult<TableRows> {
        self.check("get_table_rows")?;
        let mut state = self.state.borrow_mut();
        state.queries.push(query.clone());

        let lower: TodoId = match &query.lower_bound {
            Some(bound) => bound
                .parse()
                .map_err(|_| LedgerError::Remote(format!("bad lower bound {}", bound)))?,
            None => 0,
        };
        let mut matching: Vec<TodoItem> =
            state.rows.iter().filter(|r| r.id >= lower).cloned().collect();
        matching.sort_by_key(|r| r.id);

        let more = matches!(state.page_size, Some(size) if matching.len() > size);
        if let Some(size) = state.page_size {
            matching.truncate(size);
        }
        Ok(TableRows { rows: matching, more })
    }

    async fn contract(&self, name: &str) -> LedgerResult<Self::Contract> {
        self.check("contract")?;
        tracing::debug!(contract = name, "resolved memory contract");
        Ok(self.clone())
    }
}
