//! Board Context
//!
//! Shared board state provided via Leptos Context API, plus the session
//! that pushes user actions to the ledger.

use std::future::Future;
use std::rc::Rc;

use eos_todo_core::{
    BoardCell, LedgerConfig, SessionResult, Settlement, TodoBoard, TodoId, TodoSession,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::ledger::ScatterLedger;
use crate::wallet;

/// Board held in a signal so every mutation re-renders the list
#[derive(Clone, Copy)]
pub struct BoardSignal(pub RwSignal<TodoBoard>);

impl BoardCell for BoardSignal {
    fn with_board<R>(&self, f: impl FnOnce(&mut TodoBoard) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

pub type BoardSession = TodoSession<ScatterLedger, BoardSignal>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletStatus {
    Waiting,
    Connected,
    Failed(String),
}

impl WalletStatus {
    pub fn label(&self) -> String {
        match self {
            WalletStatus::Waiting => "Waiting for Scatter...".to_string(),
            WalletStatus::Connected => String::new(),
            WalletStatus::Failed(msg) => format!("Wallet unavailable: {}", msg),
        }
    }
}

/// Board-wide signals provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub board: RwSignal<TodoBoard>,
    pub wallet: RwSignal<WalletStatus>,
    /// Set once the wallet hands out a client
    session: StoredValue<Option<Rc<BoardSession>>, LocalStorage>,
}

impl BoardContext {
    pub fn new() -> Self {
        Self {
            board: RwSignal::new(TodoBoard::new()),
            wallet: RwSignal::new(WalletStatus::Waiting),
            session: StoredValue::new_local(None),
        }
    }

    /// Wait for the wallet, build the session, upgrade permissions and load
    pub fn connect(&self) {
        let ctx = *self;
        spawn_local(async move {
            let config = LedgerConfig::default();
            let ledger = match wallet::acquire_scatter()
                .await
                .and_then(|scatter| ScatterLedger::connect(&scatter, &config))
            {
                Ok(ledger) => ledger,
                Err(err) => {
                    tracing::error!(error = %err, "could not connect to wallet");
                    ctx.wallet.set(WalletStatus::Failed(err.to_string()));
                    return;
                }
            };

            let session = Rc::new(TodoSession::new(ledger, config, BoardSignal(ctx.board)));
            ctx.session.set_value(Some(session.clone()));
            ctx.wallet.set(WalletStatus::Connected);

            let report = session.initialize().await;
            tracing::debug!(?report, "session initialized");
        });
    }

    pub fn create(&self, description: String) {
        self.spawn_action("create", move |session| async move {
            session.create(description).await
        });
    }

    pub fn complete(&self, id: TodoId) {
        self.spawn_action("complete", move |session| async move { session.complete(id).await });
    }

    pub fn destroy(&self, id: TodoId) {
        self.spawn_action("destroy", move |session| async move { session.destroy(id).await });
    }

    fn spawn_action<F, Fut>(&self, name: &'static str, action: F)
    where
        F: FnOnce(Rc<BoardSession>) -> Fut,
        Fut: Future<Output = SessionResult<Settlement>> + 'static,
    {
        let Some(session) = self.session.get_value() else {
            tracing::warn!(action = name, "wallet not connected yet, ignoring");
            return;
        };
        let pending = action(session);
        spawn_local(async move {
            match pending.await {
                Ok(Settlement::Confirmed) => tracing::debug!(action = name, "confirmed"),
                Ok(Settlement::Reverted(err)) => {
                    tracing::warn!(action = name, error = %err, "reverted")
                }
                Err(err) => tracing::warn!(action = name, error = %err, "not sent"),
            }
        });
    }
}

impl Default for BoardContext {
    fn default() -> Self {
        Self::new()
    }
}
