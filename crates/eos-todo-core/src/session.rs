//! Todo Session
//!
//! Mediates between the local board and the ledger: applies each user
//! action optimistically, pushes it to the contract, then settles it.

use crate::board::{BoardCell, BoardError, PendingMutation, Settlement, TodoBoard};
use crate::config::LedgerConfig;
use crate::delegation::{ensure_delegation, DelegationOutcome};
use crate::domain::{LedgerResult, TodoId};
use crate::ledger::{Authorization, TableQuery, TodoLedger};

/// Why a user action was not sent to the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Board(BoardError),
    /// The board was dropped before the action could be applied
    BoardGone,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Board(err) => write!(f, "{}", err),
            SessionError::BoardGone => write!(f, "Board is no longer available"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Outcome of [`TodoSession::initialize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub delegation: LedgerResult<DelegationOutcome>,
    pub loaded: LedgerResult<usize>,
}

pub struct TodoSession<L, S> {
    ledger: L,
    config: LedgerConfig,
    board: S,
}

impl<L: TodoLedger, S: BoardCell> TodoSession<L, S> {
    pub fn new(ledger: L, config: LedgerConfig, board: S) -> Self {
        Self { ledger, config, board }
    }

    /// Grant code delegation, then load the table. Neither failure stops the other.
    pub async fn initialize(&self) -> InitReport {
        let delegation = ensure_delegation(&self.ledger, &self.config).await;
        if let Err(err) = &delegation {
            tracing::error!(error = %err, "permission upgrade failed");
        }

        let loaded = self.load().await;
        if let Err(err) = &loaded {
            tracing::error!(error = %err, "initial load failed");
        }

        InitReport { delegation, loaded }
    }

    /// Read every row of the todo table and replace the board with it.
    /// A row at the top of the id range ends paging.
    pub async fn load(&self) -> LedgerResult<usize> {
        let base = TableQuery::contract_table(&self.config.contract_name, &self.config.table);
        let mut query = base.clone();
        let mut rows = Vec::new();

        loop {
            let page = self.ledger.get_table_rows(&query).await?;
            let next = page.rows.last().and_then(|row| row.id.checked_add(1));
            rows.extend(page.rows);

            match next {
                Some(next) if page.more => query = base.clone().starting_at(next),
                _ => break,
            }
        }

        let count = rows.len();
        tracing::info!(count, "loaded todos from ledger");
        if self.board.with_board(|board| board.replace_all(rows)).is_none() {
            tracing::debug!("board dropped before rows arrived");
        }
        Ok(count)
    }

    pub async fn create(&self, description: String) -> SessionResult<Settlement> {
        let pending = self
            .board
            .with_board(|board| board.begin_create(description))
            .ok_or(SessionError::BoardGone)??;
        self.submit(pending).await
    }

    pub async fn complete(&self, id: TodoId) -> SessionResult<Settlement> {
        let pending = self
            .board
            .with_board(|board| board.begin_complete(id))
            .ok_or(SessionError::BoardGone)??;
        self.submit(pending).await
    }

    pub async fn destroy(&self, id: TodoId) -> SessionResult<Settlement> {
        let pending = self
            .board
            .with_board(|board| board.begin_destroy(id))
            .ok_or(SessionError::BoardGone)??;
        self.submit(pending).await
    }

    async fn submit(&self, pending: PendingMutation) -> SessionResult<Settlement> {
        let PendingMutation { token, action } = pending;
        let auth = Authorization {
            authorization: self.config.sender_authorization(),
        };

        let outcome = match self.ledger.contract(&self.config.contract_name).await {
            Ok(contract) => action.submit(&contract, &self.config.contract_sender, &auth).await,
            Err(err) => Err(err),
        };
        if let Err(err) = &outcome {
            tracing::warn!(
                action = action.name(),
                id = action.target(),
                error = %err,
                "action failed, reverting"
            );
        }

        let settled = self
            .board
            .with_board(|board| board.settle(token, outcome.clone()))
            .ok_or(SessionError::BoardGone)?;
        Ok(settled.unwrap_or(match outcome {
            Ok(()) => Settlement::Confirmed,
            Err(err) => Settlement::Reverted(err),
        }))
    }
}

impl<L: TodoLedger> TodoSession<L, std::cell::RefCell<TodoBoard>> {
    /// Session over a board owned by the session itself
    pub fn with_local_board(ledger: L, config: LedgerConfig) -> Self {
        Self::new(ledger, config, std::cell::RefCell::new(TodoBoard::new()))
    }

    /// Copy of the current board
    pub fn snapshot(&self) -> TodoBoard {
        self.board.borrow().clone()
    }
}
