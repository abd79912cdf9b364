/// Connection state for the page and its transitions
use std::rc::Rc;

use uuid::Uuid;
use yew::Reducible;

use crate::bookmark::{BookmarkRecord, sample_bookmarks};

/// How long the simulated connect takes
pub const CONNECT_DELAY_MS: i32 = 1500;

/// Identifies one connect attempt; a completion only lands while its ticket is pending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectTicket(String);

impl ConnectTicket {
    pub fn new() -> Self {
        ConnectTicket(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ConnectTicket {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub connected: bool,
    pub loading: bool,
    pub bookmarks: Vec<BookmarkRecord>,
    pub pending: Option<ConnectTicket>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_connect(&self, ticket: ConnectTicket) -> SessionState {
        if self.loading || self.connected {
            return self.clone();
        }

        SessionState {
            loading: true,
            pending: Some(ticket),
            ..self.clone()
        }
    }

    pub fn complete_connect(&self, ticket: &ConnectTicket, bookmarks: Vec<BookmarkRecord>) -> SessionState {
        if self.pending.as_ref() != Some(ticket) {
            return self.clone();
        }

        SessionState {
            connected: true,
            loading: false,
            bookmarks,
            pending: None,
        }
    }

    /// Drops the bookmarks and cancels any connect still in flight
    pub fn disconnect(&self) -> SessionState {
        SessionState::default()
    }

    pub fn is_pending(&self, ticket: &ConnectTicket) -> bool {
        self.pending.as_ref() == Some(ticket)
    }
}

pub enum SessionAction {
    BeginConnect(ConnectTicket),
    CompleteConnect(ConnectTicket),
    Disconnect,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SessionAction::BeginConnect(ticket) => {
                if self.loading || self.connected {
                    log::debug!("Connect already in progress, ignoring");
                    return self;
                }
                log::info!("Connecting (ticket {})", ticket.as_str());
                self.begin_connect(ticket)
            }
            SessionAction::CompleteConnect(ticket) => {
                if !self.is_pending(&ticket) {
                    log::info!("Ignoring stale connect completion (ticket {})", ticket.as_str());
                    return self;
                }
                let next = self.complete_connect(&ticket, sample_bookmarks());
                log::info!("Connected with {} bookmarks", next.bookmarks.len());
                next
            }
            SessionAction::Disconnect => {
                log::info!("Disconnected");
                self.disconnect()
            }
        };

        Rc::new(next)
    }
}
