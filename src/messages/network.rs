//! Network messages - communication between App and Network layers

use crate::models::User;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkCommand {
    /// Fetch `count` random users
    FetchUsers {
        id: u64,
        count: usize,
    },
    /// Cancel a pending fetch
    CancelFetch(u64),
    /// Cancel everything in flight and stop the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkResponse {
    /// Fetch succeeded
    Users {
        id: u64,
        users: Vec<User>,
        time_ms: u64,
    },
    /// Fetch failed (transport, status or decode)
    Failed {
        id: u64,
        message: String,
        time_ms: u64,
    },
    /// Fetch was cancelled before it completed
    Cancelled {
        id: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Users { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
            NetworkResponse::Cancelled { id } => *id,
        }
    }
}
