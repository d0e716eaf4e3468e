use axum::{
    Router,
    routing::{delete, get, post},
};
use tokio::sync::RwLock;

use std::sync::Arc;

use crate::{calculators, expenses};
use engine::ExpenseLedger;

/// Shared handler state.
///
/// The ledger has a single writer at a time: mutating handlers take the write
/// lock, the others the read lock.
#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<RwLock<ExpenseLedger>>,
}

pub fn router(ledger: ExpenseLedger) -> Router {
    let state = ServerState {
        ledger: Arc::new(RwLock::new(ledger)),
    };

    Router::new()
        .route("/loan", post(calculators::loan))
        .route("/retirement", post(calculators::retirement))
        .route("/investment", post(calculators::investment))
        .route("/savings", post(calculators::savings))
        .route("/expenses", get(expenses::list).post(expenses::add))
        .route("/expenses/totals", get(expenses::totals))
        .route("/expenses/{id}", delete(expenses::remove))
        .route("/categories", get(expenses::categories))
        .with_state(state)
}

pub async fn run_with_listener(
    ledger: ExpenseLedger,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ledger)).await
}
