//! Expense ledger API endpoints

use api_types::expense::{CategoryAmount, ExpenseList, ExpenseNew, ExpenseTotals, ExpenseView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::ExpenseRecord;

use crate::{ServerError, server::ServerState};

fn view(record: &ExpenseRecord) -> ExpenseView {
    ExpenseView {
        id: record.id.clone(),
        category: record.category.clone(),
        amount: record.amount,
        description: record.description.clone(),
    }
}

pub async fn list(State(state): State<ServerState>) -> Json<ExpenseList> {
    let ledger = state.ledger.read().await;
    Json(ExpenseList {
        expenses: ledger.records().iter().map(view).collect(),
        total: ledger.total_expenses(),
    })
}

pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    if payload.category.trim().is_empty() {
        return Err(ServerError::Generic("category required".to_string()));
    }

    let mut ledger = state.ledger.write().await;
    let record = ledger.add_expense(
        &payload.category,
        payload.amount,
        payload.description.as_deref(),
    )?;
    Ok((StatusCode::CREATED, Json(view(&record))))
}

/// Removing an unknown id succeeds as well.
pub async fn remove(State(state): State<ServerState>, Path(id): Path<String>) -> StatusCode {
    let mut ledger = state.ledger.write().await;
    if ledger.remove_expense(&id).is_none() {
        tracing::debug!("expense {id} not found, nothing removed");
    }
    StatusCode::NO_CONTENT
}

pub async fn totals(State(state): State<ServerState>) -> Json<ExpenseTotals> {
    let ledger = state.ledger.read().await;
    Json(ExpenseTotals {
        categories: ledger
            .category_totals()
            .iter()
            .map(|t| CategoryAmount {
                category: t.category.clone(),
                amount: t.amount,
            })
            .collect(),
        total: ledger.total_expenses(),
    })
}

pub async fn categories(State(state): State<ServerState>) -> Json<Vec<String>> {
    let ledger = state.ledger.read().await;
    Json(ledger.categories().iter().map(str::to_string).collect())
}
