//! Calculator API endpoints.
//!
//! Every handler maps its request onto the engine parameters and returns the
//! engine result unchanged.

use api_types::{
    investment::InvestmentRequest, loan::LoanRequest, retirement::RetirementRequest,
    savings::SavingsRequest,
};
use axum::{Json, extract::State};
use engine::{
    AmortizationSchedule, InvestmentParameters, InvestmentProjection, LoanParameters,
    RetirementParameters, RetirementProjection, SavingsInputs, SavingsProjection,
};

use crate::{ServerError, server::ServerState};

/// Handle requests for a loan amortization schedule
pub async fn loan(
    Json(payload): Json<LoanRequest>,
) -> Result<Json<AmortizationSchedule>, ServerError> {
    let schedule = engine::compute_schedule(&LoanParameters {
        principal: payload.principal,
        annual_rate_percent: payload.annual_rate_percent,
        term_years: payload.term_years,
    })?;
    Ok(Json(schedule))
}

/// Handle requests for a retirement projection
pub async fn retirement(
    Json(payload): Json<RetirementRequest>,
) -> Result<Json<RetirementProjection>, ServerError> {
    let projection = engine::retirement(&RetirementParameters {
        current_age: payload.current_age,
        retirement_age: payload.retirement_age,
        current_savings: payload.current_savings,
        annual_contribution: payload.annual_contribution,
        expected_return_percent: payload.expected_return_percent,
    })?;
    Ok(Json(projection))
}

/// Handle requests for an investment projection
pub async fn investment(
    Json(payload): Json<InvestmentRequest>,
) -> Result<Json<InvestmentProjection>, ServerError> {
    let projection = engine::investment(&InvestmentParameters {
        initial_investment: payload.initial_investment,
        monthly_contribution: payload.monthly_contribution,
        years: payload.years,
        annual_return_percent: payload.annual_return_percent,
    })?;
    Ok(Json(projection))
}

/// Handle requests for the future savings of the current ledger
pub async fn savings(
    State(state): State<ServerState>,
    Json(payload): Json<SavingsRequest>,
) -> Json<SavingsProjection> {
    let inputs = SavingsInputs {
        monthly_income: payload.monthly_income,
        annual_rate_percent: payload.annual_rate_percent,
        years: payload.years,
    };
    let ledger = state.ledger.read().await;
    Json(engine::savings_projection(&inputs, &ledger))
}
