use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{router, run_with_listener};

mod calculators;
mod expenses;
mod server;

pub mod types {
    pub mod loan {
        pub use api_types::loan::LoanRequest;
        pub use engine::AmortizationSchedule;
    }

    pub mod growth {
        pub use api_types::{investment::InvestmentRequest, retirement::RetirementRequest};
        pub use engine::{InvestmentProjection, RetirementProjection};
    }

    pub mod expense {
        pub use api_types::expense::{
            CategoryAmount, ExpenseList, ExpenseNew, ExpenseTotals, ExpenseView,
        };
    }

    pub mod savings {
        pub use api_types::savings::SavingsRequest;
        pub use engine::SavingsProjection;
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::InvalidCategory(_)
        | EngineError::InvalidAmount(_)
        | EngineError::InvalidParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::Storage(_) | EngineError::Io(_) | EngineError::Json(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    if err.is_validation() {
        return err.to_string();
    }
    tracing::error!("storage error: {err}");
    "internal server error".to_string()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_validation_maps_to_422() {
        for err in [
            EngineError::InvalidCategory("x".to_string()),
            EngineError::InvalidAmount("x".to_string()),
            EngineError::InvalidParameter("x".to_string()),
        ] {
            let res = ServerError::from(err).into_response();
            assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[test]
    fn engine_storage_maps_to_500() {
        let res = ServerError::from(EngineError::Storage("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
