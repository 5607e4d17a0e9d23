use std::collections::HashMap;

use actix_web::{post, web, HttpResponse, Responder};
use log::error;
use serde::Serialize;

use kcal_engine::dispatch::Calculator;
use kcal_engine::error::CalculationError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Calculation failed. Please check your inputs.";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[post("/calculate")]
pub async fn calculate(
    calculator: web::Data<dyn Calculator>,
    form: web::Form<HashMap<String, String>>,
) -> impl Responder {
    let kind = form
        .get("calc_type")
        .map(String::as_str)
        .unwrap_or("calorie");

    match calculator.calculate(kind, &form) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(CalculationError::Validation(message)) => {
            HttpResponse::BadRequest().json(ErrorBody { error: message })
        }
        Err(error @ CalculationError::Internal(_)) => {
            error!("Calculation error: {}", error);
            HttpResponse::BadRequest().json(ErrorBody {
                error: INTERNAL_ERROR_MESSAGE.to_string(),
            })
        }
    }
}
