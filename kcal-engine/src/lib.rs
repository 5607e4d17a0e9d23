pub mod bmi;
pub mod dispatch;
pub mod error;
pub mod formulas;
pub mod units;
pub mod validate;
