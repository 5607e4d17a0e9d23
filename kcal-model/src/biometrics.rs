use serde::Serialize;
use strum::EnumString;

/// Biometric measurements for a single request, normalized to metric.
#[derive(Debug, Clone, PartialEq)]
pub struct BiometricInput {
    pub age_years: i32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub body_fat_percent: Option<f64>,
}

/// Gender as used by the gendered BMR equations. Anything that is not
/// "male" takes the female coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Other,
}

impl Gender {
    pub fn from_raw(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Us,
    Metric,
}

impl UnitSystem {
    /// A missing field and the literal "us" select US units, any other
    /// value selects metric.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None | Some("us") => UnitSystem::Us,
            Some(_) => UnitSystem::Metric,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ActivityLevel {
    Bmr,
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Bmr => 1.0,
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
            ActivityLevel::ExtraActive => 2.2,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Bmr => "Basal Metabolic Rate (BMR)",
            ActivityLevel::Sedentary => "Sedentary: little or no exercise",
            ActivityLevel::Light => "Light: exercise 1-3 times/week",
            ActivityLevel::Moderate => "Moderate: exercise 4-5 times/week",
            ActivityLevel::Active => {
                "Active: daily exercise or intense exercise 3-4 times/week"
            }
            ActivityLevel::VeryActive => "Very Active: intense exercise 6-7 times/week",
            ActivityLevel::ExtraActive => {
                "Extra Active: very intense exercise daily, or physical job"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum BmrFormula {
    MifflinStJeor,
    HarrisBenedict,
    KatchMcardle,
}

impl BmrFormula {
    pub fn display_name(self) -> &'static str {
        match self {
            BmrFormula::MifflinStJeor => "Mifflin St Jeor",
            BmrFormula::HarrisBenedict => "Harris Benedict",
            BmrFormula::KatchMcardle => "Katch Mcardle",
        }
    }
}
