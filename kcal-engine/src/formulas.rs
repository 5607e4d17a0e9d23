use kcal_model::biometrics::Gender;

/// Mifflin-St Jeor equation: `10W + 6.25H - 5A`, plus 5 for men and minus
/// 161 otherwise. Returns kcal/day.
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age_years: i32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Other => base - 161.0,
    }
}

/// Revised Harris-Benedict equation. Returns kcal/day.
pub fn harris_benedict(weight_kg: f64, height_cm: f64, age_years: i32, gender: Gender) -> f64 {
    let age = f64::from(age_years);
    match gender {
        Gender::Male => 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age + 88.362,
        Gender::Other => 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age + 447.593,
    }
}

/// Katch-McArdle formula: `370 + 21.6 * lean mass`. Works from body
/// composition alone, so gender and age do not appear.
pub fn katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> f64 {
    let lean_body_mass = weight_kg * (1.0 - body_fat_percent / 100.0);
    370.0 + 21.6 * lean_body_mass
}
