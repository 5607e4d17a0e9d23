use kcal_model::energy::EnergyUnit;

const KG_PER_LB: f64 = 0.453592;
const CM_PER_INCH: f64 = 2.54;
const KJ_PER_KCAL: f64 = 4.1868;
const J_PER_KCAL: f64 = 4186.8;
const J_PER_KJ: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Lbs,
    Kg,
    Inches,
    Cm,
    Cal,
    Kj,
    J,
}

impl From<EnergyUnit> for Unit {
    fn from(unit: EnergyUnit) -> Self {
        match unit {
            // Small calories are scaled to nutritional calories before the
            // tag-based conversion runs.
            EnergyUnit::CalNutritional | EnergyUnit::CalSmall => Unit::Cal,
            EnergyUnit::Kilojoules => Unit::Kj,
            EnergyUnit::Joules => Unit::J,
        }
    }
}

/// Convert `value` between two unit tags. Each inverse pair divides by the
/// same constant the forward direction multiplies by. Unsupported pairs
/// return the value unchanged.
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Lbs, Unit::Kg) => value * KG_PER_LB,
        (Unit::Kg, Unit::Lbs) => value / KG_PER_LB,
        (Unit::Inches, Unit::Cm) => value * CM_PER_INCH,
        (Unit::Cm, Unit::Inches) => value / CM_PER_INCH,
        (Unit::Cal, Unit::Kj) => value * KJ_PER_KCAL,
        (Unit::Kj, Unit::Cal) => value / KJ_PER_KCAL,
        (Unit::Cal, Unit::J) => value * J_PER_KCAL,
        (Unit::J, Unit::Cal) => value / J_PER_KCAL,
        (Unit::Kj, Unit::J) => value * J_PER_KJ,
        (Unit::J, Unit::Kj) => value / J_PER_KJ,
        _ => value,
    }
}

/// Round to the given number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
