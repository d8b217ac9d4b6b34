use crate::domain::pet::value_objects::PetReference;

#[derive(Debug, Clone)]
pub struct CalculateRationInput {
    pub breed: String,
    pub age_in_months: f64,
    pub weight_kg: Option<f64>,
    /// Use this pet's latest recorded weight when `weight_kg` is not given.
    pub pet: Option<PetReference>,
}
