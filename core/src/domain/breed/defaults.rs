use crate::domain::breed::entities::{
    BreedRecord,
    CoatType::{self, Long, Medium as MediumCoat, Short},
    EnergyLevel::{self, High, Low, Medium as MediumEnergy},
    SizeCategory::{self, Giant, Large, Medium, Small},
};

const CANONICAL: &[(&str, &str, f64, SizeCategory, EnergyLevel, CoatType)] = &[
    ("akita", "Akita", 38.0, Large, MediumEnergy, MediumCoat),
    ("beagle", "Beagle", 12.0, Medium, High, Short),
    ("bernese", "Bernese Mountain Dog", 45.0, Giant, MediumEnergy, Long),
    ("bordercollie", "Border Collie", 18.0, Medium, High, MediumCoat),
    ("boxer", "Boxer", 30.0, Large, High, Short),
    ("bulldog", "English Bulldog", 23.0, Medium, Low, Short),
    ("caramelo", "Caramelo (Mixed Breed)", 15.0, Medium, MediumEnergy, Short),
    ("chihuahua", "Chihuahua", 2.0, Small, MediumEnergy, Short),
    ("cockerspaniel", "Cocker Spaniel", 13.0, Medium, MediumEnergy, Long),
    ("dachshund", "Dachshund", 9.0, Small, MediumEnergy, Short),
    ("doberman", "Doberman", 38.0, Large, High, Short),
    ("frenchbulldog", "French Bulldog", 11.0, Small, Low, Short),
    ("golden", "Golden Retriever", 32.0, Large, High, MediumCoat),
    ("greatdane", "Great Dane", 65.0, Giant, MediumEnergy, Short),
    ("labrador", "Labrador Retriever", 30.0, Large, High, Short),
    ("maltese", "Maltese", 3.0, Small, MediumEnergy, Long),
    ("pastoralemao", "German Shepherd", 35.0, Large, High, MediumCoat),
    ("pinscher", "Pinscher", 4.0, Small, High, Short),
    ("pomeranian", "Pomeranian", 3.0, Small, MediumEnergy, Long),
    ("poodle", "Poodle", 10.0, Medium, MediumEnergy, MediumCoat),
    ("pug", "Pug", 8.0, Small, Low, Short),
    ("rottweiler", "Rottweiler", 45.0, Large, MediumEnergy, Short),
    ("schnauzer", "Schnauzer", 8.0, Small, MediumEnergy, MediumCoat),
    ("shihtzu", "Shih Tzu", 5.0, Small, Low, Long),
    ("siberianhusky", "Siberian Husky", 23.0, Medium, High, MediumCoat),
    ("yorkshire", "Yorkshire Terrier", 3.0, Small, MediumEnergy, Long),
];

/// The canonical breed table. Weights are average adult weights in kilograms.
pub fn canonical_breeds() -> Vec<BreedRecord> {
    CANONICAL
        .iter()
        .map(|&(id, name, weight, size, energy, coat)| {
            BreedRecord::new(id, name, weight).with_traits(size, energy, coat)
        })
        .collect()
}
