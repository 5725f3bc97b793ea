/// Names of the synthetic candidates, in generation order.
pub const CANDIDATE_NAMES: &[&str] = &[
    "Camille Durand",
    "Lucas Martin",
    "Léa Bernard",
    "Hugo Petit",
    "Chloé Robert",
    "Nathan Richard",
    "Manon Moreau",
    "Louis Simon",
    "Inès Laurent",
    "Gabriel Lefebvre",
    "Sarah Michel",
    "Jules Garcia",
    "Emma David",
    "Arthur Bertrand",
    "Jade Roux",
    "Raphaël Vincent",
    "Louise Fournier",
    "Adam Morel",
    "Alice Girard",
    "Tom Andre",
];
