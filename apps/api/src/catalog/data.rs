//! Fixed reference table of positions.

use crate::models::position::Position;

/// (department, title, initially open)
const CATALOG: &[(&str, &str, bool)] = &[
    ("Réseau Commercial", "Conseiller(e) Clientèle", true),
    ("Réseau Commercial", "Directeur(rice) d'Agence", true),
    ("Réseau Commercial", "Chargé(e) d'Affaires Professionnels", true),
    ("Réseau Commercial", "Conseiller(e) Patrimonial(e)", true),
    ("Réseau Commercial", "Guichetier(ère)", false),
    ("Réseau Commercial", "Assistant(e) Commercial(e)", false),
    ("Réseau Commercial", "Responsable de Secteur", true),
    ("Réseau Commercial", "Conseiller(e) Entreprises", true),
    ("Ressources Humaines", "Chargé(e) de Recrutement", true),
    ("Ressources Humaines", "Gestionnaire Paie", false),
    ("Ressources Humaines", "Responsable Formation", true),
    ("Ressources Humaines", "Chargé(e) de Mobilité Interne", true),
    ("Ressources Humaines", "Juriste Droit Social", true),
    ("Ressources Humaines", "Assistant(e) RH", false),
    ("Ressources Humaines", "HR Business Partner", true),
    ("Finance", "Contrôleur(se) de Gestion", true),
    ("Finance", "Comptable", false),
    ("Finance", "Analyste Financier", true),
    ("Finance", "Trésorier(ère)", true),
    ("Finance", "Responsable Consolidation", true),
    ("Finance", "Auditeur(rice) Interne", true),
    ("Finance", "Gestionnaire Comptabilité Fournisseurs", false),
    ("Informatique", "Développeur(se) Back-End", true),
    ("Informatique", "Développeur(se) Front-End", true),
    ("Informatique", "Administrateur(rice) Systèmes", false),
    ("Informatique", "Chef(fe) de Projet IT", true),
    ("Informatique", "Data Analyst", true),
    ("Informatique", "Architecte Cloud", true),
    ("Informatique", "Technicien(ne) Support", false),
    ("Informatique", "Ingénieur(e) Sécurité", true),
    ("Risques & Conformité", "Analyste Risques Crédit", true),
    ("Risques & Conformité", "Chargé(e) de Conformité", true),
    ("Risques & Conformité", "Responsable LCB-FT", true),
    ("Risques & Conformité", "Contrôleur(se) Permanent", false),
    ("Risques & Conformité", "Analyste Fraude", true),
    ("Risques & Conformité", "Gestionnaire Contentieux", false),
    ("Risques & Conformité", "Risk Manager", true),
    ("Marketing", "Chef(fe) de Produit", true),
    ("Marketing", "Chargé(e) de Communication", true),
    ("Marketing", "Community Manager", false),
    ("Marketing", "Responsable CRM", true),
    ("Marketing", "Chargé(e) d'Études", true),
    ("Marketing", "Graphiste", false),
    ("Opérations", "Gestionnaire Back-Office", false),
    ("Opérations", "Responsable Qualité", true),
    ("Opérations", "Chargé(e) de Projet Organisation", true),
    ("Opérations", "Gestionnaire Crédits", true),
    ("Opérations", "Coordinateur(rice) Logistique", false),
    ("Opérations", "Responsable Moyens Généraux", true),
    ("Opérations", "Analyste Processus", false),
];

/// Loads the reference catalog with derived statuses.
pub fn load_catalog() -> Vec<Position> {
    CATALOG
        .iter()
        .map(|(department, title, open)| Position::new(department, title, *open))
        .collect()
}

pub fn open_titles(catalog: &[Position]) -> Vec<&str> {
    catalog
        .iter()
        .filter(|p| p.is_open())
        .map(|p| p.title.as_str())
        .collect()
}

pub fn occupied_titles(catalog: &[Position]) -> Vec<&str> {
    catalog
        .iter()
        .filter(|p| !p.is_open())
        .map(|p| p.title.as_str())
        .collect()
}

/// Distinct departments in first-appearance order.
pub fn departments(catalog: &[Position]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for position in catalog {
        if !seen.contains(&position.department.as_str()) {
            seen.push(&position.department);
        }
    }
    seen
}

pub fn find_position<'a>(catalog: &'a [Position], title: &str) -> Option<&'a Position> {
    catalog.iter().find(|p| p.title == title)
}
