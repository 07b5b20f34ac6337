use super::*;
use crate::net::types::Subject;

fn created(promotion_nom: Option<&str>, formateur: Option<&str>, is_actif: bool) -> TeachingSpace {
    TeachingSpace {
        id: "e-1".to_owned(),
        nom: "Algorithmique Avancée - Groupe A".to_owned(),
        matiere: Some(Subject { id: "m-1".to_owned(), nom: "Informatique".to_owned(), code: "INFO".to_owned(), description: None }),
        promotion: promotion_nom.map(|_| "p-1".to_owned()),
        promotion_nom: promotion_nom.map(str::to_owned),
        formateur_principal: None,
        formateur_principal_nom: formateur.map(str::to_owned),
        description: String::new(),
        is_actif,
        created_at: Some("2024-03-05T14:07:00Z".to_owned()),
        updated_at: None,
        formateurs_count: 0,
        etudiants_count: 0,
    }
}

#[test]
fn unassigned_space_shows_placeholders() {
    let space = created(None, Some(""), false);
    assert_eq!(assigned_cohort(&space), "Aucune promotion assignée");
    assert_eq!(assigned_instructor(&space), "Aucun formateur assigné");
    assert_eq!(status_text(&space), "⏸️ En attente");
}

#[test]
fn assigned_space_shows_names() {
    let space = created(Some("Master 1"), Some("Jean Dupont"), true);
    assert_eq!(assigned_cohort(&space), "Master 1");
    assert_eq!(assigned_instructor(&space), "Jean Dupont");
    assert_eq!(status_text(&space), "✅ Actif et opérationnel");
}

#[test]
fn missing_timestamp_renders_dash() {
    assert_eq!(timestamp_or_dash(None), "-");
    assert_eq!(timestamp_or_dash(Some("pas une date")), "pas une date");
}
