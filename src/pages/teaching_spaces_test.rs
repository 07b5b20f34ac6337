use super::*;
use crate::net::types::Subject;

fn space(is_actif: bool) -> TeachingSpace {
    TeachingSpace {
        id: "1".to_owned(),
        nom: "Algorithmique Avancée".to_owned(),
        matiere: Some(Subject { id: "m-1".to_owned(), nom: "Informatique".to_owned(), code: "INFO".to_owned(), description: None }),
        promotion: None,
        promotion_nom: None,
        formateur_principal: None,
        formateur_principal_nom: None,
        description: String::new(),
        is_actif,
        created_at: None,
        updated_at: None,
        formateurs_count: 0,
        etudiants_count: 0,
    }
}

#[test]
fn selector_choices_reuse_value_as_label() {
    let choices = same_value_choices(vec!["Informatique".to_owned(), "Mathématiques".to_owned()]);
    assert_eq!(choices[1], ("Mathématiques".to_owned(), "Mathématiques".to_owned()));
    assert_eq!(choices.len(), 2);
}

#[test]
fn delete_message_names_the_space() {
    assert_eq!(
        delete_message("Bases de données"),
        "Voulez-vous vraiment supprimer l'espace Bases de données ? Cette action est irréversible."
    );
}

#[test]
fn status_reflects_active_flag() {
    assert_eq!(status_label(&space(true)), "Actif");
    assert_eq!(status_label(&space(false)), "Inactif");
}
