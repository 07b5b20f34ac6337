use super::*;

fn cohort(id: &str, filiere: &str) -> Cohort {
    Cohort {
        id: id.to_owned(),
        nom: format!("Promo {id}"),
        filiere: filiere.to_owned(),
        periode: "2024-2025".to_owned(),
        description: String::new(),
    }
}

#[test]
fn filiere_choices_are_distinct_value_label_pairs() {
    let cohorts = vec![cohort("1", "Informatique"), cohort("2", "Gestion"), cohort("3", "Informatique")];
    assert_eq!(
        filiere_choices(&cohorts),
        vec![
            ("Informatique".to_owned(), "Informatique".to_owned()),
            ("Gestion".to_owned(), "Gestion".to_owned()),
        ]
    );
}

#[test]
fn create_and_edit_use_distinct_wording() {
    let edit = EditorMode::Edit { id: "1".to_owned() };
    assert_eq!(editor_title(Some(&EditorMode::Create)), "Ajouter Promotion");
    assert_eq!(editor_title(Some(&edit)), "Modifier Promotion");
    assert_eq!(submit_label(Some(&EditorMode::Create), false), "Enregistrer");
    assert_eq!(submit_label(Some(&edit), false), "Mettre à jour");
    assert_eq!(submit_label(None, true), "Enregistrement...");
}
