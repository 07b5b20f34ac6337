use super::*;

#[test]
fn editor_title_follows_mode() {
    assert_eq!(editor_title(Some(&EditorMode::Create)), "Nouveau formateur");
    assert_eq!(editor_title(Some(&EditorMode::Edit { id: "1".to_owned() })), "Modifier le formateur");
    assert_eq!(editor_title(None), "Nouveau formateur");
}

#[test]
fn submit_label_reflects_mode_and_progress() {
    assert_eq!(submit_label(Some(&EditorMode::Create), false), "Créer le formateur");
    assert_eq!(submit_label(Some(&EditorMode::Edit { id: "1".to_owned() }), false), "Mettre à jour");
    assert_eq!(submit_label(Some(&EditorMode::Create), true), "Enregistrement...");
}
