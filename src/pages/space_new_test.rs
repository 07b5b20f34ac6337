use super::*;

#[test]
fn subject_choices_show_code_in_label() {
    let subjects = vec![
        Subject { id: "m1".to_owned(), nom: "Informatique".to_owned(), code: "INFO".to_owned(), description: None },
        Subject { id: "m2".to_owned(), nom: "Physique".to_owned(), code: String::new(), description: None },
    ];
    assert_eq!(
        subject_choices(&subjects),
        vec![("m1".to_owned(), "Informatique (INFO)".to_owned()), ("m2".to_owned(), "Physique".to_owned())]
    );
}

#[test]
fn cohort_choices_use_cohort_id() {
    let cohorts = vec![Cohort {
        id: "p1".to_owned(),
        nom: "Master 1".to_owned(),
        filiere: "Informatique".to_owned(),
        periode: "2024-2025".to_owned(),
        description: String::new(),
    }];
    assert_eq!(cohort_choices(&cohorts), vec![("p1".to_owned(), "Master 1".to_owned())]);
}
