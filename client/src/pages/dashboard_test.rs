use super::*;

#[test]
fn subject_summary_empty() {
    assert_eq!(subject_summary(&[]), "No subjects selected yet.");
}

#[test]
fn subject_summary_joins_in_order() {
    let subjects = vec!["Math".to_owned(), "Science".to_owned()];
    assert_eq!(subject_summary(&subjects), "Math, Science");
}
