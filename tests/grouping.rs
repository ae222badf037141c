// tests/grouping.rs
use std::collections::HashMap;

use band_cards::csv::{parse_rows, rows_to_records};
use band_cards::students::{group_records, ColumnMap, StudentAggregate};

fn group(csv: &str) -> Vec<StudentAggregate> {
    group_records(&rows_to_records(&parse_rows(csv)))
}

fn totals(students: &[StudentAggregate]) -> HashMap<String, f64> {
    students.iter().map(|s| (s.name().to_string(), s.total())).collect()
}

#[test]
fn alice_and_bob() {
    let students = group("Student,Card,Points\nAlice,Scales,10\nBob,Theory,5\nAlice,Rhythm,20\n");
    assert_eq!(students.len(), 2);

    let alice = &students[0];
    assert_eq!(alice.name(), "Alice");
    assert_eq!(alice.total(), 30.0);
    let items: Vec<(&str, f64)> = alice.items().iter().map(|i| (i.card.as_str(), i.points)).collect();
    assert_eq!(items, vec![("Scales", 10.0), ("Rhythm", 20.0)]);

    assert_eq!(students[1].name(), "Bob");
    assert_eq!(students[1].total(), 5.0);
}

#[test]
fn totals_do_not_depend_on_row_order() {
    let header = "Student,Card,Points";
    let rows = [
        "Alice,Scales,10",
        "Bob,Theory,5",
        "Alice,Rhythm,20",
        "Cara,Solo,7.5",
        "Bob,Duet,12",
        "Cara,Ensemble,1",
    ];
    let base = totals(&group(&format!("{header}\n{}", rows.join("\n"))));

    let mut reversed = rows.to_vec();
    reversed.reverse();
    assert_eq!(totals(&group(&format!("{header}\n{}", reversed.join("\n")))), base);

    let mut rotated = rows.to_vec();
    rotated.rotate_left(2);
    assert_eq!(totals(&group(&format!("{header}\n{}", rotated.join("\n")))), base);
}

#[test]
fn item_order_follows_input_order() {
    let students = group("Student,Card,Points\nAlice,B,1\nAlice,A,1\n");
    let cards: Vec<&str> = students[0].items().iter().map(|i| i.card.as_str()).collect();
    assert_eq!(cards, vec!["B", "A"]);
}

#[test]
fn non_numeric_points_count_as_zero() {
    let students = group("Student,Card,Points\nAlice,Scales,abc\nAlice,Rhythm,4\n");
    assert_eq!(students[0].items().len(), 2);
    assert_eq!(students[0].items()[0].points, 0.0);
    assert_eq!(students[0].total(), 4.0);
}

#[test]
fn blank_name_becomes_unnamed() {
    let students = group("Student,Card,Points\n,Scales,3\n  ,Rhythm,2\n");
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name(), "Unnamed");
    assert_eq!(students[0].total(), 5.0);
}

#[test]
fn names_are_case_sensitive() {
    let students = group("Student,Card,Points\nalice,A,1\nAlice,B,1\n");
    assert_eq!(students.len(), 2);
}

#[test]
fn equal_totals_keep_first_appearance_order() {
    let students = group("Student,Card,Points\nZed,A,5\nAmy,B,5\nMax,C,9\n");
    let names: Vec<&str> = students.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["Max", "Zed", "Amy"]);
}

#[test]
fn columns_by_keyword() {
    let cols = ColumnMap::resolve(["timestamp", "points awarded", "student name", "card earned"]);
    assert_eq!(cols.student.as_deref(), Some("student name"));
    assert_eq!(cols.card.as_deref(), Some("card earned"));
    assert_eq!(cols.points.as_deref(), Some("points awarded"));
}

#[test]
fn columns_fall_back_to_position() {
    let cols = ColumnMap::resolve(["who", "what", "how much", "when"]);
    assert_eq!(cols.student.as_deref(), Some("who"));
    assert_eq!(cols.card.as_deref(), Some("what"));
    assert_eq!(cols.points.as_deref(), Some("how much"));
}

#[test]
fn column_lookups_are_independent() {
    // "student card" matches both keywords; both roles read the same column.
    let cols = ColumnMap::resolve(["student card", "x", "y"]);
    assert_eq!(cols.student.as_deref(), Some("student card"));
    assert_eq!(cols.card.as_deref(), Some("student card"));
    assert_eq!(cols.points.as_deref(), Some("y"));
}

#[test]
fn positional_sheet_without_keywords() {
    let students = group("Who,What,Score\nAlice,Scales,3\nAlice,Theory,4\n");
    assert_eq!(students[0].name(), "Alice");
    assert_eq!(students[0].total(), 7.0);
}

#[test]
fn no_records_no_students() {
    assert!(group_records(&[]).is_empty());
}
