// src/students.rs
//
// Grouping: mapped records → one aggregate per student, sorted by total.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::consts::UNNAMED_STUDENT;
use crate::csv::Record;

/// One achievement attributed to a student.
#[derive(Clone, Debug, PartialEq)]
pub struct AchievementItem {
    pub card: String,
    pub points: f64,
}

/// All achievements of one student, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentAggregate {
    name: String,
    items: Vec<AchievementItem>,
}

impl StudentAggregate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), items: Vec::new() }
    }

    pub fn with_items(name: impl Into<String>, items: Vec<AchievementItem>) -> Self {
        Self { name: name.into(), items }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[AchievementItem] {
        &self.items
    }

    pub fn push(&mut self, item: AchievementItem) {
        self.items.push(item);
    }

    /// Sum of item points. Always derived from the items.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.points).sum()
    }

    pub fn card_count(&self) -> usize {
        self.items.len()
    }
}

/// Which record keys hold the student name, card label and points.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub student: Option<String>,
    pub card: Option<String>,
    pub points: Option<String>,
}

impl ColumnMap {
    /// Pick columns by keyword, falling back to position.
    ///
    /// student: first key containing "student", else key 0.
    /// card:    first key containing "card",    else key 1.
    /// points:  first key containing "point",   else key 2.
    ///
    /// The positional fallback is a known quirk: a sheet whose headers match
    /// none of the keywords is read purely by column order, and the three
    /// lookups are independent, so one column may serve two roles.
    pub fn resolve<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keys: Vec<&str> = keys.into_iter().collect();
        let pick = |needle: &str, fallback: usize| {
            keys.iter()
                .find(|k| k.contains(needle))
                .or_else(|| keys.get(fallback))
                .map(|k| s!(*k))
        };
        Self {
            student: pick("student", 0),
            card: pick("card", 1),
            points: pick("point", 2),
        }
    }

    fn value<'r>(rec: &'r Record, key: &Option<String>) -> &'r str {
        key.as_deref().and_then(|k| rec.get(k)).unwrap_or("")
    }

    pub fn student_of<'r>(&self, rec: &'r Record) -> &'r str {
        match Self::value(rec, &self.student) {
            "" => UNNAMED_STUDENT,
            name => name,
        }
    }

    pub fn card_of<'r>(&self, rec: &'r Record) -> &'r str {
        Self::value(rec, &self.card)
    }

    pub fn points_of(&self, rec: &Record) -> f64 {
        parse_points(Self::value(rec, &self.points))
    }
}

/// Best-effort number parse: blank, non-numeric, NaN or infinite → 0.
///
/// Decimal notation only (`12`, `2.5`, `1e3`). Radix-prefixed forms such as
/// `0x1A` or `0b101`, which a browser `Number()` would accept, read as 0.
pub fn parse_points(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Group records by exact student name.
///
/// Columns are resolved from the first record's keys. Output is ordered by
/// total, descending; equal totals keep first-appearance order.
pub fn group_records(records: &[Record]) -> Vec<StudentAggregate> {
    let Some(first) = records.first() else {
        return Vec::new();
    };
    let cols = ColumnMap::resolve(first.keys());
    logd!(
        "Group: columns student={:?} card={:?} points={:?}",
        cols.student, cols.card, cols.points
    );

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut students: Vec<StudentAggregate> = Vec::new();

    for rec in records {
        let name = cols.student_of(rec);
        let item = AchievementItem {
            card: s!(cols.card_of(rec)),
            points: cols.points_of(rec),
        };
        let ix = *index.entry(s!(name)).or_insert_with(|| {
            students.push(StudentAggregate::new(name));
            students.len() - 1
        });
        students[ix].push(item);
    }

    sort_by_total_desc(&mut students);
    students
}

/// Stable sort, highest total first.
pub fn sort_by_total_desc(students: &mut [StudentAggregate]) {
    students.sort_by(|a, b| {
        b.total().partial_cmp(&a.total()).unwrap_or(Ordering::Equal)
    });
}
