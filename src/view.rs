// src/view.rs
//
// Display list: the filtered and sorted projection of the loaded students.
// Pure functions only; nothing here mutates the canonical list.

use std::cmp::Ordering;
use std::fmt;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::students::StudentAggregate;

/// Sort selector values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Highest total first.
    #[default]
    Points,
    /// Alphabetical by name.
    Name,
    /// Most cards first.
    Cards,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Points, SortMode::Name, SortMode::Cards];

    /// Selector value → mode. Anything unrecognised sorts by points.
    pub fn parse(value: &str) -> Self {
        match value {
            "name" => SortMode::Name,
            "cards" => SortMode::Cards,
            _ => SortMode::Points,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Points => "points",
            SortMode::Name => "name",
            SortMode::Cards => "cards",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Points => "Points (high → low)",
            SortMode::Name => "Name (A → Z)",
            SortMode::Cards => "Cards (most first)",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero-copy projection of the canonical student list.
#[derive(Clone, Debug)]
pub struct StudentView<'a> {
    /// Positions of shown students in `all`, in display order.
    pub ix: Vec<usize>,
    all: &'a [StudentAggregate],
}

impl<'a> StudentView<'a> {
    pub fn len(&self) -> usize {
        self.ix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ix.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a StudentAggregate> + '_ {
        let all = self.all;
        self.ix.iter().map(move |&i| &all[i])
    }

    pub fn get(&self, pos: usize) -> Option<&'a StudentAggregate> {
        let all = self.all;
        self.ix.get(pos).map(|&i| &all[i])
    }

    /// Materialize owned students (for export boundaries and tests).
    pub fn to_owned_students(&self) -> Vec<StudentAggregate> {
        self.iter().cloned().collect()
    }
}

/// Filter `all` by a case-insensitive name substring, then sort.
///
/// Every sort is stable, so ties keep their order in `all`. Calling this
/// on its own output with the same arguments yields the same list.
pub fn display_list<'a>(all: &'a [StudentAggregate], search: &str, sort: SortMode) -> StudentView<'a> {
    let needle = search.to_lowercase();
    let mut ix: Vec<usize> = all
        .iter()
        .enumerate()
        .filter(|(_, s)| needle.is_empty() || s.name().to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect();

    match sort {
        SortMode::Points => ix.sort_by(|&a, &b| {
            all[b].total().partial_cmp(&all[a].total()).unwrap_or(Ordering::Equal)
        }),
        SortMode::Name => ix.sort_by(|&a, &b| locale_cmp(all[a].name(), all[b].name())),
        SortMode::Cards => ix.sort_by(|&a, &b| all[b].card_count().cmp(&all[a].card_count())),
    }

    StudentView { ix, all }
}

/// Human alphabetical order, close to a browser `localeCompare`:
/// 1. base letters, case-insensitive, with diacritics folded away
///    (`é` sorts next to `e`, not after `z`);
/// 2. unaccented before accented;
/// 3. lower-case before upper-case at the first differing letter;
/// 4. plain code-point order so the comparison stays total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| case_cmp(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|&c| !is_combining_mark(c)).flat_map(char::to_lowercase)
}

fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_cmp(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_order_ignores_case_first() {
        assert_eq!(locale_cmp("alice", "Bob"), Ordering::Less);
        assert_eq!(locale_cmp("Bob", "alice"), Ordering::Greater);
        assert_eq!(locale_cmp("amy", "Amy"), Ordering::Less);
        assert_eq!(locale_cmp("Amy", "Amy"), Ordering::Equal);
    }

    #[test]
    fn accents_sort_beside_their_base_letter() {
        assert_eq!(locale_cmp("Émile", "Zoe"), Ordering::Less);
        assert_eq!(locale_cmp("Émile", "Eve"), Ordering::Less);
        assert_eq!(locale_cmp("Chloe", "Chloé"), Ordering::Less);
        assert_eq!(locale_cmp("chloé", "Chloe"), Ordering::Greater);
        // Precomposed and decomposed spellings only differ in code points.
        assert_ne!(locale_cmp("Chlo\u{e9}", "Chloe\u{301}"), Ordering::Equal);
    }

    #[test]
    fn unknown_sort_value_falls_back_to_points() {
        assert_eq!(SortMode::parse("name"), SortMode::Name);
        assert_eq!(SortMode::parse("cards"), SortMode::Cards);
        assert_eq!(SortMode::parse("points"), SortMode::Points);
        assert_eq!(SortMode::parse("shoe size"), SortMode::Points);
        assert_eq!(SortMode::parse(""), SortMode::Points);
    }
}
