use serde::Serialize;

use crate::calc;
use crate::error::ValidationError;
use crate::input;

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub score: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_text: String,
    pub passing_only: bool,
}

impl FilterState {
    pub fn matches(&self, student: &Student) -> bool {
        let needle = self.search_text.to_lowercase();
        let name_matches = student.name.to_lowercase().contains(&needle);
        if self.passing_only {
            name_matches && calc::is_passing(i64::from(student.score))
        } else {
            name_matches
        }
    }
}

/// Trimmed, optional sign, ASCII digits only. Whitespace-only counts as absent.
pub fn parse_score(raw: &str) -> Result<u8, ValidationError> {
    let s = input::trim_form(raw);
    if s.is_empty() {
        return Err(ValidationError::EmptyScore);
    }
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidScore);
    }
    // Digit-only strings that overflow i64 are far out of range anyway.
    let value: i64 = s.parse().map_err(|_| ValidationError::InvalidScore)?;
    if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        return Err(ValidationError::InvalidScore);
    }
    u8::try_from(value).map_err(|_| ValidationError::InvalidScore)
}

/// Ordered student list. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Max id + 1, never reusing gaps left by removals of lower ids.
    pub fn next_id(&self) -> u64 {
        self.students.iter().map(|s| s.id).max().map_or(1, |m| m + 1)
    }

    pub fn add(&mut self, name: &str, raw_score: &str) -> Result<Student, ValidationError> {
        let name = input::trim_form(name);
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let score = parse_score(raw_score)?;
        let student = Student {
            id: self.next_id(),
            name: name.to_string(),
            score,
        };
        self.students.push(student.clone());
        Ok(student)
    }

    /// Returns false when no student has `id`.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s.id != id);
        self.students.len() != before
    }

    pub fn filtered<'a>(
        &'a self,
        filter: &'a FilterState,
    ) -> impl Iterator<Item = &'a Student> + 'a {
        self.students.iter().filter(move |s| filter.matches(s))
    }
}
