//! Global search across students and staff.
//!
//! Results are a tagged variant rather than a free-form bag of fields: each
//! hit knows which entity it came from and projects a common label, detail,
//! and navigation route for the presentation layer.

use crate::models::{SchoolData, Staff, Student};
use crate::queries;
use chrono::{Datelike, NaiveDate};

/// Hits are capped at this many entries, students first.
pub const MAX_RESULTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchHit {
    Student { id: i64, label: String, detail: String },
    Staff { id: i64, label: String, detail: String },
}

impl SearchHit {
    pub fn label(&self) -> &str {
        match self {
            SearchHit::Student { label, .. } | SearchHit::Staff { label, .. } => label,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            SearchHit::Student { detail, .. } | SearchHit::Staff { detail, .. } => detail,
        }
    }

    pub fn target_route(&self) -> &'static str {
        match self {
            SearchHit::Student { .. } => "/students",
            SearchHit::Staff { .. } => "/staff",
        }
    }
}

/// Age as a calendar-year difference; `None` when the date of birth does not
/// parse.
fn age_in_years(d_birth: &str, today: NaiveDate) -> Option<i32> {
    let birth = NaiveDate::parse_from_str(d_birth, "%Y-%m-%d").ok()?;
    Some(today.year() - birth.year())
}

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// Field checks other than age, which global_search anchors to its caller's
// date.
fn student_matches(data: &SchoolData, student: &Student, term: &str, needle: &str) -> bool {
    matches(&student.name, needle)
        || student.email.as_deref().is_some_and(|e| matches(e, needle))
        || student
            .phone
            .is_some_and(|p| p.to_string().contains(term))
        || address_line(data, student.id).is_some_and(|a| matches(&a, needle))
        || guardian_line(data, student.id).is_some_and(|g| matches(&g, needle))
}

fn address_line(data: &SchoolData, student_id: i64) -> Option<String> {
    queries::address_for_student(data, student_id).map(|a| format!("{}, {}", a.city, a.state))
}

fn guardian_line(data: &SchoolData, student_id: i64) -> Option<String> {
    queries::guardian_for_student(data, student_id)
        .map(|g| format!("{} ({})", g.name, g.relation))
}

fn staff_matches(data: &SchoolData, staff: &Staff, term: &str, needle: &str) -> bool {
    matches(&staff.name, needle)
        || staff.email.as_deref().is_some_and(|e| matches(e, needle))
        || staff.phone.is_some_and(|p| p.to_string().contains(term))
        || queries::role_for_staff(data, staff).is_some_and(|r| matches(&r.title, needle))
}

/// Substring search over students (name, email, phone, age, address,
/// guardian) and staff (name, email, phone, role title). A blank term yields
/// nothing. `today` anchors the age computation.
pub fn global_search(data: &SchoolData, term: &str, today: NaiveDate) -> Vec<SearchHit> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    let mut hits = Vec::new();

    for student in &data.students {
        let age = age_in_years(&student.d_birth, today);
        let age_matches = age.is_some_and(|a| a.to_string().contains(term));
        if age_matches || student_matches(data, student, term, &needle) {
            let email = student.email.as_deref().unwrap_or("-");
            let age_text = age.map_or_else(|| "-".to_string(), |a| a.to_string());
            hits.push(SearchHit::Student {
                id: student.id,
                label: student.name.clone(),
                detail: format!("{email} - Age: {age_text}"),
            });
            if hits.len() == MAX_RESULTS {
                return hits;
            }
        }
    }

    for staff in &data.staff {
        if staff_matches(data, staff, term, &needle) {
            let email = staff.email.as_deref().unwrap_or("-");
            let role = queries::role_for_staff(data, staff)
                .map_or("N/A", |r| r.title.as_str());
            hits.push(SearchHit::Staff {
                id: staff.id,
                label: staff.name.clone(),
                detail: format!("{email} - {role}"),
            });
            if hits.len() == MAX_RESULTS {
                return hits;
            }
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_data;
    use crate::models::{Gender, Student};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
    }

    #[test]
    fn blank_terms_yield_nothing() {
        let data = sample_data();
        assert!(global_search(&data, "", today()).is_empty());
        assert!(global_search(&data, "   ", today()).is_empty());
    }

    #[test]
    fn name_search_spans_students_and_staff() {
        let data = sample_data();
        let hits = global_search(&data, "john", today());
        // "john" matches the student John Doe and staff Mrs. Johnson,
        // students first.
        assert_eq!(hits.len(), 2);
        assert!(matches!(hits[0], SearchHit::Student { id: 1, .. }));
        assert!(matches!(hits[1], SearchHit::Staff { id: 1, .. }));
        assert_eq!(hits[0].target_route(), "/students");
        assert_eq!(hits[1].target_route(), "/staff");
    }

    #[test]
    fn age_matches_against_the_anchor_date() {
        let data = sample_data();
        // Jane Smith, born 2011, is 14 in 2025.
        let hits = global_search(&data, "14", today());
        assert_eq!(hits.len(), 1);
        assert!(matches!(hits[0], SearchHit::Student { id: 2, .. }));
        assert_eq!(hits[0].detail(), "jane.smith@email.com - Age: 14");
    }

    #[test]
    fn guardian_and_address_strings_are_searchable() {
        let data = sample_data();
        let by_guardian = global_search(&data, "father", today());
        assert!(matches!(by_guardian[0], SearchHit::Student { id: 1, .. }));

        let by_city = global_search(&data, "new york", today());
        assert!(matches!(by_city[0], SearchHit::Student { id: 1, .. }));
    }

    #[test]
    fn staff_match_by_role_title() {
        let data = sample_data();
        let hits = global_search(&data, "teacher", today());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label(), "Mrs. Johnson");
    }

    #[test]
    fn results_are_capped() {
        let mut data = sample_data();
        data.students = (1..=15)
            .map(|id| Student {
                id,
                name: format!("Sam Common {id}"),
                d_birth: "2012-01-01".into(),
                gender: Gender::Other,
                phone: None,
                join_date: "2024-01-01".into(),
                email: None,
                class_id: 1,
                sub_class_id: 1,
            })
            .collect();
        let hits = global_search(&data, "common", today());
        assert_eq!(hits.len(), MAX_RESULTS);
    }
}
