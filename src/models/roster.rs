//! Roster entities: teachers, subjects, and classes.
//!
//! These are the caller-side inputs that assignment building draws from.
//! The solver itself never sees them; it works on the flattened
//! [`Assignment`](super::Assignment) demand units.

use serde::{Deserialize, Serialize};

/// Subject classification. Drives room requirements and default weekly load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubjectType {
    Theory,
    Lab,
}

impl SubjectType {
    /// Default weekly period count for a subject of this type.
    pub fn default_periods_per_week(self) -> u32 {
        match self {
            SubjectType::Lab => 2,
            SubjectType::Theory => 4,
        }
    }
}

/// A teacher available for assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning department, if any.
    pub department_id: Option<String>,
}

impl Teacher {
    /// Creates a teacher.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department_id: None,
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }
}

/// A subject taught to classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short code, e.g. "PHY".
    pub code: Option<String>,
    /// Theory or lab.
    pub subject_type: SubjectType,
    /// Owning department, if any.
    pub department_id: Option<String>,
}

impl Subject {
    /// Creates a theory subject.
    pub fn theory(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, SubjectType::Theory)
    }

    /// Creates a lab subject.
    pub fn lab(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, SubjectType::Lab)
    }

    /// Creates a subject of the given type.
    pub fn new(id: impl Into<String>, name: impl Into<String>, subject_type: SubjectType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: None,
            subject_type,
            department_id: None,
        }
    }

    /// Sets the short code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }
}

/// A class (student group) to be scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolClass {
    /// Unique class identifier.
    pub id: String,
    /// Display name, e.g. "Grade 10".
    pub name: String,
    /// Section, e.g. "A".
    pub section: String,
    /// Owning department, if any.
    pub department_id: Option<String>,
}

impl SchoolClass {
    /// Creates a class.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            section: section.into(),
            department_id: None,
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }
}

/// The full set of roster entities in scope for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// All teachers of the organization.
    pub teachers: Vec<Teacher>,
    /// All subjects of the organization.
    pub subjects: Vec<Subject>,
    /// Classes to schedule.
    pub classes: Vec<SchoolClass>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a class.
    pub fn with_class(mut self, class: SchoolClass) -> Self {
        self.classes.push(class);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weekly_load() {
        assert_eq!(SubjectType::Lab.default_periods_per_week(), 2);
        assert_eq!(SubjectType::Theory.default_periods_per_week(), 4);
    }

    #[test]
    fn test_subject_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&SubjectType::Lab).unwrap(),
            "\"LAB\""
        );
        assert_eq!(
            serde_json::to_string(&SubjectType::Theory).unwrap(),
            "\"THEORY\""
        );
    }

    #[test]
    fn test_roster_builder() {
        let roster = Roster::new()
            .with_teacher(Teacher::new("t1", "Ada").with_department("sci"))
            .with_subject(Subject::lab("s1", "Chemistry Lab").with_code("CHM"))
            .with_class(SchoolClass::new("c1", "Grade 10", "A"));

        assert_eq!(roster.teachers.len(), 1);
        assert_eq!(roster.teachers[0].department_id.as_deref(), Some("sci"));
        assert_eq!(roster.subjects[0].subject_type, SubjectType::Lab);
        assert_eq!(roster.classes[0].section, "A");
    }
}
