use crate::model::student::Student;

/// Which students the roster screen lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterScope<'a> {
    All,
    /// Only students registered by this admin.
    RegisteredBy(&'a str),
}

/// Case-insensitive match on name, or a substring of the roll number.
pub fn filter_students<'a>(
    students: &'a [Student],
    query: &str,
    scope: RosterScope<'_>,
) -> Vec<&'a Student> {
    let query = query.trim().to_lowercase();

    students
        .iter()
        .filter(|s| match scope {
            RosterScope::All => true,
            RosterScope::RegisteredBy(admin) => s.registrar_id.as_deref() == Some(admin),
        })
        .filter(|s| {
            query.is_empty()
                || s.name.to_lowercase().contains(&query)
                || s.roll_id.to_string().contains(&query)
        })
        .collect()
}
