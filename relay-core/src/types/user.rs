//! User identity type for core messages.

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

impl User {
    /// Name shown to reviewers: first name, else `@username`, else the numeric id.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.username) {
            (Some(first), _) if !first.is_empty() => first.clone(),
            (_, Some(username)) => format!("@{}", username),
            _ => self.id.to_string(),
        }
    }
}
