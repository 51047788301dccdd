use uuid::Uuid;

/// Department row
///
/// # Invariants
/// - `name` is unique
/// - deletion is refused while any employee is assigned
#[derive(Debug, Clone)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}
