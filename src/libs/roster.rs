use crate::libs::core::models::Contact;

/// Avatar fallback: first letter of each word of the display name,
/// uppercased ("Ms. Johnson" -> "MJ").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Sidebar search box: case-insensitive substring match on name and role
/// label, roster order preserved. An empty or all-whitespace query
/// matches everyone.
pub fn search<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return contacts.iter().collect();
    }
    contacts
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&query) || c.role.to_lowercase().contains(&query)
        })
        .collect()
}
