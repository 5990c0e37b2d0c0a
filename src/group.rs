//! Command grouper: buckets filtered commands by category for display.

use indexmap::IndexMap;

use crate::catalog::{Category, Command};

/// Category buckets in first-seen order; each bucket keeps input order.
pub fn group_commands<'a, I>(commands: I) -> IndexMap<Category, Vec<&'a Command>>
where
    I: IntoIterator<Item = &'a Command>,
{
    group_by_category(commands, |c| c.category)
}

/// Generic form of [`group_commands`], used by the palette to group indices.
pub fn group_by_category<T, I, F>(items: I, category_of: F) -> IndexMap<Category, Vec<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Category,
{
    let mut groups: IndexMap<Category, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(category_of(&item)).or_default().push(item);
    }
    groups
}
