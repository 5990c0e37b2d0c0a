//! Palette state: current query, filtered commands and the selection.

use indexmap::IndexMap;
use tracing::debug;

use crate::catalog::{Catalog, Category, Command};
use crate::filter::{filter_indices_cancellable, FilterGeneration};
use crate::group::group_by_category;
use crate::matching::Matcher;

#[derive(Clone, Debug, Default)]
pub struct PaletteState {
    pub visible: bool,
    pub query: String,
    /// Indices into the catalog that match `query`, in catalog order.
    pub filtered: Vec<usize>,
    /// `filtered` bucketed by category, as displayed.
    pub groups: IndexMap<Category, Vec<usize>>,
    /// Catalog indices in display order; `selected_index` points into this.
    pub rows: Vec<usize>,
    pub selected_index: usize,
    pub generation: FilterGeneration,
}

impl PaletteState {
    pub fn selected_command<'a>(&self, catalog: &'a Catalog) -> Option<&'a Command> {
        self.rows
            .get(self.selected_index)
            .and_then(|&i| catalog.commands().get(i))
    }

    pub fn select_previous(&mut self) {
        if !self.rows.is_empty() {
            let len = self.rows.len();
            self.selected_index = (self.selected_index + len - 1) % len;
        }
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            let len = self.rows.len();
            self.selected_index = (self.selected_index + 1) % len;
        }
    }
}

/// Re-run the filter for `palette.query` and reset the selection.
pub fn update_palette_filter(palette: &mut PaletteState, catalog: &Catalog, matcher: &Matcher) {
    palette.generation.advance();
    let ticket = palette.generation.ticket();

    let Some(filtered) =
        filter_indices_cancellable(&palette.query, catalog.commands(), matcher, &ticket)
    else {
        debug!(generation = ticket.generation(), "filter superseded");
        return;
    };

    let commands = catalog.commands();
    palette.groups = group_by_category(filtered.iter().copied(), |&i| commands[i].category);
    palette.rows = palette.groups.values().flatten().copied().collect();
    palette.filtered = filtered;
    palette.selected_index = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette_for(query: &str, catalog: &Catalog) -> PaletteState {
        let mut palette = PaletteState { query: query.to_string(), ..Default::default() };
        update_palette_filter(&mut palette, catalog, &Matcher::default());
        palette
    }

    #[test]
    fn rows_follow_group_order() {
        let catalog = Catalog::builtin();
        // "settings" hits the Settings page (Pages) and every *Settings command.
        let palette = palette_for("settings", &catalog);
        let first_group = *palette.groups.keys().next().unwrap();
        let first = palette.selected_command(&catalog).unwrap();
        assert_eq!(first.category, first_group);

        let flattened: Vec<usize> = palette.groups.values().flatten().copied().collect();
        assert_eq!(palette.rows, flattened);

        let mut sorted = palette.rows.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, palette.filtered);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let catalog = Catalog::builtin();
        let mut palette = palette_for("", &catalog);
        let last = palette.rows.len() - 1;

        palette.select_previous();
        assert_eq!(palette.selected_index, last);
        palette.select_next();
        assert_eq!(palette.selected_index, 0);
    }

    #[test]
    fn empty_result_has_no_selection() {
        let catalog = Catalog::builtin();
        let mut palette = palette_for("qqqqqqqq", &catalog);
        assert!(palette.rows.is_empty());
        palette.select_next();
        assert_eq!(palette.selected_index, 0);
        assert!(palette.selected_command(&catalog).is_none());
    }

    #[test]
    fn requery_resets_selection_and_advances_generation() {
        let catalog = Catalog::builtin();
        let mut palette = palette_for("", &catalog);
        palette.select_next();
        palette.select_next();
        let before = palette.generation.current();

        palette.query = "speed".into();
        update_palette_filter(&mut palette, &catalog, &Matcher::default());
        assert_eq!(palette.selected_index, 0);
        assert_eq!(palette.generation.current(), before + 1);
    }
}
