//! Global state container and action dispatch.

use tracing::{info, warn};

use crate::actions::Action;
use crate::catalog::{Catalog, Command};
use crate::dispatch::{dispatch, CommandDispatcher};
use crate::matching::Matcher;
use crate::palette::update_palette_filter;
use crate::state::{ActivityEntry, AppState};

const PAGE: usize = 10;

/// Owns the palette surface. The catalog, the matcher and the dispatcher are
/// all supplied by the caller.
pub struct App<D: CommandDispatcher> {
    pub state: AppState,
    catalog: Catalog,
    matcher: Matcher,
    dispatcher: D,
    pub should_quit: bool,
}

impl<D: CommandDispatcher> App<D> {
    pub fn new(catalog: Catalog, matcher: Matcher, dispatcher: D) -> Self {
        Self {
            state: AppState::default(),
            catalog,
            matcher,
            dispatcher,
            should_quit: false,
        }
    }

    pub fn bootstrap(&mut self) {
        self.state.activity.push(ActivityEntry::info(format!(
            "Site Kit command palette: {} commands. Press Ctrl+K or / to search.",
            self.catalog.len()
        )));
        self.refilter();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                if !self.state.palette.visible {
                    self.open_palette();
                }
                self.state.insert_char(c);
                self.refilter();
            }
            Action::Backspace => {
                if self.state.palette.visible && self.state.delete_back() {
                    self.refilter();
                }
            }
            Action::ClearInput => {
                self.state.clear_input();
                if self.state.palette.visible {
                    self.refilter();
                }
            }

            Action::ActivityScrollUp => self.state.activity.scroll_back(1),
            Action::ActivityScrollDown => self.state.activity.scroll_forward(1),
            Action::ActivityScrollPageUp => self.state.activity.scroll_back(PAGE),
            Action::ActivityScrollPageDown => self.state.activity.scroll_forward(PAGE),

            Action::PaletteShow => self.open_palette(),
            Action::PaletteHide => self.close_palette(),
            Action::PaletteToggle => {
                if self.state.palette.visible {
                    self.close_palette();
                } else {
                    self.open_palette();
                }
            }
            Action::PaletteUp => self.state.palette.select_previous(),
            Action::PaletteDown => self.state.palette.select_next(),
            Action::PaletteSelect => self.run_selected(),
        }
    }

    fn open_palette(&mut self) {
        if self.state.palette.visible {
            return;
        }
        info!("palette opened");
        self.state.palette.visible = true;
        self.state.clear_input();
        self.refilter();
    }

    fn close_palette(&mut self) {
        if !self.state.palette.visible {
            return;
        }
        info!("palette closed");
        self.state.palette.visible = false;
        self.state.clear_input();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.state.palette.query = self.state.input_buffer.clone();
        update_palette_filter(&mut self.state.palette, &self.catalog, &self.matcher);
    }

    fn run_selected(&mut self) {
        let Some(command) = self.state.palette.selected_command(&self.catalog).cloned() else {
            return;
        };
        match dispatch(&mut self.dispatcher, &command) {
            Ok(()) => {
                self.state.activity.push(ActivityEntry::dispatched(describe(&command)));
            }
            Err(e) => {
                warn!(id = %command.id, error = %e, "command failed");
                self.state
                    .activity
                    .push(ActivityEntry::error(format!("{}: {e:#}", command.title)));
            }
        }
        self.close_palette();
    }
}

fn describe(command: &Command) -> String {
    match command.action.target() {
        Some(target) => format!("{} ({} {})", command.title, command.action.kind(), target),
        None => format!("{} ({})", command.title, command.action.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{Dispatched, RecordingDispatcher};
    use crate::state::ActivityKind;
    use anyhow::{bail, Result};

    fn app() -> App<RecordingDispatcher> {
        let mut app = App::new(Catalog::builtin(), Matcher::default(), RecordingDispatcher::new());
        app.bootstrap();
        app
    }

    fn type_str<D: CommandDispatcher>(app: &mut App<D>, s: &str) {
        for c in s.chars() {
            app.dispatch(Action::Char(c));
        }
    }

    #[test]
    fn typing_opens_palette_and_filters() {
        let mut app = app();
        assert!(!app.state.palette.visible);
        type_str(&mut app, "dashbord");
        assert!(app.state.palette.visible);
        assert_eq!(app.state.palette.query, "dashbord");
        let first = app.state.palette.selected_command(app.catalog()).unwrap();
        assert_eq!(first.id, "dashboard");
    }

    #[test]
    fn backspace_widens_results() {
        let mut app = app();
        type_str(&mut app, "speedx");
        let narrow = app.state.palette.rows.len();
        app.dispatch(Action::Backspace);
        assert_eq!(app.state.palette.query, "speed");
        assert!(app.state.palette.rows.len() >= narrow);
    }

    #[test]
    fn select_dispatches_and_closes() {
        let mut app = app();
        type_str(&mut app, "ga4");
        let selected = app.state.palette.selected_command(app.catalog()).unwrap().id.clone();
        assert_eq!(selected, "analytics-settings");

        app.dispatch(Action::PaletteSelect);
        assert!(!app.state.palette.visible);
        assert_eq!(app.state.input_buffer(), "");
        assert_eq!(
            app.dispatcher().last(),
            Some(&Dispatched::Navigate(
                "admin.php?page=googlesitekit-settings#/connected-services/analytics-4".into()
            ))
        );
        let entry = app.state.activity.entries.last().unwrap();
        assert_eq!(entry.kind, ActivityKind::Dispatched);
        assert!(entry.text.starts_with("Analytics Settings"));
    }

    #[test]
    fn select_with_no_results_does_nothing() {
        let mut app = app();
        type_str(&mut app, "qqqqqqqq");
        app.dispatch(Action::PaletteSelect);
        assert!(app.dispatcher().calls().is_empty());
        assert!(app.state.palette.visible);
    }

    #[test]
    fn toggle_and_hide_reset_query() {
        let mut app = app();
        app.dispatch(Action::PaletteToggle);
        assert!(app.state.palette.visible);
        type_str(&mut app, "set");
        app.dispatch(Action::PaletteHide);
        assert!(!app.state.palette.visible);
        assert_eq!(app.state.input_buffer(), "");
        app.dispatch(Action::PaletteToggle);
        assert_eq!(app.state.palette.rows.len(), app.catalog().len());
    }

    #[test]
    fn activity_follows_dispatches_and_stays_bounded() {
        let mut app = app();
        for _ in 0..50 {
            app.dispatch(Action::ActivityScrollDown);
        }
        assert_eq!(app.state.activity.scroll, 0);

        for _ in 0..30 {
            type_str(&mut app, "ga4");
            app.dispatch(Action::PaletteSelect);
        }
        assert_eq!(app.state.activity.entries.len(), 31);

        app.dispatch(Action::ActivityScrollPageUp);
        assert_eq!(app.state.activity.scroll, PAGE);
        for _ in 0..100 {
            app.dispatch(Action::ActivityScrollUp);
        }
        assert_eq!(app.state.activity.scroll, 30);
        app.dispatch(Action::ActivityScrollDown);
        assert_eq!(app.state.activity.scroll, 29);

        type_str(&mut app, "ga4");
        app.dispatch(Action::PaletteSelect);
        assert_eq!(app.state.activity.scroll, 0);
    }

    struct Failing;

    impl CommandDispatcher for Failing {
        fn navigate(&mut self, _: &str) -> Result<()> {
            bail!("browser unavailable")
        }
        fn scroll_to(&mut self, _: &str) -> Result<()> {
            Ok(())
        }
        fn do_action(&mut self, _: &str) -> Result<()> {
            Ok(())
        }
        fn run_wp_command(&mut self, _: &str) -> Result<()> {
            Ok(())
        }
        fn clear_cache(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_dispatch_is_logged() {
        let mut app = App::new(Catalog::builtin(), Matcher::default(), Failing);
        app.bootstrap();
        type_str(&mut app, "dashboard");
        app.dispatch(Action::PaletteSelect);
        let entry = app.state.activity.entries.last().unwrap();
        assert_eq!(entry.kind, ActivityKind::Error);
        assert!(entry.text.contains("browser unavailable"));
    }
}
