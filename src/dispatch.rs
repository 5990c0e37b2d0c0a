//! Carrying out a selected command.
//!
//! The palette never performs side effects itself; whoever owns the surface
//! hands it a [`CommandDispatcher`].

use anyhow::Result;
use tracing::info;

use crate::catalog::{Command, CommandAction};

/// Side-effecting collaborator invoked when a command is selected.
pub trait CommandDispatcher {
    fn navigate(&mut self, url: &str) -> Result<()>;
    fn scroll_to(&mut self, anchor: &str) -> Result<()>;
    /// Fire a plugin action hook.
    fn do_action(&mut self, hook: &str) -> Result<()>;
    fn run_wp_command(&mut self, name: &str) -> Result<()>;
    fn clear_cache(&mut self) -> Result<()>;
}

/// Route `command`'s action to the matching dispatcher method.
pub fn dispatch(dispatcher: &mut dyn CommandDispatcher, command: &Command) -> Result<()> {
    info!(id = %command.id, action = command.action.kind(), "dispatching command");
    match &command.action {
        CommandAction::Navigate(url) => dispatcher.navigate(url),
        CommandAction::ScrollTo(anchor) => dispatcher.scroll_to(anchor),
        CommandAction::WpAction(hook) => dispatcher.do_action(hook),
        CommandAction::WpCommands(name) => dispatcher.run_wp_command(name),
        CommandAction::ClearCache => dispatcher.clear_cache(),
    }
}

/// One call made on a [`RecordingDispatcher`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatched {
    Navigate(String),
    ScrollTo(String),
    DoAction(String),
    WpCommand(String),
    ClearCache,
}

impl Dispatched {
    pub fn describe(&self) -> String {
        match self {
            Self::Navigate(url) => format!("navigate → {url}"),
            Self::ScrollTo(anchor) => format!("scroll to {anchor}"),
            Self::DoAction(hook) => format!("do_action('{hook}')"),
            Self::WpCommand(name) => format!("wp command {name}"),
            Self::ClearCache => "cache cleared".to_string(),
        }
    }
}

/// Keeps every dispatched call in order instead of acting on it.
#[derive(Clone, Debug, Default)]
pub struct RecordingDispatcher {
    calls: Vec<Dispatched>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[Dispatched] {
        &self.calls
    }

    pub fn last(&self) -> Option<&Dispatched> {
        self.calls.last()
    }
}

impl CommandDispatcher for RecordingDispatcher {
    fn navigate(&mut self, url: &str) -> Result<()> {
        self.calls.push(Dispatched::Navigate(url.to_string()));
        Ok(())
    }

    fn scroll_to(&mut self, anchor: &str) -> Result<()> {
        self.calls.push(Dispatched::ScrollTo(anchor.to_string()));
        Ok(())
    }

    fn do_action(&mut self, hook: &str) -> Result<()> {
        self.calls.push(Dispatched::DoAction(hook.to_string()));
        Ok(())
    }

    fn run_wp_command(&mut self, name: &str) -> Result<()> {
        self.calls.push(Dispatched::WpCommand(name.to_string()));
        Ok(())
    }

    fn clear_cache(&mut self) -> Result<()> {
        self.calls.push(Dispatched::ClearCache);
        Ok(())
    }
}
