//! Command catalog: the fixed set of commands the palette searches.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;

/// What happens when a command is selected. The payload is the target the
/// action is applied to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "kebab-case")]
pub enum CommandAction {
    /// Open an admin URL.
    Navigate(String),
    /// Scroll the dashboard to an anchor.
    ScrollTo(String),
    /// Fire a plugin action hook.
    WpAction(String),
    /// Run a WordPress-native command.
    WpCommands(String),
    ClearCache,
}

impl CommandAction {
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Navigate(t) | Self::ScrollTo(t) | Self::WpAction(t) | Self::WpCommands(t) => {
                Some(t.as_str())
            }
            Self::ClearCache => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "navigate",
            Self::ScrollTo(_) => "scroll-to",
            Self::WpAction(_) => "wp-action",
            Self::WpCommands(_) => "wp-commands",
            Self::ClearCache => "clear-cache",
        }
    }
}

/// Display group. Declaration order is not display order: groups appear in
/// the order their first command does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Quick Actions")]
    QuickActions,
    #[serde(rename = "Pages")]
    Pages,
    #[serde(rename = "Settings")]
    Settings,
    #[serde(rename = "Modules")]
    Modules,
    #[serde(rename = "Dashboard Sections")]
    DashboardSections,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::QuickActions => "Quick Actions",
            Self::Pages => "Pages",
            Self::Settings => "Settings",
            Self::Modules => "Modules",
            Self::DashboardSections => "Dashboard Sections",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub action: CommandAction,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Command {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        action: CommandAction,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            action,
            keywords: Vec::new(),
            category,
            icon: None,
        }
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Ordered, immutable list of commands with unique ids.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    commands: Vec<Command>,
}

impl Catalog {
    pub fn new(commands: Vec<Command>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(commands.len());
        for c in &commands {
            if c.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(c.id.as_str()) {
                return Err(CatalogError::DuplicateId(c.id.clone()));
            }
        }
        Ok(Self { commands })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let commands: Vec<Command> = serde_json::from_str(json)?;
        Self::new(commands)
    }

    /// Read a JSON catalog from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let commands: Vec<Command> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::new(commands)?;
        debug!(path = %path.display(), commands = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn get(&self, id: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Site Kit's own commands.
    pub fn builtin() -> Self {
        use Category::*;
        use CommandAction::*;

        let page = |slug: &str| Navigate(format!("admin.php?page={slug}"));
        let settings = |fragment: &str| {
            Navigate(format!("admin.php?page=googlesitekit-settings#/{fragment}"))
        };

        let commands = vec![
            Command::new(
                "clear-cache",
                "Clear Site Kit Cache",
                "Delete cached API responses so data is fetched fresh",
                ClearCache,
                QuickActions,
            )
            .keywords(["cache", "refresh", "purge", "reload data"])
            .icon("update"),
            Command::new(
                "flush-permalinks",
                "Flush Permalinks",
                "Regenerate WordPress rewrite rules",
                WpCommands("core/flush-permalinks".into()),
                QuickActions,
            )
            .keywords(["rewrite rules", "permalinks", "links"])
            .icon("admin-links"),
            Command::new(
                "reset-site-kit",
                "Reset Site Kit",
                "Disconnect all services and remove Site Kit data",
                WpAction("googlesitekit_reset".into()),
                QuickActions,
            )
            .keywords(["disconnect", "start over", "uninstall"])
            .icon("trash"),
            Command::new(
                "dashboard",
                "Dashboard",
                "Open the Site Kit dashboard",
                page("googlesitekit-dashboard"),
                Pages,
            )
            .keywords(["home", "overview", "main"])
            .icon("dashboard"),
            Command::new(
                "settings",
                "Settings",
                "Open Site Kit settings",
                page("googlesitekit-settings"),
                Pages,
            )
            .keywords(["configuration", "options", "preferences"])
            .icon("admin-settings"),
            Command::new(
                "user-input",
                "Site Goals",
                "Answer questions about your site to tailor key metrics",
                page("googlesitekit-user-input"),
                Pages,
            )
            .keywords(["questionnaire", "user input", "goals"]),
            Command::new(
                "analytics-settings",
                "Analytics Settings",
                "Configure the Google Analytics property and web data stream",
                settings("connected-services/analytics-4"),
                Settings,
            )
            .keywords(["ga4", "google analytics", "property", "measurement id"])
            .icon("chart-bar"),
            Command::new(
                "search-console-settings",
                "Search Console Settings",
                "Review the verified Search Console property",
                settings("connected-services/search-console"),
                Settings,
            )
            .keywords(["gsc", "search console", "property"]),
            Command::new(
                "adsense-settings",
                "AdSense Settings",
                "Manage the AdSense account and ad snippet",
                settings("connected-services/adsense"),
                Settings,
            )
            .keywords(["ads", "monetization", "earnings"]),
            Command::new(
                "tagmanager-settings",
                "Tag Manager Settings",
                "Choose the Tag Manager account and container",
                settings("connected-services/tagmanager"),
                Settings,
            )
            .keywords(["gtm", "container", "tags"]),
            Command::new(
                "admin-settings",
                "Admin Settings",
                "Plugin-wide preferences such as the admin bar menu",
                settings("admin-settings"),
                Settings,
            )
            .keywords(["admin bar", "tracking", "preferences"]),
            Command::new(
                "connect-more-services",
                "Connect More Services",
                "Set up additional Google services",
                settings("connect-more-services"),
                Modules,
            )
            .keywords(["modules", "add service", "activate"])
            .icon("plus"),
            Command::new(
                "pagespeed-insights",
                "PageSpeed Insights",
                "Module showing lab and field speed data",
                settings("connected-services/pagespeed-insights"),
                Modules,
            )
            .keywords(["psi", "performance", "core web vitals"]),
            Command::new(
                "section-key-metrics",
                "Key Metrics",
                "Jump to the key metrics widgets",
                ScrollTo("#key-metrics".into()),
                DashboardSections,
            )
            .keywords(["kpi", "metrics", "widgets"]),
            Command::new(
                "section-traffic",
                "Traffic",
                "Jump to visitor and session trends",
                ScrollTo("#traffic".into()),
                DashboardSections,
            )
            .keywords(["visitors", "sessions", "audience"]),
            Command::new(
                "section-content",
                "Content",
                "Jump to search traffic and popular pages",
                ScrollTo("#content".into()),
                DashboardSections,
            )
            .keywords(["search", "popular pages", "impressions", "clicks"]),
            Command::new(
                "section-speed",
                "Speed",
                "Jump to page speed results",
                ScrollTo("#speed".into()),
                DashboardSections,
            )
            .keywords(["performance", "pagespeed", "load time"]),
            Command::new(
                "section-monetization",
                "Monetization",
                "Jump to AdSense earnings",
                ScrollTo("#monetization".into()),
                DashboardSections,
            )
            .keywords(["earnings", "revenue", "adsense"]),
        ];

        Self { commands }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
