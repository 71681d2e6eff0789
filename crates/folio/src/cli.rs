//! Output helpers for the `links`, `config` and `theme` commands

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use folio_core::{DarkMode, HeaderConfig, PreferenceStore};
use folio_types::{ColorScheme, NavLink, HOME_LINK, NAV_LINKS};

/// Logo link followed by the nav entries, each with the configured duration
fn all_links() -> impl Iterator<Item = NavLink> {
    std::iter::once(HOME_LINK).chain(NAV_LINKS)
}

/// Navigation table (label, href, offset, duration)
pub fn render_links_table(config: &HeaderConfig, no_color: bool) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers = ["Label", "Anchor", "Offset (px)", "Duration (ms)"];
    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    }

    for link in all_links() {
        let request = config.scroll_request(link.scroll_request());
        table.add_row(vec![
            link.label.to_string(),
            link.href(),
            request.offset_px.to_string(),
            request.duration_ms.to_string(),
        ]);
    }

    table.to_string()
}

pub fn render_links_json(config: &HeaderConfig) -> Result<String> {
    let links: Vec<serde_json::Value> = all_links()
        .map(|link| {
            serde_json::json!({
                "label": link.label,
                "href": link.href(),
                "scroll": config.scroll_request(link.scroll_request()),
            })
        })
        .collect();
    serde_json::to_string_pretty(&links).context("Failed to serialize navigation links")
}

pub fn render_config(config: &HeaderConfig, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(config).context("Failed to serialize config")
    } else {
        Ok(config.to_toml_string()?)
    }
}

/// What `folio theme` should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeCommand {
    Show,
    Toggle,
    Set(ColorScheme),
}

/// Apply `command` to the stored preference, returning the resulting scheme
pub fn run_theme(
    store: impl PreferenceStore + 'static,
    config: &HeaderConfig,
    command: ThemeCommand,
) -> ColorScheme {
    let dark_mode = DarkMode::new(store, config.default_scheme);
    match command {
        ThemeCommand::Show => {}
        ThemeCommand::Toggle => {
            dark_mode.toggle();
        }
        ThemeCommand::Set(scheme) => dark_mode.set(scheme),
    }
    dark_mode.scheme()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::JsonFilePreferenceStore;
    use tempfile::tempdir;

    #[test]
    fn test_links_table_lists_all_targets() {
        let table = render_links_table(&HeaderConfig::default(), true);
        for expected in ["#home", "#project", "#skill", "#work", "#about", "#contact"] {
            assert!(table.contains(expected), "missing {}", expected);
        }
        assert!(table.contains("-80"));
        assert!(table.contains("50"));
    }

    #[test]
    fn test_links_json_uses_configured_duration() {
        let config = HeaderConfig {
            scroll_duration_ms: 900,
            ..HeaderConfig::default()
        };
        let json: serde_json::Value =
            serde_json::from_str(&render_links_json(&config).unwrap()).unwrap();

        let links = json.as_array().unwrap();
        assert_eq!(links.len(), 6);
        assert_eq!(links[0]["scroll"]["target"], "home");
        assert_eq!(links[5]["scroll"]["offset_px"], 50);
        assert_eq!(links[5]["scroll"]["duration_ms"], 900);
    }

    #[test]
    fn test_render_config_formats() {
        let config = HeaderConfig::default();
        let toml = render_config(&config, false).unwrap();
        assert!(toml.contains("logo_text = \"j.russ\""));

        let json: serde_json::Value =
            serde_json::from_str(&render_config(&config, true).unwrap()).unwrap();
        assert_eq!(json["dismiss_policy"], "outside-panel");
    }

    #[test]
    fn test_theme_commands_persist() {
        let dir = tempdir().unwrap();
        let config = HeaderConfig::default();
        let store = || JsonFilePreferenceStore::new(dir.path(), &config.storage_key);

        assert_eq!(run_theme(store(), &config, ThemeCommand::Show), ColorScheme::Dark);
        assert_eq!(run_theme(store(), &config, ThemeCommand::Toggle), ColorScheme::Light);
        assert_eq!(run_theme(store(), &config, ThemeCommand::Show), ColorScheme::Light);
        assert_eq!(
            run_theme(store(), &config, ThemeCommand::Set(ColorScheme::Dark)),
            ColorScheme::Dark
        );
        assert_eq!(store().load().unwrap(), Some(ColorScheme::Dark));
    }
}
