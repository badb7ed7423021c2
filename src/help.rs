//! Help line for the countdown widget.
//!
//! Renders the enabled bindings of a [`KeyMap`] either as a single compact
//! line (`s start • p pause • r reset`) or as aligned columns. When a width is
//! set, items that do not fit are replaced with an ellipsis.

use crate::key::{self, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of the overflow ellipsis.
    pub ellipsis: Style,
    /// Key label in the short view.
    pub short_key: Style,
    /// Description in the short view.
    pub short_desc: Style,
    /// Separator in the short view.
    pub short_separator: Style,
    /// Key label in the full view.
    pub full_key: Style,
    /// Description in the full view.
    pub full_desc: Style,
    /// Column separator in the full view.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// Help view state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Render the full multi-column view instead of the short line.
    pub show_all: bool,
    /// Maximum width in cells; `0` means unlimited.
    pub width: usize,
    /// Separator between items in the short view.
    pub short_separator: String,
    /// Separator between columns in the full view.
    pub full_separator: String,
    /// Marker shown when items are cut off.
    pub ellipsis: String,
    /// Styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help view with default styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the key map in the current mode.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on one line.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let mut builder = String::new();
        let mut total_width = 0;
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        for kb in bindings.iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
            let item = format!(
                "{}{} {}",
                sep,
                self.styles.short_key.clone().inline(true).render(&help.key),
                self.styles.short_desc.clone().inline(true).render(&help.desc)
            );
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.overflow_tail(total_width, item_width) {
                builder.push_str(&tail);
                break;
            }

            total_width += item_width;
            builder.push_str(&item);
        }
        builder
    }

    /// Renders bindings as columns, one column per group.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);
        let mut columns: Vec<String> = Vec::new();
        let mut total_width = 0;

        for group in groups.iter().filter(|g| g.iter().any(|b| b.enabled())) {
            let col = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    format!(
                        "{} {}",
                        self.styles.full_key.clone().inline(true).render(&help.key),
                        self.styles.full_desc.clone().inline(true).render(&help.desc)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            let col_width = lipgloss::width_visible(&col);

            if let Some(tail) = self.overflow_tail(total_width, col_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }

            total_width += col_width;
            columns.push(col);
        }

        let mut parts: Vec<&str> = Vec::new();
        for (i, col) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(col.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    // Some(tail) when the item does not fit; the tail is empty if even the
    // ellipsis would overflow.
    fn overflow_tail(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width == 0 || total_width + item_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles
                .ellipsis
                .clone()
                .inline(true)
                .render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) < self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{new_binding, with_disabled, with_help, with_keys_str, Binding};

    struct Keys {
        start: Binding,
        reset: Binding,
        hidden: Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.start, &self.hidden, &self.reset]
        }

        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.start], vec![&self.hidden], vec![&self.reset]]
        }
    }

    fn keys() -> Keys {
        Keys {
            start: new_binding(vec![with_keys_str(&["s"]), with_help("s", "start")]),
            reset: new_binding(vec![with_keys_str(&["r"]), with_help("r", "reset")]),
            hidden: new_binding(vec![
                with_keys_str(&["x"]),
                with_help("x", "hidden"),
                with_disabled(),
            ]),
        }
    }

    fn plain(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_short_view_skips_disabled() {
        let view = plain(&Model::new().view(&keys()));
        assert_eq!(view, "s start • r reset");
    }

    #[test]
    fn test_short_view_truncates() {
        let view = plain(&Model::new().with_width(12).view(&keys()));
        assert!(view.starts_with("s start"));
        assert!(!view.contains("reset"));
        assert!(view.ends_with('…'));
    }

    #[test]
    fn test_full_view_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let view = plain(&help.view(&keys()));
        assert!(view.contains("s start"));
        assert!(view.contains("r reset"));
        assert!(!view.contains("hidden"));
    }

    #[test]
    fn test_empty_keymap() {
        let help = Model::new();
        assert_eq!(help.short_help_view(vec![]), "");
    }
}
