//! Rendering for the countdown widget.

use super::model::Model;
use crate::field::FieldKind;
use crate::key::Binding;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Width, in cells, of each clock cell and input box.
pub const CELL_WIDTH: usize = 9;

/// Styles for the countdown view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Heading.
    pub title: Style,
    /// "Hours" / "Minutes" / "Seconds" captions above the clock.
    pub label: Style,
    /// Clock digits.
    pub digits: Style,
    /// Unfocused duration input.
    pub field: Style,
    /// Focused duration input.
    pub focused_field: Style,
    /// Placeholder shown in an empty input.
    pub placeholder: Style,
    /// Control whose key binding is enabled.
    pub button: Style,
    /// Control whose key binding is disabled.
    pub disabled_button: Style,
    /// Phase line.
    pub status: Style,
    /// Wrapper around the help line.
    pub help: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true)
                .padding(0, 1, 0, 1),
            label: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            digits: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            field: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            focused_field: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .underline(true),
            placeholder: Style::new().foreground(subdued.clone()),
            button: Style::new()
                .background(Color::from("57"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            disabled_button: Style::new()
                .foreground(subdued.clone())
                .padding(0, 1, 0, 1),
            status: Style::new().foreground(subdued),
            help: Style::new().padding(1, 0, 0, 0),
        }
    }
}

// Centers `s` in `width` cells; wider strings are returned unchanged.
fn center(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

fn row(cells: &[String]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            parts.push(" ");
        }
        parts.push(cell.as_str());
    }
    lipgloss::join_horizontal(lipgloss::TOP, &parts)
}

impl Model {
    fn button(&self, label: &str, binding: &Binding) -> String {
        let style = if binding.enabled() {
            &self.styles.button
        } else {
            &self.styles.disabled_button
        };
        style.clone().render(label)
    }

    fn clock_view(&self) -> String {
        let clock = self.engine.clock();
        let (h, m, s) = clock.parts();
        let cells: Vec<String> = FieldKind::ALL
            .iter()
            .zip([h, m, s])
            .map(|(kind, value)| {
                format!(
                    "{}\n{}",
                    self.styles.label.clone().render(&center(kind.label(), CELL_WIDTH)),
                    self.styles.digits.clone().render(&center(value, CELL_WIDTH))
                )
            })
            .collect();
        row(&cells)
    }

    fn fields_view(&self) -> String {
        let cells: Vec<String> = FieldKind::ALL
            .iter()
            .map(|&kind| {
                let field = self.engine.field(kind);
                let text = if field.is_unset() {
                    kind.label().to_string()
                } else {
                    field.to_string()
                };
                let style = if self.focused && kind == self.focus_field {
                    &self.styles.focused_field
                } else if field.is_unset() {
                    &self.styles.placeholder
                } else {
                    &self.styles.field
                };
                style.clone().render(&center(&text, CELL_WIDTH))
            })
            .collect();
        row(&cells)
    }

    /// Renders the widget.
    pub fn view(&self) -> String {
        let km = self.synced_keys();
        let buttons = row(&[
            self.button("Set", &km.set),
            self.button("Start", &km.start),
            self.button(self.pause_label(), &km.pause_resume),
            self.button("Reset", &km.reset),
        ]);

        let mut out = vec![
            self.styles.title.clone().render(&self.title),
            String::new(),
            self.clock_view(),
            String::new(),
            self.fields_view(),
            String::new(),
            buttons,
            self.styles
                .status
                .clone()
                .render(&self.engine.phase().to_string()),
        ];
        if self.focused {
            out.push(self.styles.help.clone().render(&self.help.view(&km)));
        }
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("toolong", 3), "toolong");
    }
}
