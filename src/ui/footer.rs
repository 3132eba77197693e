use crate::component::greeting::GreetingProps;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the keys the panel currently responds to, plus the version.
pub struct Footer {
    hints: Vec<&'static str>,
}

impl Footer {
    pub fn for_panel(props: &GreetingProps) -> Self {
        let mut hints = vec!["Tab: Focus", "Enter: Press"];
        if props.show_counter {
            hints.extend(["+: Increment", "c: Hide counter"]);
        } else {
            hints.push("c: Show counter");
        }
        hints.push("Esc: Quit");
        Self { hints }
    }

    pub fn hint_text(&self) -> String {
        format!(" {}", self.hints.join(" │ "))
    }

    /// Hints on the left, version pushed to the right edge inside the border.
    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hint_text();
        let version = format!("v{VERSION} ");
        let inner_width = usize::from(area.width.saturating_sub(2));
        let gap = inner_width.saturating_sub(hints.chars().count() + version.chars().count());

        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::raw(hints),
            Span::raw(" ".repeat(gap)),
            Span::raw(version),
        ]);

        Paragraph::new(line)
            .style(style)
            .block(Block::bordered().border_style(Style::default().fg(GLOBAL_BORDER)))
    }
}
