use crate::component::{Node, View};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, FOCUS_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let focused = app.focused();
    let lines = view_lines(app.view(), focused);

    let panel = app.panel();
    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(panel.render_count(), panel.pending()),
        header,
    );

    frame.render_widget(Clear, body);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        body,
    );

    let footer_widget = Footer::for_panel(panel.props());
    frame.render_widget(footer_widget.widget(footer), footer);
}

/// Map a view tree to styled lines. `focused` indexes buttons in document order.
pub fn view_lines(view: &View, focused: usize) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines = Vec::new();
    let mut button_index = 0;

    for node in view.nodes() {
        match node {
            Node::Container { .. } => {}
            Node::Heading { level, text } => {
                let style = if *level <= 1 {
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    text_style.add_modifier(Modifier::BOLD)
                };
                lines.push(Line::from(Span::styled(text.clone(), style)));
                lines.push(Line::from(""));
            }
            Node::Button { label, .. } => {
                let mut style = text_style;
                if button_index == focused {
                    style = style.bg(FOCUS_HIGHLIGHT).add_modifier(Modifier::REVERSED);
                }
                lines.push(Line::from(Span::styled(format!("[ {label} ]"), style)));
                button_index += 1;
            }
        }
    }

    lines
}
