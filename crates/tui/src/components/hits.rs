use facet_range_core::search::Hit;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::style::Theme;

/// Render document titles under a titled rule.
pub fn render_hits(frame: &mut Frame, area: Rect, hits: &[Hit], theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let block = Block::default()
		.borders(Borders::TOP)
		.border_style(theme.muted)
		.title(Span::styled(" Hits ", theme.header));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if hits.is_empty() {
		let empty = Paragraph::new("No matching documents")
			.style(theme.muted)
			.alignment(Alignment::Center);
		frame.render_widget(empty, inner);
		return;
	}

	let items: Vec<ListItem> = hits
		.iter()
		.map(|hit| ListItem::new(hit.title.as_str()))
		.collect();
	frame.render_widget(List::new(items), inner);
}
