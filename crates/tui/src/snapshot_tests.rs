use std::time::{Duration, Instant};

use facet_range_core::search::FacetSpec;
use facet_range_core::{DualRange, RangeFilter, SearchIndex};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
	MouseEventKind,
};
use serde_json::{Value, json};

use crate::{App, AppOptions};

const WAIT: Duration = Duration::from_secs(5);

fn books() -> SearchIndex {
	let documents = [
		json!({"title": "Dune", "rating": 90, "price": 20}),
		json!({"title": "Emma", "rating": 40, "price": 60}),
		json!({"title": "Ulysses", "rating": 10, "price": 35}),
		json!({"title": "Walden", "rating": 70, "price": 80}),
	]
	.into_iter()
	.filter_map(|value| match value {
		Value::Object(map) => Some(map),
		_ => None,
	})
	.collect();
	let tags = FacetSpec {
		display: "List".to_string(),
		..FacetSpec::new("tags", "Tags", 10)
	};
	SearchIndex::new(
		"title",
		vec![
			FacetSpec::new("rating", "Rating", 10),
			FacetSpec::new("price", "Price", 25),
			tags,
		],
		documents,
	)
	.expect("valid index")
}

fn options() -> AppOptions {
	AppOptions {
		step: 5,
		large_step: 10,
		title: "Books".to_string(),
		..AppOptions::default()
	}
}

/// Wait for the in-flight search and hand its facets to the sliders.
fn settle(app: &mut App) {
	assert!(app.client.wait_for_results(WAIT), "search timed out");
	app.refresh_facets();
	app.tick(Instant::now());
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn shifted(code: KeyCode) -> KeyEvent {
	KeyEvent {
		code,
		modifiers: KeyModifiers::SHIFT,
		kind: KeyEventKind::Press,
		state: KeyEventState::NONE,
	}
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind,
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
	terminal
		.draw(|frame| app.draw(frame))
		.expect("draw snapshot frame");
	terminal.backend().buffer().clone()
}

fn buffer_lines(buf: &Buffer) -> Vec<String> {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines
}

fn slider_ids(app: &App) -> Vec<&str> {
	app.sliders().iter().map(|slider| slider.id()).collect()
}

#[test]
fn mounts_range_facets_only() {
	let mut app = App::new(books(), options());
	assert_eq!(slider_ids(&app), ["rating", "price"]);
	assert!(app.sliders().iter().all(|slider| slider.is_loading()));

	settle(&mut app);
	assert!(app.sliders().iter().all(|slider| !slider.is_loading()));
	let rating = &app.sliders()[0];
	assert_eq!((rating.levels().min, rating.levels().max), (10, 90));
}

#[test]
fn initial_filters_seed_sliders_and_search() {
	let options = AppOptions {
		initial_filters: vec![
			RangeFilter::new("rating", 30, 100),
			RangeFilter::new("missing", 1, 2),
		],
		..options()
	};
	let mut app = App::new(books(), options);
	assert_eq!(app.sliders()[0].value(), DualRange::new(30, 100));
	assert_eq!(app.sliders()[1].value(), DualRange::FULL);

	settle(&mut app);
	let outcome = app.outcome(true);
	assert_eq!(outcome.filters, [RangeFilter::new("rating", 30, 100)]);
	assert_eq!(outcome.total_hits, 3);
}

#[test]
fn keyboard_edits_commit_on_accept() {
	let mut app = App::new(books(), options());
	settle(&mut app);
	let now = Instant::now();

	assert!(app.handle_key(key(KeyCode::Right), now).is_none());
	assert!(app.handle_key(shifted(KeyCode::Right), now).is_none());
	assert_eq!(app.sliders()[0].value(), DualRange::new(15, 100));

	app.handle_key(key(KeyCode::Tab), now);
	assert_eq!(app.focused().map(|slider| slider.id()), Some("price"));
	app.handle_key(key(KeyCode::Char(' ')), now);
	app.handle_key(key(KeyCode::Left), now);
	assert_eq!(app.sliders()[1].value(), DualRange::new(0, 95));

	// Nothing has been committed yet.
	assert!(app.client().filters().is_empty());

	let outcome = app
		.handle_key(key(KeyCode::Enter), now)
		.expect("enter exits");
	assert!(outcome.accepted);
	assert_eq!(
		outcome.filters,
		[
			RangeFilter::new("price", 0, 95),
			RangeFilter::new("rating", 15, 100),
		]
	);
	assert_eq!(outcome.total_hits, 3);
}

#[test]
fn escape_discards_pending_changes() {
	let mut app = App::new(books(), options());
	settle(&mut app);
	let now = Instant::now();

	app.handle_key(key(KeyCode::End), now);
	assert_eq!(app.sliders()[0].value(), DualRange::new(100, 100));
	assert_eq!(app.commits.len(), 1);

	let outcome = app.handle_key(key(KeyCode::Esc), now).expect("esc exits");
	assert!(!outcome.accepted);
	assert!(outcome.filters.is_empty());
	assert_eq!(outcome.total_hits, 4);
	assert!(app.commits.is_empty());
}

#[test]
fn focus_wraps_in_both_directions() {
	let mut app = App::new(books(), options());
	let now = Instant::now();
	app.handle_key(key(KeyCode::Up), now);
	assert_eq!(app.focused().map(|slider| slider.id()), Some("price"));
	app.handle_key(key(KeyCode::Down), now);
	assert_eq!(app.focused().map(|slider| slider.id()), Some("rating"));
	app.handle_key(key(KeyCode::BackTab), now);
	assert_eq!(app.focused().map(|slider| slider.id()), Some("price"));
}

#[test]
fn tick_commits_after_quiet_period() {
	let mut app = App::new(books(), options());
	settle(&mut app);
	let start = Instant::now();

	app.handle_key(key(KeyCode::Right), start);
	app.tick(start + Duration::from_millis(100));
	assert!(app.client().filters().is_empty());

	app.tick(start + options().debounce);
	assert_eq!(
		app.client().filters().snapshot(),
		[RangeFilter::new("rating", 5, 100)]
	);
	settle(&mut app);
	assert_eq!(app.outcome(true).total_hits, 4);
}

#[test]
fn renders_title_sliders_and_hits() {
	let mut app = App::new(books(), options());
	settle(&mut app);
	let lines = buffer_lines(&draw(&mut app, 40, 14));

	let track = format!(" ●{}●", "━".repeat(36));
	let expected = [
		" Books                 4 of 4 documents",
		"",
		" Rating",
		track.as_str(),
		" 0 – 100",
		"",
		" Price",
		track.as_str(),
		" 0 – 100",
		"  Hits ────────────────────────────────",
		" Dune",
		" Emma",
		" Ulysses",
		" ↑↓ facet  ←→ move  space handle  enter",
	];
	assert_eq!(lines, expected);
}

#[test]
fn pointer_drags_the_nearest_handle() {
	let mut app = App::new(books(), options());
	settle(&mut app);
	draw(&mut app, 60, 24);
	let now = Instant::now();

	// Price track sits on row 7; column 30 maps to value 51.
	app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 30, 7), now);
	assert_eq!(app.focused().map(|slider| slider.id()), Some("price"));
	assert_eq!(app.sliders()[1].value(), DualRange::new(0, 51));
	assert!(app.sliders()[1].is_dragging());

	app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 7), now);
	assert_eq!(app.sliders()[1].value(), DualRange::new(0, 0));

	app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 1, 7), now);
	assert!(!app.sliders()[1].is_dragging());
	assert_eq!(app.sliders()[0].value(), DualRange::FULL);
}

#[test]
fn empty_results_show_placeholder() {
	let options = AppOptions {
		initial_filters: vec![RangeFilter::new("rating", 95, 100)],
		..options()
	};
	let mut app = App::new(books(), options);
	settle(&mut app);
	let lines = buffer_lines(&draw(&mut app, 40, 14));
	assert!(lines[0].ends_with("0 of 4 documents"));
	assert!(lines.iter().any(|line| line.contains("No matching documents")));
}
