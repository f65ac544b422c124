use anyhow::Result;
use facet_range_core::FilterOutcome;

/// Plain-text rendering: one `id: min..max` line per committed filter.
pub(crate) fn format_outcome_plain(outcome: &FilterOutcome) -> String {
	if !outcome.accepted {
		return "Filtering cancelled".to_string();
	}
	if outcome.filters.is_empty() {
		return "No filters".to_string();
	}
	outcome
		.filters
		.iter()
		.map(|filter| format!("{}: {}..{}", filter.id, filter.min, filter.max))
		.collect::<Vec<_>>()
		.join("\n")
}

/// Print a plain-text representation of the filter outcome.
pub(crate) fn print_plain(outcome: &FilterOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

/// Format the filter outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &FilterOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the filter outcome.
pub(crate) fn print_json(outcome: &FilterOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use facet_range_core::RangeFilter;

	use super::*;

	fn accepted() -> FilterOutcome {
		FilterOutcome {
			accepted: true,
			total_hits: 12,
			filters: vec![
				RangeFilter::new("price", 0, 35),
				RangeFilter::new("rating", 20, 60),
			],
		}
	}

	#[test]
	fn plain_lists_each_filter() {
		assert_eq!(format_outcome_plain(&accepted()), "price: 0..35\nrating: 20..60");
	}

	#[test]
	fn plain_reports_cancellation_and_empty_selection() {
		let cancelled = FilterOutcome {
			accepted: false,
			..accepted()
		};
		assert_eq!(format_outcome_plain(&cancelled), "Filtering cancelled");

		let empty = FilterOutcome {
			filters: Vec::new(),
			..accepted()
		};
		assert_eq!(format_outcome_plain(&empty), "No filters");
	}

	#[test]
	fn json_format_includes_filters() {
		let json = format_outcome_json(&accepted()).expect("json");
		insta::assert_snapshot!(json, @r#"
		{
		  "accepted": true,
		  "total_hits": 12,
		  "filters": [
		    {
		      "id": "price",
		      "min": 0,
		      "max": 35
		    },
		    {
		      "id": "rating",
		      "min": 20,
		      "max": 60
		    }
		  ]
		}
		"#);
	}
}
