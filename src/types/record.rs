/// A single catalog entry as seen by the search engine.
///
/// Concrete shapes ([`Project`](super::Project), [`BlogPost`](super::BlogPost))
/// name their fields differently; this trait exposes the common view the
/// filter and sort stages operate on.
pub trait Record {
	/// Display label, matched by the search query and used for title sorts.
	fn title(&self) -> &str;

	/// Free text matched by the search query.
	fn description(&self) -> &str;

	/// Tags matched element-wise by the search query.
	fn tags(&self) -> &[String];

	/// Category compared exactly against the category filter.
	fn category(&self) -> &str;

	/// Raw ISO-8601 date used only for date sorts.
	fn date(&self) -> &str;
}

impl<R: Record + ?Sized> Record for &R {
	fn title(&self) -> &str {
		(**self).title()
	}

	fn description(&self) -> &str {
		(**self).description()
	}

	fn tags(&self) -> &[String] {
		(**self).tags()
	}

	fn category(&self) -> &str {
		(**self).category()
	}

	fn date(&self) -> &str {
		(**self).date()
	}
}
