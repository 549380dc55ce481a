use serde::{Deserialize, Serialize};

use super::Record;

/// Represents a blog post. The excerpt doubles as the searchable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
	pub title: String,
	pub excerpt: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	pub category: String,
	pub date: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub read_time: Option<String>,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub slug: Option<String>,
}

impl BlogPost {
	#[must_use]
	pub fn new(
		title: impl Into<String>,
		excerpt: impl Into<String>,
		category: impl Into<String>,
		date: impl Into<String>,
	) -> Self {
		Self {
			title: title.into(),
			excerpt: excerpt.into(),
			image: None,
			category: category.into(),
			date: date.into(),
			read_time: None,
			tags: Vec::new(),
			slug: None,
		}
	}

	#[must_use]
	pub fn with_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags = tags.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_read_time(mut self, read_time: impl Into<String>) -> Self {
		self.read_time = Some(read_time.into());
		self
	}

	#[must_use]
	pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
		self.slug = Some(slug.into());
		self
	}
}

impl Record for BlogPost {
	fn title(&self) -> &str {
		&self.title
	}

	fn description(&self) -> &str {
		&self.excerpt
	}

	fn tags(&self) -> &[String] {
		&self.tags
	}

	fn category(&self) -> &str {
		&self.category
	}

	fn date(&self) -> &str {
		&self.date
	}
}
