use serde::{Deserialize, Serialize};

use super::Record;

/// Represents a portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
	pub title: String,
	pub description: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	#[serde(default)]
	pub tags: Vec<String>,
	pub category: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub github: Option<String>,
	pub date: String,
}

impl Project {
	/// Create a new [`Project`] without image or repository links.
	#[must_use]
	pub fn new(
		title: impl Into<String>,
		description: impl Into<String>,
		category: impl Into<String>,
		date: impl Into<String>,
	) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
			image: None,
			tags: Vec::new(),
			category: category.into(),
			github: None,
			date: date.into(),
		}
	}

	/// Replace the tags with a new collection.
	#[must_use]
	pub fn with_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags = tags.into_iter().map(Into::into).collect();
		self
	}

	/// Attach a repository URL.
	#[must_use]
	pub fn with_github(mut self, url: impl Into<String>) -> Self {
		self.github = Some(url.into());
		self
	}

	/// Attach a preview image path.
	#[must_use]
	pub fn with_image(mut self, image: impl Into<String>) -> Self {
		self.image = Some(image.into());
		self
	}
}

impl Record for Project {
	fn title(&self) -> &str {
		&self.title
	}

	fn description(&self) -> &str {
		&self.description
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
