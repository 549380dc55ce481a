//! Portfolio data seeded into the built-in catalogs.

use super::Catalog;
use crate::types::{BlogPost, Project};

/// Category choices offered for the projects catalog, besides `all`.
pub const PROJECT_CATEGORIES: [&str; 3] = ["frontend", "backend", "fullstack"];

/// Category choices offered for the posts catalog, besides `all`.
pub const POST_CATEGORIES: [&str; 6] = ["React", "TypeScript", "Next.js", "CSS", "Node.js", "Database"];

const GITHUB: &str = "https://github.com/tonyb";

fn project(
	title: &str,
	description: &str,
	tags: [&str; 3],
	category: &str,
	repository: &str,
	date: &str,
) -> Project {
	Project::new(title, description, category, date)
		.with_tags(tags)
		.with_github(format!("{GITHUB}/{repository}"))
}

fn post(
	title: &str,
	excerpt: &str,
	category: &str,
	date: &str,
	minutes: u32,
	tags: [&str; 3],
	slug: &str,
) -> BlogPost {
	BlogPost::new(title, excerpt, category, date)
		.with_tags(tags)
		.with_read_time(format!("{minutes} min read"))
		.with_slug(slug)
}

/// The projects catalog, in the order the projects page lists them.
#[must_use]
pub fn projects() -> Catalog<Project> {
	Catalog::new(vec![
		project(
			"E-commerce Platform",
			"Full-stack e-commerce site built with Next.js, Stripe, and MongoDB",
			["Next.js", "MongoDB", "Stripe"],
			"fullstack",
			"ecommerce-platform",
			"2023-05-15",
		)
		.with_image("/ecommerce-platform.webp"),
		Project::new(
			"SpeakGenie",
			"React-based voice assistant application",
			"Web Development",
			"2025-08-10",
		)
		.with_tags(["NEXT", "AI", "LLM"])
		.with_github("https://github.com/DamnX9211/SpeakGenie")
		.with_image("/speak-genie.webp"),
		project(
			"Weather Dashboard",
			"Interactive weather dashboard using OpenWeather API and Chart.js",
			["JavaScript", "API", "Chart.js"],
			"frontend",
			"weather-dashboard",
			"2022-11-20",
		),
		project(
			"Blog CMS",
			"Content management system for blogs with markdown support",
			["Node.js", "Express", "MongoDB"],
			"backend",
			"blog-cms",
			"2022-09-05",
		),
		project(
			"Real-time Chat",
			"Real-time chat application using Socket.io and React",
			["React", "Socket.io", "Node.js"],
			"fullstack",
			"realtime-chat",
			"2022-07-12",
		),
		project(
			"Portfolio Template",
			"Customizable portfolio template for developers",
			["Next.js", "Tailwind", "Framer"],
			"frontend",
			"portfolio-template",
			"2022-04-30",
		),
		project(
			"API Gateway",
			"Microservice API gateway with authentication and rate limiting",
			["Node.js", "Express", "JWT"],
			"backend",
			"api-gateway",
			"2022-03-15",
		),
		project(
			"DevOps Dashboard",
			"Dashboard for monitoring CI/CD pipelines and deployments",
			["React", "GraphQL", "Docker"],
			"fullstack",
			"devops-dashboard",
			"2022-01-20",
		),
		project(
			"Social Media Analytics",
			"Analytics platform for social media performance tracking",
			["Next.js", "D3.js", "Firebase"],
			"frontend",
			"social-analytics",
			"2021-11-05",
		),
		project(
			"Inventory Management",
			"Inventory management system with barcode scanning",
			["React Native", "Node.js", "MongoDB"],
			"fullstack",
			"inventory-system",
			"2021-09-10",
		),
		project(
			"Authentication Service",
			"Secure authentication service with OAuth and MFA support",
			["Node.js", "Express", "OAuth"],
			"backend",
			"auth-service",
			"2021-07-22",
		),
		project(
			"Data Visualization Tool",
			"Interactive data visualization tool for complex datasets",
			["React", "D3.js", "TypeScript"],
			"frontend",
			"data-viz",
			"2021-05-15",
		),
	])
}

/// The posts catalog, newest first as the blog page lists them.
#[must_use]
pub fn posts() -> Catalog<BlogPost> {
	Catalog::new(vec![
		post(
			"Building Scalable React Applications",
			"Learn how to structure and build React applications that can grow with your team and requirements.",
			"React",
			"2024-01-15",
			8,
			["React", "Architecture", "Best Practices"],
			"building-scalable-react-applications",
		),
		post(
			"Advanced TypeScript Patterns",
			"Explore advanced TypeScript patterns and techniques to write more robust and maintainable code.",
			"TypeScript",
			"2024-01-10",
			12,
			["TypeScript", "Patterns", "Advanced"],
			"advanced-typescript-patterns",
		),
		post(
			"Optimizing Next.js Performance",
			"Discover techniques to optimize your Next.js applications for better performance and user experience.",
			"Next.js",
			"2024-01-05",
			10,
			["Next.js", "Performance", "Optimization"],
			"optimizing-nextjs-performance",
		),
		post(
			"Modern CSS Techniques",
			"Explore modern CSS features and techniques that will improve your styling workflow.",
			"CSS",
			"2023-12-28",
			6,
			["CSS", "Modern", "Techniques"],
			"modern-css-techniques",
		),
		post(
			"Node.js Best Practices",
			"Learn the best practices for building robust and scalable Node.js applications.",
			"Node.js",
			"2023-12-20",
			15,
			["Node.js", "Backend", "Best Practices"],
			"nodejs-best-practices",
		),
		post(
			"Database Design Principles",
			"Understanding fundamental database design principles for better application architecture.",
			"Database",
			"2023-12-15",
			11,
			["Database", "Design", "Architecture"],
			"database-design-principles",
		),
	])
}
