//! The seven fixed service templates.
//!
//! Every template is a plain function from a validated [`ScaffoldRequest`] to
//! a [`RenderedFile`]. There is no template engine and no runtime template
//! text: what each file contains is visible in this module and its children,
//! and can be checked without touching a filesystem.
//!
//! | Template | Output |
//! |----------|--------|
//! | [`ServiceTemplate::Manifest`] | `package.json` |
//! | [`ServiceTemplate::Environment`] | `.env` |
//! | [`ServiceTemplate::EntryPoint`] | `index.js` |
//! | [`ServiceTemplate::AppSetup`] | `config/express.config.js` |
//! | [`ServiceTemplate::RouteIndex`] | `index.route.js` |
//! | [`ServiceTemplate::HealthRoute`] | `src/health.route.js` |
//! | [`ServiceTemplate::Readme`] | `README.md` |

mod docs;
mod javascript;
mod manifest;

use std::fmt;

use crate::domain::entities::{ScaffoldRequest, common::RelativePath};

pub use manifest::PackageManifest;

/// One generated file: where it goes and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: RelativePath,
    pub content: String,
}

impl RenderedFile {
    fn new(path: &str, content: String) -> Self {
        Self {
            path: RelativePath::new(path),
            content,
        }
    }
}

/// The fixed set of files every new service starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceTemplate {
    Manifest,
    Environment,
    EntryPoint,
    AppSetup,
    RouteIndex,
    HealthRoute,
    Readme,
}

impl ServiceTemplate {
    /// All templates, in the order their files are written.
    pub const ALL: [ServiceTemplate; 7] = [
        Self::Manifest,
        Self::Environment,
        Self::EntryPoint,
        Self::AppSetup,
        Self::RouteIndex,
        Self::HealthRoute,
        Self::Readme,
    ];

    /// Output path relative to the service directory.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Manifest => "package.json",
            Self::Environment => ".env",
            Self::EntryPoint => "index.js",
            Self::AppSetup => "config/express.config.js",
            Self::RouteIndex => "index.route.js",
            Self::HealthRoute => "src/health.route.js",
            Self::Readme => "README.md",
        }
    }

    pub fn render(self, request: &ScaffoldRequest) -> RenderedFile {
        let content = match self {
            Self::Manifest => manifest::render(request),
            Self::Environment => docs::env_file(request),
            Self::EntryPoint => javascript::entry_point(request),
            Self::AppSetup => javascript::express_config(request),
            Self::RouteIndex => javascript::route_index(request),
            Self::HealthRoute => javascript::health_route(request),
            Self::Readme => docs::readme(request),
        };
        RenderedFile::new(self.path(), content)
    }
}

impl fmt::Display for ServiceTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Manifest => "manifest",
            Self::Environment => "environment",
            Self::EntryPoint => "entry-point",
            Self::AppSetup => "app-setup",
            Self::RouteIndex => "route-index",
            Self::HealthRoute => "health-route",
            Self::Readme => "readme",
        };
        f.write_str(name)
    }
}

/// Render every template for `request`, in [`ServiceTemplate::ALL`] order.
pub fn render_all(request: &ScaffoldRequest) -> Vec<RenderedFile> {
    ServiceTemplate::ALL
        .iter()
        .map(|t| t.render(request))
        .collect()
}

/// Word capitalisation: `user-profile` -> `User-Profile`.
///
/// A letter is upper-cased when it follows a non-letter (or starts the
/// string) and lower-cased otherwise.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn order() -> ScaffoldRequest {
        ScaffoldRequest::parse("order", "3003").unwrap()
    }

    #[test]
    fn there_are_seven_templates_with_distinct_paths() {
        let paths: HashSet<_> = ServiceTemplate::ALL.iter().map(|t| t.path()).collect();
        assert_eq!(paths.len(), 7);
    }

    #[test]
    fn render_all_follows_declared_order() {
        let files = render_all(&order());
        let paths: Vec<_> = files.iter().map(|f| f.path.to_string()).collect();
        assert_eq!(
            paths,
            [
                "package.json",
                ".env",
                "index.js",
                "config/express.config.js",
                "index.route.js",
                "src/health.route.js",
                "README.md",
            ]
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_all(&order()), render_all(&order()));
    }

    #[test]
    fn every_file_is_non_empty() {
        for file in render_all(&order()) {
            assert!(!file.content.trim().is_empty(), "{} is empty", file.path);
        }
    }

    #[test]
    fn title_case_capitalises_words() {
        assert_eq!(title_case("order"), "Order");
        assert_eq!(title_case("user-profile"), "User-Profile");
        assert_eq!(title_case("user_profile"), "User_Profile");
        assert_eq!(title_case("API"), "Api");
        assert_eq!(title_case("v2api"), "V2Api");
    }

    #[test]
    fn display_names() {
        assert_eq!(ServiceTemplate::HealthRoute.to_string(), "health-route");
        assert_eq!(ServiceTemplate::Manifest.to_string(), "manifest");
    }
}
