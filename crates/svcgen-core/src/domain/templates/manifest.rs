//! `package.json` for a workspace service.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::ScaffoldRequest;

/// Shared workspace packages every service depends on.
const SHARED_PACKAGES: [&str; 6] = [
    "@shared/config",
    "@shared/utils",
    "@shared/providers",
    "@shared/middlewares",
    "@shared/cloudinary",
    "@shared/env-loader",
];

const WORKSPACE_PROTOCOL: &str = "workspace:*";
const NODEMON_VERSION: &str = "^3.1.11";

/// npm manifest, serialised with the field order npm itself uses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    pub scripts: BTreeMap<String, String>,
    pub keywords: Vec<String>,
    pub author: String,
    pub license: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    pub fn for_request(request: &ScaffoldRequest) -> Self {
        let scripts = BTreeMap::from([
            ("start".to_owned(), "node index.js".to_owned()),
            ("dev".to_owned(), "nodemon index.js".to_owned()),
        ]);

        let dependencies = SHARED_PACKAGES
            .iter()
            .map(|pkg| ((*pkg).to_owned(), WORKSPACE_PROTOCOL.to_owned()))
            .collect();

        let dev_dependencies =
            BTreeMap::from([("nodemon".to_owned(), NODEMON_VERSION.to_owned())]);

        Self {
            name: request.service_name().package_name(),
            version: "1.0.0".into(),
            description: String::new(),
            main: "index.js".into(),
            scripts,
            keywords: Vec::new(),
            author: String::new(),
            license: "ISC".into(),
            module_type: "module".into(),
            dependencies,
            dev_dependencies,
        }
    }
}

pub(super) fn render(request: &ScaffoldRequest) -> String {
    let manifest = PackageManifest::for_request(request);
    // Serialising string maps and strings cannot fail.
    let mut json = serde_json::to_string_pretty(&manifest).unwrap_or_default();
    json.push('\n');
    json
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn parsed(name: &str) -> Value {
        let req = ScaffoldRequest::parse(name, "3003").unwrap();
        serde_json::from_str(&render(&req)).expect("package.json must be valid JSON")
    }

    #[test]
    fn name_is_service_suffixed() {
        assert_eq!(parsed("order")["name"], "order-service");
        assert_eq!(parsed("user-profile")["name"], "user-profile-service");
    }

    #[test]
    fn scripts_start_and_dev() {
        let json = parsed("order");
        assert_eq!(json["scripts"]["start"], "node index.js");
        assert_eq!(json["scripts"]["dev"], "nodemon index.js");
        assert_eq!(json["type"], "module");
        assert_eq!(json["main"], "index.js");
    }

    #[test]
    fn shared_dependencies_use_workspace_protocol() {
        let json = parsed("order");
        let deps = json["dependencies"].as_object().unwrap();
        assert_eq!(deps.len(), 6);
        assert!(deps.values().all(|v| v == "workspace:*"));
        assert!(deps.contains_key("@shared/env-loader"));
    }

    #[test]
    fn single_dev_dependency_is_file_watcher() {
        let json = parsed("order");
        let dev = json["devDependencies"].as_object().unwrap();
        assert_eq!(dev.len(), 1);
        assert_eq!(dev["nodemon"], "^3.1.11");
    }

    #[test]
    fn uses_two_space_indent() {
        let req = ScaffoldRequest::parse("order", "3003").unwrap();
        let text = render(&req);
        assert!(text.contains("\n  \"name\": \"order-service\""));
        assert!(text.ends_with("}\n"));
    }
}
