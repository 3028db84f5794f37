//! Express service sources.

use crate::domain::entities::ScaffoldRequest;

/// `index.js`: load env, connect the shared database, start listening.
pub(super) fn entry_point(request: &ScaffoldRequest) -> String {
    let port = request.port();
    format!(
        r#"import "@shared/env-loader";
import {{ database as connectDB }} from "@shared/config";
import createApp from "./config/express.config.js";

const PORT = process.env.PORT || {port};

async function startServer() {{
  console.log("> Starting server...");

  await connectDB();

  const app = createApp();

  app.listen(PORT, () => {{
    console.log(`> Server running on port ${{PORT}}`);
  }});
}}

startServer().catch((error) => {{
  console.error("> Failed to start server:", error);
  process.exit(1);
}});
"#
    )
}

/// `config/express.config.js`: body parsing, CORS, routes under `/api`.
pub(super) fn express_config(_request: &ScaffoldRequest) -> String {
    r#"import express from "express";
import cors from "cors";
import routes from "../index.route.js";

export default function createApp() {
  const app = express();

  console.log("> Middleware configured");

  app.use(cors());
  app.use(express.json());
  app.use(express.urlencoded({ extended: true }));

  console.log("> Routes initialized");
  app.use("/api", routes);

  return app;
}
"#
    .to_owned()
}

/// `index.route.js`: the router mounted under `/api`.
pub(super) fn route_index(_request: &ScaffoldRequest) -> String {
    r#"import { Router } from "express";
import { healthCheck } from "./src/health.route.js";

const router = Router();

/**
 * @route GET /api/health
 * @description Health check endpoint
 */
router.get("/health", healthCheck);

// TODO: Add your routes here
// Example:
// import exampleRoutes from "./src/example/example.route.js";
// router.use("/examples", exampleRoutes);

export default router;
"#
    .to_owned()
}

/// `src/health.route.js`: fixed success payload for the health check.
pub(super) fn health_route(request: &ScaffoldRequest) -> String {
    let package = request.service_name().package_name();
    format!(
        r#"import {{ sendResponse }} from "@shared/utils";

/**
 * GET /api/health handler for {package}.
 */
export function healthCheck(req, res) {{
  sendResponse(res, 200, "Server is running", {{ status: "ok" }}, null);
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req() -> ScaffoldRequest {
        ScaffoldRequest::parse("order", "3003").unwrap()
    }

    #[test]
    fn entry_point_falls_back_to_literal_port() {
        let js = entry_point(&req());
        assert!(js.contains("const PORT = process.env.PORT || 3003;"));
        assert!(js.contains("await connectDB();"));
        assert!(js.contains("process.exit(1);"));
        assert!(js.contains("console.log(`> Server running on port ${PORT}`);"));
    }

    #[test]
    fn express_config_mounts_routes_under_api() {
        let js = express_config(&req());
        assert!(js.contains(r#"app.use("/api", routes);"#));
        assert!(js.contains("app.use(cors());"));
        assert!(js.contains("app.use(express.json());"));
        assert!(js.contains("express.urlencoded({ extended: true })"));
    }

    #[test]
    fn route_index_declares_health_route() {
        let js = route_index(&req());
        assert!(js.contains(r#"router.get("/health", healthCheck);"#));
        assert!(js.contains("@route GET /api/health"));
        assert!(js.contains("Add your routes here"));
    }

    #[test]
    fn health_route_returns_ok_payload() {
        let js = health_route(&req());
        assert!(js.contains("export function healthCheck(req, res) {"));
        assert!(js.contains(r#"{ status: "ok" }"#));
        assert!(js.contains("order-service"));
    }
}
