//! Static description of the route groups this API serves.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RouteEntry {
    pub path: String,
    pub method: String,
    pub name: String,
}

/// A logical grouping of routes under a shared prefix
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RouteGroup {
    pub name: String,
    pub prefix: String,
    pub routes: Vec<RouteEntry>,
}

impl RouteGroup {
    fn new(name: &str, prefix: &str, routes: &[(&str, &str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            prefix: prefix.to_string(),
            routes: routes
                .iter()
                .map(|(method, path, name)| RouteEntry {
                    path: path.to_string(),
                    method: method.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}

fn user_routes(prefix: &str) -> Vec<(&'static str, String, &'static str)> {
    vec![
        ("GET", prefix.to_string(), "GetUsers"),
        ("POST", prefix.to_string(), "CreateUser"),
        ("GET", format!("{prefix}/{{id}}"), "GetUser"),
        ("PUT", format!("{prefix}/{{id}}"), "UpdateUser"),
        ("DELETE", format!("{prefix}/{{id}}"), "DeleteUser"),
    ]
}

fn user_group(name: &str, prefix: &str) -> RouteGroup {
    let routes = user_routes(prefix);
    let borrowed: Vec<(&str, &str, &str)> = routes
        .iter()
        .map(|(method, path, name)| (*method, path.as_str(), *name))
        .collect();
    RouteGroup::new(name, prefix, &borrowed)
}

/// Every route group mounted by [`crate::api::app`]
pub fn route_groups() -> Vec<RouteGroup> {
    vec![
        RouteGroup::new(
            "Basic Routes",
            "",
            &[
                ("GET", "/", "Home"),
                ("GET", "/ping", "Ping"),
                ("GET", "/health", "Health"),
            ],
        ),
        user_group("User Routes", "/users"),
        RouteGroup::new(
            "API v1 Routes",
            "/api/v1",
            &[
                ("GET", "/api/v1/health", "Health"),
                ("GET", "/api/v1/status", "Status"),
                ("GET", "/api/v1/version", "Version"),
                ("GET", "/api/v1/routes", "Routes"),
            ],
        ),
        user_group("API v1 User Routes", "/api/v1/users"),
        RouteGroup::new(
            "API v2 Routes",
            "/api/v2",
            &[("GET", "/api/v2/health", "Health")],
        ),
        RouteGroup::new(
            "Documentation",
            "",
            &[
                ("GET", "/api-docs/openapi.json", "OpenApiSpec"),
                ("GET", "/scalar", "Scalar"),
                ("GET", "/redoc", "Redoc"),
                ("GET", "/rapidoc", "RapiDoc"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_groups_list_crud_routes() {
        let groups = route_groups();
        let users = groups
            .iter()
            .find(|g| g.prefix == "/api/v1/users")
            .unwrap();

        let routes: Vec<(&str, &str)> = users
            .routes
            .iter()
            .map(|r| (r.method.as_str(), r.path.as_str()))
            .collect();
        assert_eq!(
            routes,
            [
                ("GET", "/api/v1/users"),
                ("POST", "/api/v1/users"),
                ("GET", "/api/v1/users/{id}"),
                ("PUT", "/api/v1/users/{id}"),
                ("DELETE", "/api/v1/users/{id}"),
            ]
        );
    }

    #[test]
    fn test_routes_start_with_group_prefix() {
        for group in route_groups() {
            for route in &group.routes {
                assert!(
                    route.path.starts_with(&group.prefix),
                    "{} is outside {}",
                    route.path,
                    group.prefix
                );
            }
        }
    }
}
