use axum::Router;
use domain_users::{InMemoryUserRepository, UserService, handlers};

/// Build the user service over a fresh in-memory store.
///
/// Both user mounts share the returned service, and therefore the store.
pub fn service(seed_sample_users: bool) -> UserService<InMemoryUserRepository> {
    let repository = if seed_sample_users {
        InMemoryUserRepository::new()
    } else {
        InMemoryUserRepository::empty()
    };
    UserService::new(repository)
}

pub fn router(service: UserService<InMemoryUserRepository>) -> Router {
    handlers::router(service)
}
