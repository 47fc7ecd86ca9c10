#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
pub fn create_tecnico_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "test-tecnico".to_string(),
        nombre: Some("Equipo Técnico de Prueba".to_string()),
        roles: vec!["tecnico".to_string()],
    }
}

#[cfg(test)]
pub fn create_supervisor_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "test-supervisor".to_string(),
        nombre: Some("Supervisión de Prueba".to_string()),
        roles: vec!["supervisor".to_string()],
    }
}

#[cfg(test)]
pub fn with_user_auth(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                let response: Response = next.run(request).await;
                response
            }
        },
    ))
}
