//! Role-based access to the admin service.
//!
//! Authentication itself happens upstream: a reverse proxy (or the host application)
//! signs the user in and forwards the identity in two trusted headers. This module
//! only turns those headers into a [`Principal`] and checks it against the
//! configured role lists.

use crate::config::UiConfig;
use crate::services::ServiceError;
use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// Name of the signed-in user.
pub const USER_HEADER: &str = "X-Authenticated-User";
/// Comma separated role names of the signed-in user.
pub const ROLES_HEADER: &str = "X-User-Roles";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    pub name: Option<String>,
    pub roles: Vec<String>,
}

impl Principal {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let name = headers
            .get(USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        let roles = headers
            .get(ROLES_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { name, roles }
    }

    pub fn is_authenticated(&self) -> bool {
        self.name.is_some()
    }

    pub fn is_in_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_in_any_role(&self, roles: &[String]) -> bool {
        roles.iter().any(|role| self.is_in_role(role))
    }
}

impl FromRequest for Principal {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Principal::from_headers(req.headers())))
    }
}

/// What an authorized caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub is_admin: bool,
}

/// Admins and editors may use the service; everybody else is turned away.
pub fn authorize(principal: &Principal, ui: &UiConfig) -> Result<Access, ServiceError> {
    if !principal.is_authenticated() {
        return Err(ServiceError::Unauthorized);
    }

    let is_admin = principal.is_in_any_role(&ui.authorized_admin_roles);
    if is_admin || principal.is_in_any_role(&ui.authorized_editor_roles) {
        Ok(Access { is_admin })
    } else {
        Err(ServiceError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn principal(name: Option<&str>, roles: &str) -> Principal {
        let mut req = TestRequest::default().insert_header((ROLES_HEADER, roles));
        if let Some(name) = name {
            req = req.insert_header((USER_HEADER, name));
        }
        Principal::from_headers(req.to_http_request().headers())
    }

    #[test]
    fn roles_header_is_split_and_trimmed() {
        let p = principal(Some("anna"), " Admin , Editors,,");

        assert_eq!(p.name.as_deref(), Some("anna"));
        assert_eq!(p.roles, vec!["Admin", "Editors"]);
    }

    #[test]
    fn admin_role_grants_admin_mode() {
        let ui = UiConfig::default();
        let access = authorize(&principal(Some("anna"), "LocalizationAdmins"), &ui).unwrap();

        assert!(access.is_admin);
    }

    #[test]
    fn editor_role_grants_access_without_admin_mode() {
        let ui = UiConfig::default();
        let access = authorize(&principal(Some("erik"), "LocalizationEditors"), &ui).unwrap();

        assert!(!access.is_admin);
    }

    #[test]
    fn other_roles_are_forbidden() {
        let ui = UiConfig::default();

        assert!(matches!(
            authorize(&principal(Some("guest"), "Visitors"), &ui),
            Err(ServiceError::Forbidden)
        ));
    }

    #[test]
    fn roles_without_user_are_unauthorized() {
        let ui = UiConfig::default();

        assert!(matches!(
            authorize(&principal(None, "LocalizationAdmins"), &ui),
            Err(ServiceError::Unauthorized)
        ));
    }
}
