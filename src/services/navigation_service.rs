//! Header navigation service

use crate::{
    middleware::auth::AuthenticatedUser,
    models::{NavLink, Navigation, UserMenu},
};

/// Builds the header for the current session
pub struct NavigationService;

impl NavigationService {
    /// Auth links for guests, a user menu for signed-in users
    pub fn for_session(user: Option<&AuthenticatedUser>) -> Navigation {
        match user {
            None => Navigation::Guest {
                links: vec![
                    NavLink::new("Register", "/register"),
                    NavLink::new("Login", "/login"),
                ],
            },
            Some(user) => {
                let mut items = vec![
                    NavLink::new("Profile", "/profile"),
                    NavLink::new("Dashboard", "/dashboard"),
                ];
                if user.is_admin() {
                    items.push(NavLink::new("Admin Panel", "/admin"));
                }
                items.push(NavLink::new("Sign out", "/logout"));

                Navigation::Member {
                    menu: UserMenu {
                        name: user.name.clone(),
                        email: user.email.clone(),
                        items,
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::roles;
    use uuid::Uuid;

    fn member(role: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            role: role.to_string(),
            expires_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_guest_sees_only_auth_links() {
        let nav = NavigationService::for_session(None);
        let json = serde_json::to_value(&nav).unwrap();

        assert!(matches!(nav, Navigation::Guest { .. }));
        assert_eq!(json["kind"], "guest");
        assert_eq!(json["links"][0]["href"], "/register");
        assert_eq!(json["links"][1]["href"], "/login");
        assert!(json.get("menu").is_none());
    }

    #[test]
    fn test_member_sees_only_menu() {
        let user = member(roles::USER);
        let nav = NavigationService::for_session(Some(&user));
        let json = serde_json::to_value(&nav).unwrap();

        assert!(matches!(nav, Navigation::Member { .. }));
        assert_eq!(json["kind"], "member");
        assert_eq!(json["menu"]["name"], "Grace");
        assert!(json.get("links").is_none());

        let labels: Vec<_> = json["menu"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["label"].as_str().unwrap().to_string())
            .collect();
        assert!(!labels.contains(&"Admin Panel".to_string()));
        assert!(!labels.contains(&"Login".to_string()));
    }

    #[test]
    fn test_admin_menu_links_admin_panel() {
        let user = member(roles::ADMIN);
        let Navigation::Member { menu } = NavigationService::for_session(Some(&user)) else {
            panic!("expected member navigation");
        };

        assert!(menu.items.iter().any(|i| i.href == "/admin"));
    }
}
