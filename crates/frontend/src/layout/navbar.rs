use contracts::enums::Role;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub path: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

const ADMIN_ITEMS: &[NavItem] = &[
    NavItem { path: "/admin/users", icon: "users", label: "Utilisateurs" },
    NavItem { path: "/admin/timesheets", icon: "timesheets", label: "Timesheets" },
    NavItem { path: "/admin/projects", icon: "projects", label: "Projets" },
    NavItem { path: "/admin/assignments", icon: "assignments", label: "Affectations" },
    NavItem { path: "/admin/download", icon: "download", label: "Téléchargement" },
];

const USER_ITEMS: &[NavItem] = &[
    NavItem { path: "/timesheets", icon: "timesheets", label: "Mes timesheets" },
];

pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_ITEMS,
        Role::User => USER_ITEMS,
    }
}

#[component]
pub fn Navbar(role: Role) -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {nav_items(role).iter().map(|item| {
                    view! {
                        <li>
                            <A href=item.path>
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_is_first_link() {
        for role in [Role::Admin, Role::User] {
            assert_eq!(nav_items(role)[0].path, role.home_path());
        }
        assert!(nav_items(Role::User).iter().all(|i| !i.path.starts_with("/admin")));
    }
}
