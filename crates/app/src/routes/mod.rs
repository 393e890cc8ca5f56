pub mod admin_dashboard;
pub mod not_found;
pub mod user_dashboard;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdMapPin};
use dioxus_free_icons::Icon;

use crate::spots::use_spots_provider;

use admin_dashboard::AdminDashboard;
use not_found::NotFound;
use user_dashboard::UserDashboard;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    UserDashboard {},
    #[route("/admin")]
    AdminDashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Top app bar with the page title and links between the two views.
#[component]
fn Shell() -> Element {
    let route: Route = use_route();
    use_spots_provider();

    let title = match &route {
        Route::AdminDashboard {} => "Squirrel Hill - Parking Management Admin Dashboard",
        _ => "Squirrel Hill Parking",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        document::Title { "{title}" }

        header { class: "app-bar",
            h1 { class: "app-bar-title", "{title}" }
            nav { class: "app-bar-nav",
                Link {
                    to: Route::UserDashboard {},
                    class: if matches!(route, Route::UserDashboard {}) { "app-bar-link active" } else { "app-bar-link" },
                    Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                    "Find Parking"
                }
                Link {
                    to: Route::AdminDashboard {},
                    class: if matches!(route, Route::AdminDashboard {}) { "app-bar-link active" } else { "app-bar-link" },
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                    "Admin"
                }
            }
        }
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
