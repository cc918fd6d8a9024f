use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for styling
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_UP: &str = "chevron-up";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const CHECK: &str = "check";
    pub const TRUCK: &str = "truck";
    pub const PACKAGE: &str = "package";
    pub const MAP_PIN: &str = "map-pin";
    pub const PHONE: &str = "phone";
    pub const MAIL: &str = "mail";
    pub const CLOCK: &str = "clock";
}
