use leptos::prelude::*;

/// SVG icon served from `/icons`
#[component]
pub fn Icon(
    /// Icon file name without the `.svg` extension
    name: &'static str,
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names available under `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const CALENDAR: &str = "calendar";
    pub const CHECK: &str = "check";
    pub const CLOCK: &str = "clock";
    pub const COPY: &str = "copy";
    pub const DOWNLOAD: &str = "download";
    pub const EDIT: &str = "edit";
    pub const EYE: &str = "eye";
    pub const FILE_TEXT: &str = "file-text";
    pub const LOADER: &str = "loader";
    pub const LOGOUT: &str = "logout";
    pub const PLUS: &str = "plus";
    pub const SAVE: &str = "save";
    pub const SEARCH: &str = "search";
    pub const SPARKLES: &str = "sparkles";
    pub const TRASH: &str = "trash";
    pub const USER: &str = "user";
    pub const VIDEO: &str = "video";
    pub const X: &str = "x";
}
