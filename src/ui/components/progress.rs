//! Progress bar.

use leptos::prelude::*;

/// Horizontal progress bar for a percentage.
///
/// Values above 100 are drawn full.
#[component]
pub fn Progress(
    /// Percentage filled.
    value: u8,
    /// Additional CSS classes (width/height overrides).
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let value = value.min(100);
    let classes = format!(
        "relative h-4 w-full overflow-hidden rounded-full bg-secondary {}",
        class
    );
    let indicator_style = format!("width: {value}%");

    view! {
        <div
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=value.to_string()
            class=classes
        >
            <div class="h-full bg-primary transition-all" style=indicator_style />
        </div>
    }
}
