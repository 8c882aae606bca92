//! Avatar component with image and fallback support.

use leptos::prelude::*;

/// Avatar component for displaying user or institution images.
///
/// The fallback initials sit underneath the image and show through when
/// there is no image or it fails to load.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar src="/placeholder.svg" alt="Student" fallback="JD" />
/// }
/// ```
#[component]
pub fn Avatar(
    /// Image source URL.
    #[prop(into, optional)]
    src: String,
    /// Alt text for the image.
    #[prop(into, default = "Avatar".to_string())]
    alt: String,
    /// Fallback text (initials) when image fails to load.
    #[prop(into, optional)]
    fallback: String,
    /// Size class (e.g., "h-10 w-10").
    #[prop(default = "h-10 w-10")]
    size: &'static str,
) -> impl IntoView {
    let container_classes = format!("relative flex shrink-0 overflow-hidden rounded-full {size}");

    let image = (!src.is_empty()).then(|| {
        view! {
            <img
                class="absolute inset-0 aspect-square h-full w-full object-cover"
                src=src
                alt=alt
                onerror="this.remove()"
            />
        }
    });

    view! {
        <span class=container_classes>
            <span class="flex h-full w-full items-center justify-center rounded-full bg-muted text-sm font-medium">
                {fallback}
            </span>
            {image}
        </span>
    }
}
