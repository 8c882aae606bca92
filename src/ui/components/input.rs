//! Input component for text fields.

use leptos::prelude::*;

/// Text input component.
///
/// With `action` set, typing posts the field to that hook route
/// (debounced) and ignores the response.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input
///         input_type="search"
///         placeholder="Search applications..."
///         name="q"
///     />
/// }
/// ```
#[component]
pub fn Input(
    /// Input type (text, search, email, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Hook route posted on input.
    #[prop(optional)]
    action: Option<String>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Autocomplete attribute.
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    let base_classes = "flex h-10 w-full rounded-md border border-input bg-background \
                        px-3 py-2 text-sm placeholder:text-muted-foreground \
                        focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring \
                        focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

    let classes = format!("{} {}", base_classes, class);
    let trigger = action
        .is_some()
        .then_some("input changed delay:300ms");
    let swap = action.is_some().then_some("none");

    view! {
        <input
            type=input_type
            class=classes
            placeholder=placeholder
            name=name
            autocomplete=autocomplete
            hx-post=action
            hx-trigger=trigger
            hx-swap=swap
        />
    }
}
