//! Card component with header, title, description and content.

use leptos::prelude::*;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card>
///         <CardHeader>
///             <CardTitle>"Recent Communications"</CardTitle>
///             <CardDescription>"Latest messages from your counsellors"</CardDescription>
///         </CardHeader>
///         <CardContent>
///             <p>"Content goes here"</p>
///         </CardContent>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "rounded-lg border border-border bg-card text-card-foreground shadow-sm {}",
        class
    );

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card header section.
#[component]
pub fn CardHeader(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Header content.
    children: Children,
) -> impl IntoView {
    let classes = format!("flex flex-col space-y-1.5 p-6 {}", class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card title heading.
#[component]
pub fn CardTitle(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!("text-2xl font-semibold leading-none tracking-tight {}", class);

    view! {
        <h3 class=classes>
            {children()}
        </h3>
    }
}

/// Muted line under a card title.
#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! {
        <p class="text-sm text-muted-foreground">
            {children()}
        </p>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = format!("p-6 pt-0 {}", class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
