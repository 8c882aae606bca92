//! Applications panel.

use std::sync::Arc;

use leptos::prelude::*;

use crate::dashboard::{Action, ApplicationRow, Fixtures, Listing, Tab, application_rows};
use crate::ui::components::{
    Avatar, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, FilterIcon, Input, Progress, SearchIcon, TabsContent,
};

use super::badges::{DetailRow, StatusBadge};

/// Every application, with search and filter controls that do not filter.
#[component]
pub fn ApplicationsPanel(fixtures: Arc<Fixtures>) -> impl IntoView {
    let rows: Vec<_> = application_rows(&fixtures.applications, Listing::Full).collect();

    view! {
        <TabsContent tab=Tab::Applications>
            <div class="flex items-center justify-between">
                <h3 class="text-2xl font-bold">"Your Applications"</h3>
                <div class="flex gap-2">
                    <div class="relative">
                        <SearchIcon class="absolute left-3 top-1/2 -translate-y-1/2 text-muted-foreground" />
                        <Input
                            input_type="search"
                            name="q"
                            placeholder="Search applications..."
                            action=Action::Search.href(None)
                            class="pl-10 w-64"
                        />
                    </div>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Icon
                        label="Filter applications"
                        action=Action::Filter.href(None)
                    >
                        <FilterIcon />
                    </Button>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                {rows.into_iter().map(|row| view! { <ApplicationCard row=row /> }).collect_view()}
            </div>
        </TabsContent>
    }
}

#[component]
fn ApplicationCard(row: ApplicationRow) -> impl IntoView {
    let details = Action::ViewDetails.href(Some(&row.id));
    let logo_alt = row.university.clone();

    view! {
        <Card>
            <div data-application=row.id>
                <CardHeader>
                    <div class="flex items-center justify-between">
                        <div class="flex items-center gap-3">
                            <Avatar src=row.logo alt=logo_alt fallback=row.initials />
                            <div>
                                <CardTitle class="text-lg">{row.university}</CardTitle>
                                <CardDescription>{row.program}</CardDescription>
                            </div>
                        </div>
                        <StatusBadge status=row.status />
                    </div>
                </CardHeader>
                <CardContent>
                    <div class="space-y-4">
                        <div>
                            <div class="flex justify-between text-sm mb-2">
                                <span>"Application Progress"</span>
                                <span>{format!("{}%", row.progress)}</span>
                            </div>
                            <Progress value=row.progress />
                        </div>
                        <DetailRow label="Country:" value=row.country />
                        <DetailRow label="Deadline:" value=row.deadline />
                        <Button variant=ButtonVariant::Outline class="w-full" action=details>
                            "View Details"
                        </Button>
                    </div>
                </CardContent>
            </div>
        </Card>
    }
}
