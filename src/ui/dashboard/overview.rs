//! Overview panel: literal counters plus the most recent applications and
//! communications.

use std::sync::Arc;

use leptos::prelude::*;

use crate::dashboard::{
    ApplicationRow, CommunicationRow, Fixtures, Listing, OverviewStat, Tab, application_rows,
    communication_rows,
};
use crate::ui::components::{
    Avatar, Card, CardContent, CardDescription, CardHeader, CardTitle, IconGlyph, Progress,
    TabsContent,
};

use super::badges::{PriorityBadge, StatusBadge};

#[component]
pub fn OverviewPanel(fixtures: Arc<Fixtures>) -> impl IntoView {
    let stats = fixtures.stats.clone();
    let applications: Vec<_> = application_rows(&fixtures.applications, Listing::Recent).collect();
    let communications: Vec<_> =
        communication_rows(&fixtures.communications, Listing::Recent).collect();

    view! {
        <TabsContent tab=Tab::Overview>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {stats.into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>"Recent Application Updates"</CardTitle>
                    <CardDescription>"Latest updates on your university applications"</CardDescription>
                </CardHeader>
                <CardContent>
                    <div class="space-y-4">
                        {applications
                            .into_iter()
                            .map(|row| view! { <ApplicationSummary row=row /> })
                            .collect_view()}
                    </div>
                </CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>"Recent Communications"</CardTitle>
                    <CardDescription>"Latest messages from your counsellors"</CardDescription>
                </CardHeader>
                <CardContent>
                    <div class="space-y-4">
                        {communications
                            .into_iter()
                            .map(|row| view! { <CommunicationSummary row=row /> })
                            .collect_view()}
                    </div>
                </CardContent>
            </Card>
        </TabsContent>
    }
}

#[component]
fn StatCard(stat: OverviewStat) -> impl IntoView {
    view! {
        <Card>
            <CardHeader class="flex flex-row items-center justify-between space-y-0 pb-2">
                <CardTitle class="text-sm font-medium">{stat.title}</CardTitle>
                <IconGlyph icon=stat.icon class=stat.tone.text_class() />
            </CardHeader>
            <CardContent>
                <div class="text-2xl font-bold">{stat.value.to_string()}</div>
                <p class="text-xs text-muted-foreground">{stat.caption}</p>
            </CardContent>
        </Card>
    }
}

#[component]
fn ApplicationSummary(row: ApplicationRow) -> impl IntoView {
    let logo_alt = row.university.clone();

    view! {
        <div class="flex items-center justify-between p-4 border rounded-lg" data-application=row.id>
            <div class="flex items-center gap-4">
                <Avatar src=row.logo alt=logo_alt fallback=row.initials />
                <div>
                    <h4 class="font-medium">{row.university}</h4>
                    <p class="text-sm text-muted-foreground">{row.program}</p>
                </div>
            </div>
            <div class="flex items-center gap-4">
                <div class="text-right">
                    <Progress value=row.progress class="w-20 h-2" />
                    <p class="text-xs text-muted-foreground mt-1">
                        {format!("{}% complete", row.progress)}
                    </p>
                </div>
                <StatusBadge status=row.status />
            </div>
        </div>
    }
}

#[component]
fn CommunicationSummary(row: CommunicationRow) -> impl IntoView {
    view! {
        <div class="flex gap-4 p-4 border rounded-lg" data-communication=row.id>
            <Avatar fallback=row.initials size="h-8 w-8" />
            <div class="flex-1">
                <div class="flex items-center justify-between mb-2">
                    <h4 class="font-medium">{row.counsellor}</h4>
                    <div class="flex items-center gap-2">
                        <PriorityBadge label=row.priority tone=row.priority_tone />
                        <span class="text-xs text-muted-foreground">{row.timestamp}</span>
                    </div>
                </div>
                <p class="text-sm text-muted-foreground">{row.message}</p>
            </div>
        </div>
    }
}
