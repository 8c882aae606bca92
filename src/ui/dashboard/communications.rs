//! Communications panel.

use std::sync::Arc;

use leptos::prelude::*;

use crate::dashboard::{Action, CommunicationRow, Fixtures, Listing, Tab, communication_rows};
use crate::ui::components::{
    Avatar, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    MessageSquareIcon, TabsContent,
};

use super::badges::PriorityBadge;

#[component]
pub fn CommunicationsPanel(fixtures: Arc<Fixtures>) -> impl IntoView {
    let rows: Vec<_> = communication_rows(&fixtures.communications, Listing::Full).collect();

    view! {
        <TabsContent tab=Tab::Communications>
            <div class="flex items-center justify-between">
                <h3 class="text-2xl font-bold">"Communications"</h3>
                <Button action=Action::NewMessage.href(None)>
                    <MessageSquareIcon class="mr-2" />
                    "New Message"
                </Button>
            </div>

            <div class="space-y-4">
                {rows.into_iter().map(|row| view! { <CommunicationCard row=row /> }).collect_view()}
            </div>
        </TabsContent>
    }
}

#[component]
fn CommunicationCard(row: CommunicationRow) -> impl IntoView {
    let reply = Action::Reply.href(Some(&row.id));
    let mark_read = Action::MarkAsRead.href(Some(&row.id));

    view! {
        <Card>
            <CardContent class="p-6">
                <div class="flex gap-4" data-communication=row.id>
                    <Avatar fallback=row.initials />
                    <div class="flex-1">
                        <div class="flex items-center justify-between mb-3">
                            <h4 class="font-semibold">{row.counsellor}</h4>
                            <div class="flex items-center gap-2">
                                <PriorityBadge label=row.priority tone=row.priority_tone />
                                <Badge variant=BadgeVariant::Outline>{row.kind}</Badge>
                                <span class="text-sm text-muted-foreground">{row.timestamp}</span>
                            </div>
                        </div>
                        <p class="text-muted-foreground mb-4">{row.message}</p>
                        <div class="flex gap-2">
                            <Button size=ButtonSize::Sm action=reply>"Reply"</Button>
                            <Button
                                size=ButtonSize::Sm
                                variant=ButtonVariant::Outline
                                action=mark_read
                            >
                                "Mark as Read"
                            </Button>
                        </div>
                    </div>
                </div>
            </CardContent>
        </Card>
    }
}
