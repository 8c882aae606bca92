//! Recommendations panel.

use std::sync::Arc;

use leptos::prelude::*;

use crate::dashboard::{Action, Fixtures, RecommendationRow, Tab, recommendation_rows};
use crate::ui::components::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    CheckCircleIcon, StarIcon, TabsContent,
};

use super::badges::DetailRow;

#[component]
pub fn RecommendationsPanel(fixtures: Arc<Fixtures>) -> impl IntoView {
    let rows: Vec<_> = recommendation_rows(&fixtures.recommendations).collect();

    view! {
        <TabsContent tab=Tab::Recommendations>
            <div class="flex items-center justify-between">
                <div>
                    <h3 class="text-2xl font-bold">"University Recommendations"</h3>
                    <p class="text-muted-foreground">
                        "Personalized recommendations based on your profile and preferences"
                    </p>
                </div>
                <Button
                    variant=ButtonVariant::Outline
                    action=Action::AdjustPreferences.href(None)
                >
                    "Adjust Preferences"
                </Button>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 xl:grid-cols-3 gap-6">
                {rows.into_iter().map(|row| view! { <RecommendationCard row=row /> }).collect_view()}
            </div>
        </TabsContent>
    }
}

#[component]
fn RecommendationCard(row: RecommendationRow) -> impl IntoView {
    let apply = Action::Apply.href(Some(&row.id));
    let favorite = Action::Favorite.href(Some(&row.id));

    view! {
        <Card>
            <div data-recommendation=row.id>
                <CardHeader>
                    <div class="flex items-center justify-between mb-2">
                        <CardTitle class="text-lg">{row.university}</CardTitle>
                        <div class="flex items-center gap-1">
                            <StarIcon class="fill-yellow-400 text-yellow-400" />
                            <span class="text-sm font-medium">{format!("{}%", row.match_score)}</span>
                        </div>
                    </div>
                    <CardDescription>{row.program}</CardDescription>
                </CardHeader>
                <CardContent>
                    <div class="space-y-4">
                        <div class="space-y-2">
                            <h5 class="font-medium text-sm">"Why this matches you:"</h5>
                            <ul class="text-sm text-muted-foreground space-y-1">
                                {row
                                    .reasons
                                    .into_iter()
                                    .map(|reason| {
                                        view! {
                                            <li class="flex items-center gap-2">
                                                <CheckCircleIcon class="h-3 w-3 text-success" />
                                                {reason}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div class="space-y-2">
                            <DetailRow label="Country:" value=row.country />
                            <DetailRow label="Ranking:" value=row.ranking />
                            <DetailRow label="Acceptance Rate:" value=row.acceptance_rate />
                            <DetailRow label="Tuition:" value=row.tuition_fee value_class="font-medium" />
                        </div>
                        <div class="flex gap-2">
                            <Button class="flex-1" action=apply>"Apply Now"</Button>
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Icon
                                label="Favorite"
                                action=favorite
                            >
                                <StarIcon />
                            </Button>
                        </div>
                    </div>
                </CardContent>
            </div>
        </Card>
    }
}
