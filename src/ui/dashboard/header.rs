//! Page header and welcome banner.

use leptos::prelude::*;

use crate::config::StudentConfig;
use crate::ui::components::{
    Avatar, Badge, BellIcon, Button, ButtonSize, ButtonVariant, TrendingUpIcon,
};

/// App mark, notification bell and student avatar.
#[component]
pub fn DashboardHeader(student: StudentConfig, notifications: u32) -> impl IntoView {
    view! {
        <header class="border-b bg-card/50 backdrop-blur">
            <div class="container mx-auto px-4 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <div class="h-10 w-10 rounded-lg bg-primary flex items-center justify-center">
                            <TrendingUpIcon class="h-6 w-6 text-primary-foreground" />
                        </div>
                        <div>
                            <h1 class="text-xl font-bold">"EduTracker"</h1>
                            <p class="text-sm text-muted-foreground">
                                "Your Educational Journey Dashboard"
                            </p>
                        </div>
                    </div>
                    <div class="flex items-center gap-4">
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            label="Notifications"
                            class="relative"
                        >
                            <BellIcon class="h-5 w-5" />
                            <Badge class="absolute -top-1 -right-1 h-5 w-5 rounded-full p-0 flex items-center justify-center">
                                {notifications.to_string()}
                            </Badge>
                        </Button>
                        <Avatar src=student.avatar alt="Student" fallback=student.initials />
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Welcome(#[prop(into)] name: String) -> impl IntoView {
    view! {
        <div class="mb-8">
            <h2 class="text-3xl font-bold mb-2">{format!("Welcome back, {name}!")}</h2>
            <p class="text-muted-foreground">
                "Track your applications, manage communications, and discover opportunities."
            </p>
        </div>
    }
}
