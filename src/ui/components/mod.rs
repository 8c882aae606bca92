//! ShadCN-style reusable UI components.
//!
//! This module provides a set of composable, accessible UI components
//! inspired by shadcn/ui, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants, optionally posting to a hook
//! - [`Card`], [`CardHeader`], [`CardTitle`], [`CardDescription`], [`CardContent`]: Card container
//! - [`Input`]: Text input field
//! - [`Badge`]: Status badge/tag
//! - [`Avatar`]: Image avatar with initials fallback
//! - [`Progress`]: Percentage bar
//! - [`TabsList`], [`TabsTrigger`], [`TabsContent`]: Tab strip and panels
//! - Icons: one SVG component per [`crate::dashboard::Icon`], plus [`IconGlyph`]

mod avatar;
mod badge;
mod button;
mod card;
mod icons;
mod input;
mod progress;
mod tabs;

pub use avatar::Avatar;
pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use icons::*;
pub use input::Input;
pub use progress::Progress;
pub use tabs::{TABS_ROOT_ID, TabsContent, TabsList, TabsTrigger};
