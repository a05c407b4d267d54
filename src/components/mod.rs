//! Reusable UI components shared by pages.

pub mod nav_bar;
pub mod notice_banner;
pub mod route_guard;
