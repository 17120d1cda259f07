//! Headless frontend that prints the home screen to stdout.
use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use client_api::models::{GroupWithMembers, UserProfile, Wish};
use client_core::{AppContext, AppView, Frontend};
use client_host::HostUser;

/// Renders the home page once: profile summary, recent wishes, and groups.
///
/// Fails when the host is missing, since no request could be authenticated.
#[derive(Debug, Default)]
pub struct ConsoleFrontend;

impl ConsoleFrontend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Frontend for ConsoleFrontend {
    async fn run(&mut self, ctx: AppContext) -> Result<()> {
        if let Some(headline) = ctx.view().headline() {
            println!("{}", headline);
        }

        let identity = ready_identity(ctx.settled_view().await)?;

        if let Some(user) = &identity {
            tracing::info!("Signed in as {} ({})", user.display_name(), user.id);
        }

        let service = ctx.service();
        let profile = service.profile().await.context("Failed to load profile")?;
        let recent = service
            .recent_wishes()
            .await
            .context("Failed to load recent wishes")?;
        let groups = service.groups().await.context("Failed to load groups")?;

        print!("{}", render_home(&profile, &recent.items, &groups));
        Ok(())
    }
}

/// Identity of a ready view; any other settled view is reported once, as the
/// returned error.
fn ready_identity(view: AppView) -> Result<Option<HostUser>> {
    match view {
        AppView::Ready { identity, .. } => Ok(identity),
        view => bail!("{}", view.headline().unwrap_or_default()),
    }
}

fn render_home(profile: &UserProfile, recent: &[Wish], groups: &[GroupWithMembers]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Hello, {}!", profile.user.full_name());
    let _ = writeln!(
        out,
        "Wishes: {}  Fulfilled: {}  Groups: {}",
        profile.wishes_count, profile.completed_wishes_count, profile.groups_count
    );

    let _ = writeln!(out, "\nRecent wishes");
    if recent.is_empty() {
        let _ = writeln!(out, "  (none yet)");
    }
    for wish in recent {
        let _ = writeln!(out, "  {}", render_wish(wish));
    }

    let _ = writeln!(out, "\nGroups");
    if groups.is_empty() {
        let _ = writeln!(out, "  (none yet)");
    }
    for entry in groups {
        let _ = writeln!(
            out,
            "  {} ({} members)",
            entry.group.name, entry.member_count
        );
    }

    out
}

fn render_wish(wish: &Wish) -> String {
    let mut line = format!("[{}] {}", wish.priority, wish.title);
    if let Some(price) = wish.price {
        let _ = write!(line, " - {:.2} {}", price, wish.currency);
    }
    if wish.is_completed() {
        line.push_str(" (fulfilled)");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wish(json: &str) -> Wish {
        client_api::ApiResponse::<Wish>::new(
            client_api::StatusCode::OK,
            Default::default(),
            json.as_bytes().to_vec(),
        )
        .data()
        .unwrap()
    }

    #[test]
    fn test_host_required_is_an_error() {
        let err = ready_identity(AppView::HostRequired).unwrap_err();
        assert_eq!(
            err.to_string(),
            AppView::HostRequired.headline().unwrap_or_default()
        );
    }

    #[test]
    fn test_render_wish() {
        let open = wish(
            r#"{"id":1,"user_id":1,"title":"Bike","price":"120.5","priority":3,"created_at":"now"}"#,
        );
        assert_eq!(render_wish(&open), "[High] Bike - 120.50 RUB");

        let done = wish(r#"{"id":2,"user_id":1,"title":"Book","status":"completed","created_at":"now"}"#);
        assert_eq!(render_wish(&done), "[Medium] Book (fulfilled)");
    }
}
