//! # Share Nest Binary
//!
//! Assembles an `AppContext` from settings and compile-time features, then
//! walks through one member session: sign in, list an item, ask for one,
//! browse, and sign out.

use anyhow::{bail, Context, Result};
use configs::{LogFormat, Settings};
use sn_core::{
    AppContext, AuthProvider, Availability, Category, Condition, Credentials, ItemDetails, ItemFilter,
    RequestDetails, SessionStore, Urgency,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[cfg(feature = "auth-simple")]
use sn_auth_simple::SimpleAuthProvider;

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log.level));
    let registry = tracing_subscriber::registry().with(filter);

    match settings.log.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init(),
    }
}

#[cfg(feature = "auth-simple")]
fn auth_provider(settings: &Settings) -> Result<Box<dyn AuthProvider>> {
    let auth = SimpleAuthProvider::with_score_range(settings.auth.score_range())
        .context("invalid auth score range")?;
    Ok(Box::new(auth))
}

#[cfg(not(feature = "auth-simple"))]
fn auth_provider(_settings: &Settings) -> Result<Box<dyn AuthProvider>> {
    bail!("no auth provider compiled in; enable the `auth-simple` feature")
}

fn build_context(settings: &Settings) -> Result<AppContext> {
    // 1. Id generation
    let store = SessionStore::with_id_generator(settings.session.id_strategy.generator());

    // 2. Auth implementation
    let auth = auth_provider(settings)?;

    Ok(AppContext::new(store, auth))
}

fn run_session(ctx: &mut AppContext, suggestion_limit: usize) -> Result<()> {
    let user = ctx
        .sign_in(&Credentials::new("robin@example.com", "demo", 1))
        .context("sign-in failed")?;
    info!(name = %user.name, community = %user.community_name, score = user.community_score, "signed in");

    let bike = ctx
        .store
        .donate(ItemDetails {
            title: "Kids bike".to_string(),
            description: "16 inch, training wheels included".to_string(),
            category: Category::Sports,
            condition: Condition::Used,
            availability: Availability::Permanent,
            photo: String::new(),
            location: "Downtown".to_string(),
        })?
        .id;
    ctx.store.donate(ItemDetails {
        title: "Circular saw".to_string(),
        description: "Borrow for a weekend".to_string(),
        category: Category::Tools,
        condition: Condition::Fair,
        availability: Availability::Temporary,
        photo: String::new(),
        location: "Downtown".to_string(),
    })?;

    let request = ctx
        .store
        .post_request(RequestDetails {
            title: "Saw".to_string(),
            description: "Cutting shelves for the community garden shed".to_string(),
            urgency: Urgency::Medium,
            location: "Downtown".to_string(),
        })?
        .title
        .clone();

    for item in ctx.store.suggest_items(&request, suggestion_limit) {
        info!(request = %request, suggestion = %item.title, donor = %item.donor_name, "suggested match");
    }

    ctx.store.toggle_item_availability(bike);
    let available_sports = ctx
        .store
        .browse_items(&ItemFilter::default().with_category(Category::Sports))
        .into_iter()
        .filter(|item| item.is_available)
        .count();
    info!(available_sports, mine = ctx.store.my_items().len(), "browsed items");

    let totals = ctx.store.community_totals();
    info!(
        members = totals.members,
        items_shared = totals.items_shared,
        co2_saved_kg = totals.co2_saved_kg,
        "community impact"
    );

    ctx.sign_out();
    if ctx.store.is_authenticated() {
        bail!("session still authenticated after sign-out");
    }
    Ok(())
}

fn main() -> Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    init_tracing(&settings);

    let mut ctx = build_context(&settings)?;
    info!(communities = ctx.store.communities().len(), "Share Nest session store ready");

    run_session(&mut ctx, settings.session.suggestion_limit)
}
