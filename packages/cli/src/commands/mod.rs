//! One-shot subcommands and the interactive shell.

mod mutate;
mod shell;

use admin::{ListState, ViewState};
use anyhow::{Context as _, Result, bail};
use common::{Banner, Blog, Record, RecordId, ResourceKind, Service};
use console::Term;

use crate::context::Context;
use crate::render;
use crate::{CreateArgs, EditArgs};

pub use shell::run as shell;

/// Call a function generic over the record type for a runtime resource kind.
macro_rules! for_kind {
    ($kind:expr, $($func:ident)::+ ($($arg:expr),* $(,)?)) => {
        match $kind {
            ResourceKind::Banner => $($func)::+::<Banner>($($arg),*).await,
            ResourceKind::Service => $($func)::+::<Service>($($arg),*).await,
            ResourceKind::Blog => $($func)::+::<Blog>($($arg),*).await,
        }
    };
}

pub async fn list(ctx: &Context, kind: ResourceKind) -> Result<()> {
    for_kind!(kind, list_records(ctx))
}

pub async fn create(ctx: &Context, args: CreateArgs) -> Result<()> {
    for_kind!(args.resource, mutate::create(ctx, &args))
}

pub async fn edit(ctx: &Context, args: EditArgs) -> Result<()> {
    for_kind!(args.resource, mutate::edit(ctx, &args))
}

pub async fn delete(ctx: &Context, kind: ResourceKind, id: RecordId, yes: bool) -> Result<()> {
    for_kind!(kind, mutate::delete(ctx, id, yes))
}

pub async fn toggle(ctx: &Context, kind: ResourceKind, id: RecordId) -> Result<()> {
    for_kind!(kind, mutate::toggle(ctx, id))
}

async fn list_records<R: Record>(ctx: &Context) -> Result<()> {
    let mut list = ListState::<R>::new();
    list.refresh(&ctx.client::<R>())
        .await
        .with_context(|| format!("Failed to load {}", R::descriptor().kind))?;

    let term = Term::stdout();
    let rows: Vec<_> = list.records().iter().map(admin::render).collect();
    term.write_line(R::descriptor().title)?;
    term.write_line(&format!("{}: {}", R::descriptor().total_label, list.len()))?;
    for line in render::table::<R>(&rows, usize::from(term.size().1)) {
        term.write_line(&line)?;
    }
    Ok(())
}

/// Fail with the current error notice, if any.
fn ensure_no_error<R: Record>(state: &ViewState<R>) -> Result<()> {
    match state.notice() {
        Some(notice) if notice.is_error() => bail!("{}", notice.message),
        _ => Ok(()),
    }
}

/// Print the outcome notice, failing if it is an error.
fn report<R: Record>(state: &ViewState<R>) -> Result<()> {
    ensure_no_error(state)?;
    if let Some(notice) = state.notice() {
        Term::stdout().write_line(&render::notice(notice))?;
    }
    Ok(())
}
