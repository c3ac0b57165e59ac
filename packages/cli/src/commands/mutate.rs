use std::sync::Arc;

use admin::{Action, AlwaysConfirm, Confirm};
use anyhow::{Result, bail};
use common::{Record, RecordId};
use console::Term;

use super::{ensure_no_error, report};
use crate::context::Context;
use crate::prompt::{DialoguerConfirm, read_image};
use crate::{CreateArgs, EditArgs};

pub async fn create<R: Record>(ctx: &Context, args: &CreateArgs) -> Result<()> {
    let mut view = ctx.view::<R>(Arc::new(AlwaysConfirm));

    for (name, value) in &args.fields {
        view.dispatch(Action::set_field(name, value)).await;
        ensure_no_error(view.state())?;
    }
    for (name, value) in &args.items {
        view.dispatch(Action::add_list_item(name, value)).await;
        ensure_no_error(view.state())?;
    }
    if let Some(path) = &args.image {
        view.dispatch(Action::Attach(read_image(path.clone()).await?)).await;
    }

    view.dispatch(Action::Submit).await;
    report(view.state())
}

pub async fn edit<R: Record>(ctx: &Context, args: &EditArgs) -> Result<()> {
    let mut view = ctx.view::<R>(Arc::new(AlwaysConfirm));
    view.mount().await;
    ensure_no_error(view.state())?;

    view.dispatch(Action::BeginEdit(args.id.clone())).await;
    ensure_no_error(view.state())?;

    for (name, value) in &args.fields {
        view.dispatch(Action::set_field(name, value)).await;
        ensure_no_error(view.state())?;
    }
    if let Some(path) = &args.image {
        view.dispatch(Action::Attach(read_image(path.clone()).await?)).await;
    }

    view.dispatch(Action::Submit).await;
    report(view.state())
}

pub async fn delete<R: Record>(ctx: &Context, id: RecordId, yes: bool) -> Result<()> {
    let confirm: Arc<dyn Confirm> = if yes {
        Arc::new(AlwaysConfirm)
    } else {
        Arc::new(DialoguerConfirm)
    };
    let mut view = ctx.view::<R>(confirm);

    view.dispatch(Action::Delete(id)).await;
    if view.state().notice().is_none() {
        Term::stdout().write_line("Delete cancelled")?;
        return Ok(());
    }
    report(view.state())
}

pub async fn toggle<R: Record>(ctx: &Context, id: RecordId) -> Result<()> {
    let mut view = ctx.view::<R>(Arc::new(AlwaysConfirm));
    view.mount().await;
    ensure_no_error(view.state())?;

    view.dispatch(Action::Toggle(id.clone())).await;
    ensure_no_error(view.state())?;

    let descriptor = R::descriptor();
    let Some(row) = view.state().rows().into_iter().find(|row| row.id == id) else {
        bail!("{} {id} disappeared after toggling", descriptor.singular);
    };
    Term::stdout().write_line(&format!(
        "{} {id} is now {}",
        descriptor.singular,
        row.status.unwrap_or("updated")
    ))?;
    Ok(())
}
