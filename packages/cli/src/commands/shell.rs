use std::sync::Arc;

use admin::{Action, AdminView, Navigation, Outlet, Route, RowAction};
use anyhow::Result;
use async_trait::async_trait;
use client::ResourceClient;
use common::{Banner, Blog, Record, ResourceKind, Service};
use console::{Term, style};
use dialoguer::Select;
use tracing::debug;

use crate::context::Context;
use crate::prompt::{self, DialoguerConfirm};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageAction {
    Refresh,
    New,
    Edit,
    Toggle,
    Delete,
    Cancel,
    DismissNotice,
}

impl PageAction {
    fn label(&self) -> &'static str {
        match self {
            Self::Refresh => "Refresh",
            Self::New => "New",
            Self::Edit => "Edit",
            Self::Toggle => "Show / hide",
            Self::Delete => "Delete",
            Self::Cancel => "Cancel edit",
            Self::DismissNotice => "Dismiss notice",
        }
    }
}

/// One entry of the shell's main menu.
#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Go(&'static Route),
    ToggleMenu,
    Page(PageAction),
    Quit,
}

impl MenuItem {
    fn label(&self) -> String {
        match self {
            Self::Go(route) => format!("Go to {}", route.name),
            Self::ToggleMenu => "☰ Menu".to_string(),
            Self::Page(action) => action.label().to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// A mounted resource view as the shell sees it.
#[async_trait(?Send)]
trait Page {
    fn render(&self, width: usize) -> Vec<String>;
    fn actions(&self) -> Vec<PageAction>;
    async fn perform(&mut self, action: PageAction) -> Result<()>;
}

struct ResourcePage<R: Record> {
    view: AdminView<R, ResourceClient<R>>,
}

impl<R: Record> ResourcePage<R> {
    async fn mount(ctx: &Context) -> Self {
        let confirm = Arc::new(DialoguerConfirm);
        let mut view = ctx.view::<R>(confirm);
        view.mount().await;
        Self { view }
    }
}

#[async_trait(?Send)]
impl<R: Record> Page for ResourcePage<R> {
    fn render(&self, width: usize) -> Vec<String> {
        render::page(self.view.state(), width)
    }

    fn actions(&self) -> Vec<PageAction> {
        let state = self.view.state();
        let rows = state.rows();
        let any = |wanted: fn(&RowAction) -> bool| {
            rows.iter().any(|row| row.actions.iter().any(wanted))
        };

        let mut actions = vec![PageAction::Refresh, PageAction::New];
        if any(|a| matches!(a, RowAction::Edit)) {
            actions.push(PageAction::Edit);
        }
        if any(|a| matches!(a, RowAction::Toggle { .. })) {
            actions.push(PageAction::Toggle);
        }
        if !rows.is_empty() {
            actions.push(PageAction::Delete);
        }
        if state.form().is_editing() {
            actions.push(PageAction::Cancel);
        }
        if state.notice().is_some() {
            actions.push(PageAction::DismissNotice);
        }
        actions
    }

    async fn perform(&mut self, action: PageAction) -> Result<()> {
        let descriptor = R::descriptor();
        let rows = self.view.state().rows();

        match action {
            PageAction::Refresh => self.view.dispatch(Action::Refresh).await,
            PageAction::Cancel => self.view.dispatch(Action::Cancel).await,
            PageAction::DismissNotice => self.view.dispatch(Action::DismissNotice).await,
            PageAction::New | PageAction::Edit => {
                if action == PageAction::Edit {
                    let prompt = format!("Edit which {}?", descriptor.singular);
                    let Some(id) = prompt::pick_row(&rows, &prompt)? else {
                        return Ok(());
                    };
                    self.view.dispatch(Action::BeginEdit(id)).await;
                    if !self.view.state().form().is_editing() {
                        return Ok(());
                    }
                } else if self.view.state().form().is_editing() {
                    self.view.dispatch(Action::Cancel).await;
                }

                let answers = prompt::fill_form::<R>(self.view.state().form()).await?;
                for answer in answers {
                    self.view.dispatch(answer).await;
                }
                self.view.dispatch(Action::Submit).await;
            }
            PageAction::Toggle => {
                let prompt = format!("Show or hide which {}?", descriptor.singular);
                if let Some(id) = prompt::pick_row(&rows, &prompt)? {
                    self.view.dispatch(Action::Toggle(id)).await;
                }
            }
            PageAction::Delete => {
                let prompt = format!("Delete which {}?", descriptor.singular);
                if let Some(id) = prompt::pick_row(&rows, &prompt)? {
                    self.view.dispatch(Action::Delete(id)).await;
                }
            }
        }
        Ok(())
    }
}

async fn mount_page(ctx: &Context, kind: ResourceKind) -> Box<dyn Page> {
    match kind {
        ResourceKind::Banner => Box::new(ResourcePage::<Banner>::mount(ctx).await),
        ResourceKind::Service => Box::new(ResourcePage::<Service>::mount(ctx).await),
        ResourceKind::Blog => Box::new(ResourcePage::<Blog>::mount(ctx).await),
    }
}

fn menu(navigation: &Navigation, page: Option<&dyn Page>) -> Vec<MenuItem> {
    let mut items = Vec::new();
    if let Some(page) = page {
        items.extend(page.actions().into_iter().map(MenuItem::Page));
    }
    if navigation.is_collapsed() {
        items.push(MenuItem::ToggleMenu);
    }
    if navigation.nav_visible() {
        items.extend(
            navigation
                .items()
                .into_iter()
                .filter(|item| !item.active)
                .map(|item| MenuItem::Go(item.route)),
        );
    }
    items.push(MenuItem::Quit);
    items
}

fn width_of(term: &Term) -> u16 {
    term.size().1
}

/// Run the interactive shell until the user quits.
pub async fn run(ctx: &Context, route: &str) -> Result<()> {
    let term = Term::stdout();
    let mut navigation = Navigation::new(&ctx.config.shell, width_of(&term));
    let mut outlet = navigation.navigate(route);
    let mut page = match outlet {
        Outlet::View(kind) => Some(mount_page(ctx, kind).await),
        Outlet::NotFound => None,
    };

    loop {
        navigation.resize(width_of(&term));
        let width = usize::from(navigation.width());

        term.clear_screen()?;
        for line in render::nav(&navigation) {
            term.write_line(&line)?;
        }
        term.write_line("")?;
        match page.as_deref() {
            Some(page) => {
                for line in page.render(width) {
                    term.write_line(&line)?;
                }
            }
            None => term.write_line(&style("Page Not Found").red().bold().to_string())?,
        }
        term.write_line("")?;

        let items = menu(&navigation, page.as_deref());
        let labels: Vec<String> = items.iter().map(MenuItem::label).collect();
        let Some(choice) = Select::new().items(&labels).default(0).interact_opt()? else {
            break;
        };

        match items[choice] {
            MenuItem::Quit => break,
            MenuItem::ToggleMenu => navigation.toggle_menu(),
            MenuItem::Go(route) => {
                let next = navigation.navigate(route.path);
                if next != outlet {
                    debug!(path = route.path, "Switching page");
                    outlet = next;
                    page = match outlet {
                        Outlet::View(kind) => Some(mount_page(ctx, kind).await),
                        Outlet::NotFound => None,
                    };
                }
            }
            MenuItem::Page(action) => {
                if let Some(page) = page.as_mut() {
                    page.perform(action).await?;
                }
            }
        }
    }

    term.write_line("Bye")?;
    Ok(())
}
