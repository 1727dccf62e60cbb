use crate::context::ExecutionContext;
use crate::presentation::renderers::{TuiEvent, TuiRenderer, ViewOptions};
use anyhow::Result;
use folio_runtime::{GithubCommits, fetch_commit_count};
use folio_types::Page;
use std::thread;

pub fn handle(ctx: &ExecutionContext, page: Page, offline: bool) -> Result<()> {
    let config = ctx.config()?;
    let portfolio = ctx.portfolio()?.clone();
    let table = ctx.command_table(None)?;

    let renderer = TuiRenderer::new();

    if offline || !config.github.fetch_commits {
        tracing::info!("commit count lookup disabled");
    } else {
        let tx = renderer.sender();
        let source = GithubCommits::from_config(&config.github);
        let author = portfolio.profile.github_author.clone();
        thread::spawn(move || {
            if let Some(count) = fetch_commit_count(&source, &author) {
                let _ = tx.send(TuiEvent::CommitCount(count));
            }
        });
    }

    tracing::info!(%page, "starting interactive view");
    renderer.run(ViewOptions {
        portfolio,
        hidden: config.gallery.hidden.clone(),
        table,
        page,
    })
}
