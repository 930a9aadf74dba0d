//! `tags` command: resolved tags for one address.

use tabled::Tabled;

use fleetcfg_core::{ConfigProvider, TagMap};

use crate::cli::{GlobalOpts, TagsArgs};
use crate::error::CliError;
use crate::output;

use super::util::Session;

#[derive(Tabled)]
struct TagRow<'a> {
    #[tabled(rename = "Tag")]
    key: &'a str,
    #[tabled(rename = "Value")]
    value: &'a str,
}

fn detail(tags: &TagMap) -> String {
    let rows: Vec<TagRow<'_>> = tags
        .iter()
        .map(|(key, value)| TagRow { key, value })
        .collect();
    output::render_table(&rows)
}

fn plain(tags: &TagMap) -> String {
    tags.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn handle(session: &Session, args: &TagsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let tags = session.store.tags(&args.address)?;
    if tags.is_empty() {
        tracing::debug!(address = %args.address, "no tags resolved for address");
    }

    let out = output::render_single(session.output, &tags, detail, plain)?;
    output::print_output(&out, global.quiet);
    Ok(())
}
