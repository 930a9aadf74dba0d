//! `groups` command: resolved configuration groups.

use tabled::Tabled;

use fleetcfg_core::{ConfigGroup, ConfigProvider};

use crate::cli::{GlobalOpts, GroupsArgs};
use crate::error::CliError;
use crate::output;

use super::util::{Session, cell};

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Template")]
    template: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Subscriptions")]
    subscriptions: String,
    #[tabled(rename = "Tag Subscriptions")]
    tag_subscriptions: String,
    #[tabled(rename = "Devices")]
    devices: String,
}

impl GroupRow {
    fn new(group: &ConfigGroup) -> Self {
        let config = &group.config;
        Self {
            template: group.common_config.clone().unwrap_or_else(|| "-".into()),
            target: cell([config.settings.target.as_str()], ""),
            subscriptions: cell(config.subscriptions.iter().map(|s| s.name.as_str()), ", "),
            tag_subscriptions: cell(
                config
                    .tag_subscriptions
                    .iter()
                    .map(|t| t.subscription.name.as_str()),
                ", ",
            ),
            devices: cell(&group.addresses, "\n"),
        }
    }
}

pub fn handle(session: &Session, args: &GroupsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let groups = session.store.config_groups(&args.addresses)?;
    tracing::debug!(count = groups.len(), "rendering groups");

    let out = output::render_list(session.output, &groups, GroupRow::new, |g| {
        g.addresses.join(" ")
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
