//! Shared-with-me browser messages

use crate::app::{BannerSeverity, State};
use crate::core::browser::{BrowserAction, BrowserOutcome};
use crate::core::error::Notice;

pub(crate) fn handle_browser_action(state: &mut State, action: BrowserAction) {
    let browser = std::mem::take(&mut state.browser);
    let (browser, outcome) = browser.reduce(action, state.catalog);
    state.browser = browser;

    if let BrowserOutcome::DatasetLoaded { owner } = outcome {
        tracing::info!("Viewing shared dataset from {owner}");
        state.push_banner(
            Notice::new(
                "Dataset loaded",
                format!("Viewing shared dataset from {owner}"),
            ),
            BannerSeverity::Info,
            5,
        );
    }
}
