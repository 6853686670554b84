//! Share composer messages
//!
//! Runs the composer reducer and turns its outcome into a banner.

use crate::app::{BannerSeverity, State};
use crate::core::error::Notice;
use crate::core::share::{ShareAction, ShareOutcome};

pub(crate) fn handle_share_action(state: &mut State, action: ShareAction) {
    let composer = std::mem::take(&mut state.composer);
    let (composer, outcome) = composer.reduce(action, state.catalog);
    state.composer = composer;

    if let Some((notice, severity)) = outcome_notice(&outcome) {
        match &outcome {
            ShareOutcome::Rejected(e) => tracing::warn!("Share action rejected: {e}"),
            _ => tracing::info!("{}: {}", notice.title, notice.description),
        }
        let secs = if severity == BannerSeverity::Error { 8 } else { 5 };
        state.push_banner(notice, severity, secs);
    }
}

fn outcome_notice(outcome: &ShareOutcome) -> Option<(Notice, BannerSeverity)> {
    let notice = match outcome {
        ShareOutcome::None => return None,
        ShareOutcome::Rejected(e) => return Some((e.notice(), BannerSeverity::Error)),
        ShareOutcome::ContactAdded(email) => Notice::new(
            "Contact added",
            format!("{email} has been added to your contacts."),
        ),
        ShareOutcome::Shared { recipients, .. } => Notice::new(
            "Data shared successfully",
            format!("Your visualizations have been shared with {recipients} recipient(s)."),
        ),
        ShareOutcome::AccessRevoked(name) => Notice::new(
            "Access revoked",
            format!("You've revoked access for {name}."),
        ),
        ShareOutcome::SharingChanged { title, shared } => {
            if *shared {
                Notice::new("Sharing enabled", format!("{title} is now shared."))
            } else {
                Notice::new("Sharing disabled", format!("{title} is now private."))
            }
        }
    };
    Some((notice, BannerSeverity::Success))
}
