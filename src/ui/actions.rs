use profile_api::DetailKind;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace, warn};

use super::ProfileExplorer;
use super::state::ExplorerOutcome;

/// Key that triggers a search.
pub const SUBMIT_KEY: KeyCode = KeyCode::Enter;

/// A page of the displayed profile that can be opened in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Profile,
    Detail(DetailKind),
}

impl ProfileExplorer {
    /// React to a key press. Returns an outcome when the user leaves.
    pub fn on_key_press(&mut self, key: KeyEvent) -> Option<ExplorerOutcome> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Some(self.outcome()),
            KeyCode::Char('c') if ctrl => return Some(self.outcome()),
            KeyCode::Char('o') if ctrl => self.open_link(LinkTarget::Profile),
            KeyCode::Char('b') if ctrl => self.open_link(LinkTarget::Detail(DetailKind::Blog)),
            KeyCode::Char('t') if ctrl => {
                self.open_link(LinkTarget::Detail(DetailKind::Twitter));
            }
            code if code == SUBMIT_KEY => self.search(),
            _ => {
                if self.query_input.input(key) {
                    trace!(query = self.query_input.text(), "query edited");
                }
            }
        }
        None
    }

    /// URL behind `target` for the displayed profile, if it has one.
    pub fn link_for(&self, target: LinkTarget) -> Option<String> {
        let record = self.state.profile()?;
        match target {
            LinkTarget::Profile => Some(record.html_url.clone()),
            LinkTarget::Detail(kind) => record
                .detail_rows()
                .into_iter()
                .find(|row| row.kind == kind)
                .and_then(|row| row.link),
        }
    }

    /// Open `target` in the system browser.
    fn open_link(&self, target: LinkTarget) {
        let Some(url) = self.link_for(target) else {
            debug!(?target, "nothing to open");
            return;
        };
        if let Err(err) = open::that(&url) {
            warn!(%url, %err, "failed to open link in browser");
        }
    }
}
