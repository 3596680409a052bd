use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use profile_api::{LookupError, ProfileRecord, ProfileSource};
use ratatui_image::picker::Picker;
use tracing::{debug, warn};

use super::avatar::AvatarImage;

/// Completed lookup, tagged with the id of the search that issued it.
#[derive(Debug)]
pub(crate) struct LookupResult {
    pub id: u64,
    pub query: String,
    pub outcome: Result<ProfileRecord, LookupError>,
    /// Encoded avatar for a successful lookup, when one could be drawn.
    pub avatar: Option<AvatarImage>,
}

/// Run one lookup on a dedicated thread and post the result to `results`.
///
/// Lookups are never cancelled; a newer search simply races the older one.
pub(crate) fn spawn(
    source: Arc<dyn ProfileSource>,
    picker: Option<Picker>,
    id: u64,
    query: String,
    results: Sender<LookupResult>,
) {
    let spawned = thread::Builder::new()
        .name(format!("profile-lookup-{id}"))
        .spawn({
            let query = query.clone();
            let results = results.clone();
            let source = Arc::clone(&source);
            let picker = picker.clone();
            move || {
                let result = run(source.as_ref(), picker.as_ref(), id, query);
                // The receiver is gone once the UI has exited.
                let _ = results.send(result);
            }
        });

    if let Err(err) = spawned {
        warn!(id, %err, "could not spawn lookup thread, running inline");
        let _ = results.send(run(source.as_ref(), picker.as_ref(), id, query));
    }
}

fn run(
    source: &dyn ProfileSource,
    picker: Option<&Picker>,
    id: u64,
    query: String,
) -> LookupResult {
    let outcome = source.fetch(&query);
    debug!(id, %query, ok = outcome.is_ok(), "lookup finished");

    let avatar = match (&outcome, picker) {
        (Ok(record), Some(picker)) => load_avatar(source, record, picker),
        _ => None,
    };
    LookupResult {
        id,
        query,
        outcome,
        avatar,
    }
}

/// Fetch and encode the avatar; failures leave the URL on screen instead.
fn load_avatar(
    source: &dyn ProfileSource,
    record: &ProfileRecord,
    picker: &Picker,
) -> Option<AvatarImage> {
    let bytes = match source.fetch_avatar(record) {
        Ok(bytes) => bytes?,
        Err(err) => {
            warn!(login = %record.login, error = %err, "avatar download failed");
            return None;
        }
    };
    match AvatarImage::decode(&bytes, picker) {
        Ok(avatar) => Some(avatar),
        Err(err) => {
            warn!(login = %record.login, error = %err, "avatar could not be encoded");
            None
        }
    }
}
