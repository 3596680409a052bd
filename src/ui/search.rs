use std::sync::mpsc::TryRecvError;

use tracing::{debug, warn};

use super::ProfileExplorer;
use super::lookup::LookupResult;
use super::state::RequestState;

impl ProfileExplorer {
    /// Replace the query text. No validation happens here.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query_input.set_text(text);
    }

    /// Look up the current query.
    ///
    /// An empty query does nothing. Otherwise the state moves to
    /// [`RequestState::Loading`], replacing any earlier result or error, and
    /// a lookup is started in the background. Earlier lookups keep running.
    pub fn search(&mut self) {
        let query = self.query_input.text().to_string();
        if query.is_empty() {
            return;
        }

        self.state = RequestState::Loading;
        self.avatar = None;
        let id = self.lookups.issue(query.clone());
        debug!(id, %query, "search issued");
    }

    /// Drain any lookup results waiting on the channel.
    pub fn pump_lookup_results(&mut self) {
        loop {
            match self.lookups.try_recv() {
                Ok(result) => self.handle_lookup_result(result),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// True while at least one issued lookup has not reported back.
    pub fn is_lookup_in_flight(&self) -> bool {
        self.lookups.is_in_flight()
    }

    pub(crate) fn handle_lookup_result(&mut self, result: LookupResult) {
        self.lookups.record_completion();

        let LookupResult {
            id,
            query,
            outcome,
            avatar,
        } = result;
        if !self.lookups.should_apply(id) {
            debug!(id, %query, "discarding response to a superseded search");
            return;
        }

        self.avatar = avatar;
        self.state = match outcome {
            Ok(record) => RequestState::Success(record),
            Err(err) => {
                warn!(id, %query, error = %err, "profile lookup failed");
                RequestState::Failure(err.user_message().to_string())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use profile_api::fixtures::{OCTOCAT, octocat};
    use profile_api::{ClientOptions, GitHubClient};

    use super::*;
    use crate::ui::ResponsePolicy;
    use crate::ui::avatar::{AvatarImage, halfblocks, sample_image};
    use crate::ui::test_support::{
        GatedSource, NOT_FOUND_BODY, ScriptedSource, scripted, settle, wait_until_outstanding,
    };

    fn body_for(login: &str) -> String {
        OCTOCAT.replace(r#""login": "octocat""#, &format!(r#""login": "{login}""#))
    }

    #[test]
    fn empty_query_leaves_state_and_network_alone() {
        let (source, mut explorer) = scripted(ScriptedSource::default());

        explorer.search();
        assert_eq!(explorer.state, RequestState::Idle);

        explorer.state = RequestState::Failure("User not found".into());
        explorer.set_query("");
        explorer.search();
        settle(&mut explorer);

        assert_eq!(explorer.state, RequestState::Failure("User not found".into()));
        assert_eq!(explorer.issued_lookups(), 0);
        assert_eq!(source.calls(), 0);
    }

    #[test]
    fn search_enters_loading_immediately() {
        let gated = Arc::new(GatedSource::new(
            ScriptedSource::default().respond("octocat", 200, OCTOCAT),
        ));
        let release = gated.gate("octocat");
        let mut explorer = ProfileExplorer::new(gated.clone());
        explorer.state = RequestState::Failure("User not found".into());

        explorer.set_query("octocat");
        explorer.search();
        assert_eq!(explorer.state, RequestState::Loading);
        assert!(explorer.is_lookup_in_flight());

        release.send(()).expect("release lookup");
        settle(&mut explorer);
        assert_eq!(explorer.state, RequestState::Success(octocat()));
    }

    #[test]
    fn successful_lookup_populates_every_field() {
        let (_, mut explorer) =
            scripted(ScriptedSource::default().respond("octocat", 200, OCTOCAT));

        explorer.set_query("octocat");
        explorer.search();
        settle(&mut explorer);

        let record = explorer.state.profile().expect("success state");
        assert_eq!(record, &octocat());
        assert_eq!(record.name.as_deref(), Some("The Octocat"));
        assert_eq!(record.public_repos, 8);
        assert_eq!(record.bio, None);
    }

    #[test]
    fn not_found_becomes_fixed_failure_message() {
        let (_, mut explorer) = scripted(ScriptedSource::default().respond(
            "this-user-does-not-exist-xyz",
            404,
            NOT_FOUND_BODY,
        ));

        explorer.set_query("this-user-does-not-exist-xyz");
        explorer.search();
        settle(&mut explorer);

        assert_eq!(explorer.state, RequestState::Failure("User not found".into()));
    }

    #[test]
    fn malformed_body_is_reported_like_not_found() {
        let (_, mut explorer) =
            scripted(ScriptedSource::default().respond("octocat", 200, "{\"login\":"));

        explorer.set_query("octocat");
        explorer.search();
        settle(&mut explorer);

        assert_eq!(explorer.state.error(), Some("User not found"));
    }

    #[test]
    fn network_fault_is_reported_like_not_found() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };
        let client = GitHubClient::new(&ClientOptions {
            base_url: format!("http://127.0.0.1:{port}"),
            timeout: std::time::Duration::from_millis(500),
            ..ClientOptions::default()
        })
        .expect("client");
        let mut explorer = ProfileExplorer::new(Arc::new(client));

        explorer.set_query("octocat");
        explorer.search();
        settle(&mut explorer);

        assert_eq!(explorer.state, RequestState::Failure("User not found".into()));
    }

    #[test]
    fn repeated_submit_reissues_the_same_lookup() {
        let (source, mut explorer) =
            scripted(ScriptedSource::default().respond("octocat", 200, OCTOCAT));

        explorer.set_query("octocat");
        explorer.search();
        settle(&mut explorer);
        explorer.search();
        settle(&mut explorer);

        assert_eq!(source.calls(), 2);
        assert_eq!(explorer.issued_lookups(), 2);
        assert_eq!(explorer.state, RequestState::Success(octocat()));
        assert_eq!(explorer.query(), "octocat");
    }

    fn overlapping_searches(policy: ResponsePolicy) -> ProfileExplorer {
        let gated = Arc::new(GatedSource::new(
            ScriptedSource::default()
                .respond("alpha", 200, &body_for("alpha"))
                .respond("beta", 200, &body_for("beta")),
        ));
        let release_alpha = gated.gate("alpha");
        let release_beta = gated.gate("beta");
        let mut explorer = ProfileExplorer::with_policy(gated.clone(), policy);

        explorer.set_query("alpha");
        explorer.search();
        explorer.set_query("beta");
        explorer.search();

        release_beta.send(()).expect("release beta");
        wait_until_outstanding(&mut explorer, 1);
        assert_eq!(
            explorer.state.profile().map(|record| record.login.as_str()),
            Some("beta")
        );

        release_alpha.send(()).expect("release alpha");
        settle(&mut explorer);
        explorer
    }

    #[test]
    fn stale_response_is_discarded_under_latest_policy() {
        let explorer = overlapping_searches(ResponsePolicy::Latest);
        assert_eq!(
            explorer.state.profile().map(|record| record.login.as_str()),
            Some("beta")
        );
        assert!(!explorer.is_lookup_in_flight());
    }

    #[test]
    fn slowest_response_wins_under_last_arrival_policy() {
        let explorer = overlapping_searches(ResponsePolicy::LastArrival);
        assert_eq!(
            explorer.state.profile().map(|record| record.login.as_str()),
            Some("alpha")
        );
        assert_eq!(explorer.query(), "beta");
    }

    #[test]
    fn stale_failure_does_not_clobber_loading_state() {
        let (_, mut explorer) = scripted(ScriptedSource::default());
        explorer.set_query("octocat");
        explorer.search();
        explorer.search();

        let stale = LookupResult {
            id: 1,
            query: "octocat".into(),
            outcome: Err(profile_api::LookupError::Status(
                profile_api::StatusCode::INTERNAL_SERVER_ERROR,
            )),
            avatar: None,
        };
        explorer.handle_lookup_result(stale);
        assert_eq!(explorer.state, RequestState::Loading);
    }

    #[test]
    fn avatar_follows_the_displayed_profile() {
        let (_, mut explorer) = scripted(ScriptedSource::default());
        explorer.set_query("octocat");
        explorer.search();

        let avatar = AvatarImage::from_image(sample_image(), &halfblocks()).expect("encodes");
        explorer.handle_lookup_result(LookupResult {
            id: 1,
            query: "octocat".into(),
            outcome: Ok(octocat()),
            avatar: Some(avatar),
        });
        assert!(explorer.avatar.is_some());

        explorer.search();
        assert_eq!(explorer.state, RequestState::Loading);
        assert!(explorer.avatar.is_none());
    }
}
