//! Scenario state and provider wiring for the provider adapter BDD tests.

use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use wharf_provider_github::telemetry::test_support::RecordingTelemetrySink;
use wharf_provider_github::{
    BaseClient, GitHubProvider, ProviderError, RequestContext, WharfBranch, WharfProject,
};
use wiremock::{Mock, MockServer};

/// A mock GitHub API together with the runtime that serves it.
#[derive(Clone)]
pub(crate) struct MockGitHub {
    runtime: Rc<Runtime>,
    server: Rc<MockServer>,
}

impl MockGitHub {
    fn start() -> Self {
        let runtime =
            Runtime::new().unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        let server = runtime.block_on(MockServer::start());
        Self {
            runtime: Rc::new(runtime),
            server: Rc::new(server),
        }
    }

    /// Registers `mock` on the server.
    pub(crate) fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Remote provider URL a platform would hand the provider.
    fn remote_provider_url(&self) -> String {
        self.server.uri()
    }
}

/// Scenario state for provider adapter tests.
#[derive(ScenarioState, Default)]
pub(crate) struct ProviderState {
    /// Mock GitHub API, started on first use.
    pub(crate) github: Slot<MockGitHub>,
    /// Telemetry captured from the provider.
    pub(crate) telemetry: Slot<Arc<RecordingTelemetrySink>>,
    /// Project returned by the by-name lookup.
    pub(crate) project: Slot<WharfProject>,
    /// File content returned by `fetch_file`.
    pub(crate) file: Slot<Vec<u8>>,
    /// Branches returned by `fetch_branches`.
    pub(crate) branches: Slot<Vec<WharfBranch>>,
    /// Error returned by the last operation.
    pub(crate) error: Slot<ProviderError>,
}

impl ProviderState {
    /// The scenario's mock GitHub API.
    pub(crate) fn mock_github(&self) -> MockGitHub {
        if self.github.with_ref(|_| ()).is_none() {
            self.github.set(MockGitHub::start());
        }
        self.github
            .get()
            .unwrap_or_else(|| panic!("mock GitHub not initialised"))
    }

    fn recording_sink(&self) -> Arc<RecordingTelemetrySink> {
        if self.telemetry.with_ref(|_| ()).is_none() {
            self.telemetry
                .set(Arc::new(RecordingTelemetrySink::default()));
        }
        self.telemetry
            .get()
            .unwrap_or_else(|| panic!("telemetry sink not initialised"))
    }
}

/// Runs `operation` against a provider pointed at the mock GitHub API.
///
/// Telemetry is recorded into the state's sink, created on first use.
pub(crate) fn run_provider<T, F, Fut>(state: &ProviderState, operation: F) -> Result<T, ProviderError>
where
    F: FnOnce(GitHubProvider) -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    let github = state.mock_github();
    let provider = GitHubProvider::new(BaseClient::new(
        "valid-token",
        github.remote_provider_url(),
        RequestContext::background(),
    ))
    .with_telemetry(state.recording_sink());

    github.runtime.block_on(operation(provider))
}
