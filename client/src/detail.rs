//! Observable detail-view loading

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use pokedex_model::PokemonProfile;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::repository::PokemonRepository;

/// What a detail screen renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailState {
    pub loading: bool,
    pub profile: Option<PokemonProfile>,
    pub error: Option<String>,
}

/// Loads one Pokemon profile at a time and publishes [`DetailState`].
///
/// Starting a new load aborts the previous one. An aborted load never
/// publishes its result, even if it already got its responses.
pub struct DetailLoader {
    repository: PokemonRepository,
    state: Arc<watch::Sender<DetailState>>,
    /// Bumped whenever the in-flight load is abandoned
    generation: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

impl DetailLoader {
    pub fn new(repository: PokemonRepository) -> Self {
        let (state, _) = watch::channel(DetailState::default());
        Self {
            repository,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            task: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    /// Start loading `id`. Must be called from within a Tokio runtime.
    pub fn load(&mut self, id: u32) {
        self.abort();
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let repository = self.repository.clone();
        let state = self.state.clone();
        let generation = self.generation.clone();
        let started = generation.load(Ordering::Acquire);
        self.task = Some(tokio::spawn(async move {
            let outcome = repository.pokemon_profile(id).await;
            tracing::debug!(id, ok = outcome.is_ok(), "Detail load finished");

            let next = match outcome {
                Ok(profile) => DetailState {
                    loading: false,
                    profile: Some(profile),
                    error: None,
                },
                Err(failure) => DetailState {
                    loading: false,
                    profile: None,
                    error: Some(failure.message().to_string()),
                },
            };
            // An abort that arrives from here on never reaches an await.
            let published = state.send_if_modified(|current| {
                if generation.load(Ordering::Acquire) != started {
                    return false;
                }
                *current = next;
                true
            });
            if !published {
                tracing::debug!(id, "Discarding abandoned detail load");
            }
        }));
    }

    /// Abandon the in-flight load, if any
    pub fn cancel(&mut self) {
        if self.abort() {
            self.state.send_modify(|state| state.loading = false);
        }
    }

    /// Wait for the in-flight load to settle
    pub async fn wait(&mut self) {
        if let Some(task) = self.task.take()
            && let Err(err) = task.await
            && err.is_panic()
        {
            tracing::error!(error = %err, "Detail load task panicked");
        }
    }

    fn abort(&mut self) -> bool {
        self.generation.fetch_add(1, Ordering::AcqRel);
        match self.task.take() {
            Some(task) if !task.is_finished() => {
                task.abort();
                true
            }
            _ => false,
        }
    }
}

impl Drop for DetailLoader {
    fn drop(&mut self) {
        self.abort();
    }
}
