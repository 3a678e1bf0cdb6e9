use crate::domain::ports::AdvisoryService;
use crate::utils::error::Result;
use std::sync::Arc;

/// Shown for every advisory failure; the underlying error never reaches the user.
pub const FALLBACK_MESSAGE: &str = "Sorry, ik kan de stylist momenteel niet bereiken.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdvisoryStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Failure(String),
}

/// Query text and request lifecycle around one [`AdvisoryService`].
///
/// Every accepted submission gets a new generation number. Only the
/// resolution carrying the current generation is applied, so an answer to
/// an older query can never overwrite a newer one.
pub struct AdvisoryPipeline<S: ?Sized = dyn AdvisoryService> {
    service: Arc<S>,
    query: String,
    status: AdvisoryStatus,
    generation: u64,
}

/// An advisory call that has been started but not yet awaited.
///
/// The future returned by [`run`](Self::run) owns everything it needs, so the
/// composing layer can await it in place or hand it to `tokio::spawn`.
pub struct PendingAdvice<S: ?Sized = dyn AdvisoryService> {
    generation: u64,
    query: String,
    service: Arc<S>,
}

#[derive(Debug)]
pub struct AdviceResolution {
    generation: u64,
    outcome: Result<String>,
}

impl<S: AdvisoryService + ?Sized> AdvisoryPipeline<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            query: String::new(),
            status: AdvisoryStatus::Idle,
            generation: 0,
        }
    }

    /// Starts a new request cycle.
    ///
    /// Blank input is ignored without any state change and yields `None`.
    /// Otherwise the status is `Loading` when this returns and the caller
    /// drives the returned call to completion.
    pub fn submit(&mut self, query: &str) -> Option<PendingAdvice<S>> {
        if query.trim().is_empty() {
            tracing::debug!("Ignoring blank advisory query");
            return None;
        }

        self.generation += 1;
        self.query = query.to_string();
        self.status = AdvisoryStatus::Loading;
        tracing::info!(generation = self.generation, "Submitting advisory query");

        Some(PendingAdvice {
            generation: self.generation,
            query: self.query.clone(),
            service: Arc::clone(&self.service),
        })
    }

    /// Applies a finished call. Returns `false` when the resolution belongs
    /// to a superseded submission and was dropped.
    pub fn resolve(&mut self, resolution: AdviceResolution) -> bool {
        if resolution.generation != self.generation {
            tracing::debug!(
                stale = resolution.generation,
                current = self.generation,
                "Discarding stale advisory response"
            );
            return false;
        }

        self.status = match resolution.outcome {
            Ok(advice) => {
                tracing::info!(generation = resolution.generation, "Advisory response received");
                AdvisoryStatus::Success(advice)
            }
            Err(e) => {
                tracing::warn!(
                    generation = resolution.generation,
                    error = %e,
                    "Advisory request failed, showing fallback message"
                );
                AdvisoryStatus::Failure(FALLBACK_MESSAGE.to_string())
            }
        };
        true
    }

    /// Submit, await and resolve in one go, for callers with nothing else to do meanwhile.
    pub async fn submit_and_wait(&mut self, query: &str) -> &AdvisoryStatus {
        if let Some(pending) = self.submit(query) {
            let resolution = pending.run().await;
            self.resolve(resolution);
        }
        &self.status
    }

    pub fn status(&self) -> &AdvisoryStatus {
        &self.status
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.status == AdvisoryStatus::Loading
    }

    /// Text for the answer bubble: the advice, or the fallback message.
    pub fn response(&self) -> Option<&str> {
        match &self.status {
            AdvisoryStatus::Success(text) | AdvisoryStatus::Failure(text) => Some(text),
            AdvisoryStatus::Idle | AdvisoryStatus::Loading => None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<S: AdvisoryService + ?Sized> PendingAdvice<S> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub async fn run(self) -> AdviceResolution {
        let outcome = self.service.request_advice(&self.query).await;
        AdviceResolution {
            generation: self.generation,
            outcome,
        }
    }
}

impl AdviceResolution {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}
