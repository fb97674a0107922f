use std::sync::{mpsc, Arc};
use std::thread;

use kennel_core::{Breeds, Effect, Msg, NoticeLevel, Picture, SearchOutcome};
use kennel_logging::{kennel_error, kennel_info, kennel_warn};

use crate::api::DogApiClient;
use crate::recognizer::{Recognizer, TOP_GUESSES};

/// Executes effects on a dedicated runtime thread.
///
/// Effects go in through a channel and are spawned concurrently, so the
/// taxonomy fetch and the model load race freely; completions come back
/// out as messages in whatever order the collaborators finish.
pub struct EngineHandle {
    effect_tx: mpsc::Sender<Effect>,
    msg_rx: mpsc::Receiver<Msg>,
}

impl EngineHandle {
    pub fn new(api: DogApiClient, recognizer: Arc<dyn Recognizer>) -> Self {
        let (effect_tx, effect_rx) = mpsc::channel::<Effect>();
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let api = Arc::new(api);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(effect) = effect_rx.recv() {
                let api = api.clone();
                let recognizer = recognizer.clone();
                let msg_tx = msg_tx.clone();
                runtime.spawn(async move {
                    run_effect(api.as_ref(), recognizer.as_ref(), effect, msg_tx).await;
                });
            }
        });

        Self { effect_tx, msg_rx }
    }

    /// A channel end for submitting effects; sends never block.
    pub fn effects(&self) -> mpsc::Sender<Effect> {
        self.effect_tx.clone()
    }

    pub fn submit(&self, effect: Effect) {
        let _ = self.effect_tx.send(effect);
    }

    pub fn try_recv(&self) -> Option<Msg> {
        self.msg_rx.try_recv().ok()
    }
}

async fn run_effect(
    api: &DogApiClient,
    recognizer: &dyn Recognizer,
    effect: Effect,
    msg_tx: mpsc::Sender<Msg>,
) {
    match effect {
        Effect::LoadModel => {
            kennel_info!("loading recognizer model");
            let result = recognizer.load().await.map_err(|err| err.to_string());
            let _ = msg_tx.send(Msg::ModelLoaded(result));
        }
        Effect::LoadTaxonomy => {
            kennel_info!("fetching breed taxonomy");
            let result = api.fetch_taxonomy().await.map_err(|err| err.to_string());
            let _ = msg_tx.send(Msg::TaxonomyLoaded(result));
        }
        Effect::Classify { picture, breeds } => {
            let result = classify_and_search(api, recognizer, &breeds, &picture).await;
            let _ = msg_tx.send(Msg::SearchCompleted(result));
        }
        Effect::Notify { level, message } => match level {
            NoticeLevel::Warning => kennel_warn!("{message}"),
            NoticeLevel::Error => kennel_error!("{message}"),
        },
    }
}

/// The chain behind a dropped picture: model guesses, breed resolution,
/// then the sample-image search. A matcher miss is reported the same way
/// as a collaborator failure, as a plain message.
async fn classify_and_search(
    api: &DogApiClient,
    recognizer: &dyn Recognizer,
    breeds: &Breeds,
    picture: &Picture,
) -> Result<SearchOutcome, String> {
    let guesses = recognizer
        .classify(picture.bytes(), TOP_GUESSES)
        .await
        .map_err(|err| err.to_string())?;

    let probe = breeds
        .classify(&guesses)
        .ok_or_else(|| "Could not identify dog's breed.".to_string())?;

    kennel_info!(
        "matched breed={} sub_breed={:?} confidence={:.3}",
        probe.breed,
        probe.sub_breed,
        probe.confidence
    );

    let pack = api
        .search_images(&probe)
        .await
        .map_err(|err| err.to_string())?;

    Ok(SearchOutcome { probe, pack })
}
