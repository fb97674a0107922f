use crate::{AppState, Effect, Msg, NoticeLevel, Remote};

/// Initial state and the effects that kick the application off: the
/// model load and the taxonomy fetch start together and race freely.
pub fn init() -> (AppState, Vec<Effect>) {
    let state = AppState {
        picture: None,
        model: Remote::Loading,
        breeds: Remote::Loading,
        search: Remote::NotAsked,
    };

    (state, vec![Effect::LoadModel, Effect::LoadTaxonomy])
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ModelLoaded(Ok(())) => {
            state.model = Remote::Ready(());
            // The picture may have been dropped before the model arrived.
            classify_when_ready(&state)
        }
        Msg::ModelLoaded(Err(error)) => {
            state.model = Remote::Failed(error.clone());
            vec![notify_error(error)]
        }
        Msg::TaxonomyLoaded(Ok(breeds)) => {
            state.breeds = Remote::Ready(breeds);
            classify_when_ready(&state)
        }
        Msg::TaxonomyLoaded(Err(error)) => {
            state.breeds = Remote::Failed(error.clone());
            vec![notify_error(error)]
        }
        Msg::PictureDropped(None) => {
            vec![Effect::Notify {
                level: NoticeLevel::Warning,
                message: "It waits for pictures only".to_string(),
            }]
        }
        Msg::PictureDropped(Some(picture)) => {
            state.picture = Some(picture);
            state.search = Remote::Loading;
            classify_when_ready(&state)
        }
        Msg::SearchCompleted(Ok(outcome)) => {
            state.search = Remote::Ready(outcome);
            Vec::new()
        }
        Msg::SearchCompleted(Err(error)) => {
            state.search = Remote::Failed(error.clone());
            vec![notify_error(error)]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Rendezvous of the three prerequisites. Whichever of model, taxonomy
/// and picture arrives last triggers classification; earlier arrivals
/// find the others missing and emit nothing.
fn classify_when_ready(state: &AppState) -> Vec<Effect> {
    match (&state.model, &state.breeds, &state.picture) {
        (Remote::Ready(()), Remote::Ready(breeds), Some(picture)) => vec![Effect::Classify {
            picture: picture.clone(),
            breeds: breeds.clone(),
        }],
        _ => Vec::new(),
    }
}

fn notify_error(message: String) -> Effect {
    Effect::Notify {
        level: NoticeLevel::Error,
        message,
    }
}
