use std::sync::mpsc;
use std::sync::Arc;

use kennel_core::{
    init, update, AppState, Dispatch, Effect, Msg, Program, Subscription, Task,
};

use crate::api::DogApiClient;
use crate::engine::EngineHandle;
use crate::recognizer::Recognizer;

/// The application runtime: a [`Program`] whose effects are executed by
/// an [`EngineHandle`] on its own runtime thread.
///
/// Effects leave through a channel in dispatch order; completions come
/// back as messages and are applied by [`AppRuntime::pump`], typically
/// from the host's event loop.
pub struct AppRuntime {
    engine: EngineHandle,
    program: Program<Msg, AppState>,
}

impl AppRuntime {
    pub fn new(api: DogApiClient, recognizer: Arc<dyn Recognizer>) -> Self {
        let engine = EngineHandle::new(api, recognizer);
        let init_tx = engine.effects();
        let update_tx = engine.effects();

        let program = Program::run(hand_off(init(), &init_tx), move |msg, state: &AppState| {
            hand_off(update(state.clone(), msg), &update_tx)
        });

        Self { engine, program }
    }

    pub fn dispatch(&self, msg: Msg) {
        self.program.dispatch(msg);
    }

    pub fn dispatcher(&self) -> Dispatch<Msg> {
        self.program.dispatcher()
    }

    pub fn state(&self) -> AppState {
        self.program.state()
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        self.program.subscribe(callback)
    }

    /// Applies every completion the engine has produced so far. Returns
    /// how many messages were dispatched.
    pub fn pump(&self) -> usize {
        let mut applied = 0;
        while let Some(msg) = self.engine.try_recv() {
            self.program.dispatch(msg);
            applied += 1;
        }
        applied
    }
}

/// Turns the pure update's effect values into runtime tasks handing the
/// effect to the engine. Sending preserves dispatch order.
fn hand_off(
    (state, effects): (AppState, Vec<Effect>),
    tx: &mpsc::Sender<Effect>,
) -> (AppState, Vec<Task<Msg>>) {
    let tasks = effects
        .into_iter()
        .map(|effect| {
            let tx = tx.clone();
            Box::new(move |_dispatch: Dispatch<Msg>| {
                let _ = tx.send(effect);
            }) as Task<Msg>
        })
        .collect();

    (state, tasks)
}
