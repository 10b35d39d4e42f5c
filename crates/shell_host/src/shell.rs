use std::collections::VecDeque;

use shell_core::{update, AppState, AppViewModel, Msg, NavigationPolicy};
use shell_logging::shell_trace;

use crate::{EffectRunner, ExternalLauncher, FilePicker, RenderSurface};

/// Owns the core state and feeds every host event through `update`.
pub struct Shell<S, L, P> {
    state: AppState,
    runner: EffectRunner<S, L, P>,
    seq: u64,
}

impl<S: RenderSurface, L: ExternalLauncher, P: FilePicker> Shell<S, L, P> {
    pub fn new(state: AppState, runner: EffectRunner<S, L, P>) -> Self {
        Self {
            state,
            runner,
            seq: 0,
        }
    }

    /// Applies `msg` and everything it triggers. Returns the new view when it
    /// changed.
    pub fn dispatch(&mut self, msg: Msg) -> Option<AppViewModel> {
        let mut inbox = VecDeque::from([msg]);
        let mut dirty = false;

        while let Some(msg) = inbox.pop_front() {
            self.seq += 1;
            shell_logging::set_dispatch_seq(self.seq);
            shell_trace!("dispatch {:?}", msg);

            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            dirty |= state.consume_dirty();
            self.state = state;

            inbox.extend(self.runner.run(effects));
        }

        if dirty {
            Some(self.state.view())
        } else {
            None
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn policy(&self) -> &NavigationPolicy {
        self.state.policy()
    }

    pub fn is_exiting(&self) -> bool {
        self.state.is_exiting()
    }

    pub fn runner(&self) -> &EffectRunner<S, L, P> {
        &self.runner
    }
}
