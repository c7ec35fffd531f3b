//! Lifecycle hooks wired into the host's event dispatch

use std::sync::Arc;

use tracing::{Span, info, info_span};

use crate::plugin::container::PluginContainer;

/// Host lifecycle states, in the order the host moves through them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GameState {
    Construction,
    PreInitialization,
    Initialization,
    PostInitialization,
    LoadComplete,
    ServerAboutToStart,
    ServerStarting,
    ServerStarted,
    ServerStopping,
    ServerStopped,
    GameStopping,
    GameStopped,
}

/// Lifecycle events the plugin listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PreInitialization(GameState),
    Stopping(GameState),
}

impl GameEvent {
    pub fn pre_initialization() -> Self {
        GameEvent::PreInitialization(GameState::PreInitialization)
    }

    pub fn stopping() -> Self {
        GameEvent::Stopping(GameState::GameStopping)
    }

    /// State the host was in when the event fired
    pub fn state(&self) -> GameState {
        match self {
            GameEvent::PreInitialization(state) | GameEvent::Stopping(state) => *state,
        }
    }
}

/// Receiver of host lifecycle events
pub trait LifecycleListener {
    fn on_pre_init(&self, _state: GameState) {}

    fn on_stopping(&self, _state: GameState) {}
}

/// Route an event to the matching listener hook
pub fn dispatch<L: LifecycleListener + ?Sized>(listener: &L, event: GameEvent) {
    match event {
        GameEvent::PreInitialization(state) => listener.on_pre_init(state),
        GameEvent::Stopping(state) => listener.on_stopping(state),
    }
}

/// The foundations plugin as seen by the host
pub struct FoundationsPlugin {
    container: Arc<dyn PluginContainer>,
    span: Span,
}

impl FoundationsPlugin {
    pub fn new(container: Arc<dyn PluginContainer>) -> Self {
        let span = info_span!("plugin", id = %container.id());
        Self { container, span }
    }

    pub fn container(&self) -> &Arc<dyn PluginContainer> {
        &self.container
    }

    /// Span every plugin log line is recorded under
    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl LifecycleListener for FoundationsPlugin {
    fn on_pre_init(&self, state: GameState) {
        let _enter = self.span.enter();
        info!(?state, "Starting up foundations");
    }

    fn on_stopping(&self, state: GameState) {
        let _enter = self.span.enter();
        info!(?state, "Stopping foundations");
    }
}
