//! Navigation requests and top-bar button events.
//!
//! Components never drive the router directly. They enqueue
//! [`NavigationRequest`]s on the shared [`Navigator`]; the app layer
//! subscribes (or drains) and translates requests into actual route
//! changes. Modal top-bar buttons go through [`NavButtonEvents`], a
//! string-id event bus whose listeners are scoped by [`Subscription`]
//! handles.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::store::{Listeners, Subscription};

/// Named screens a component may request navigation to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ChannelList,
    Channel,
    CustomStatusClearAfter,
}

impl Screen {
    /// Stable screen name used in logs and request payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::ChannelList => "ChannelList",
            Screen::Channel => "Channel",
            Screen::CustomStatusClearAfter => "CustomStatusClearAfter",
        }
    }
}

/// Display options attached to a push request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavOptions {
    pub top_bar_visible: bool,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            top_bar_visible: true,
        }
    }
}

/// A request made of the host navigation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    /// Navigate to a named screen with a parameter payload.
    Push {
        screen: Screen,
        title: String,
        params: BTreeMap<String, String>,
        options: NavOptions,
    },
    /// Pop the top screen (dismiss the current modal).
    Pop,
}

/// Shared navigation request queue.
#[derive(Clone, Default)]
pub struct Navigator {
    pending: Arc<Mutex<VecDeque<NavigationRequest>>>,
    listeners: Listeners<NavigationRequest>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request navigation to `screen`.
    pub fn go_to_screen(
        &self,
        screen: Screen,
        title: impl Into<String>,
        params: BTreeMap<String, String>,
        options: NavOptions,
    ) {
        let request = NavigationRequest::Push {
            screen,
            title: title.into(),
            params,
            options,
        };
        tracing::debug!(screen = screen.name(), "navigation requested");
        self.push(request);
    }

    /// Request that the top (modal) screen be popped.
    pub fn pop_top_screen(&self) {
        tracing::debug!("pop top screen requested");
        self.push(NavigationRequest::Pop);
    }

    fn push(&self, request: NavigationRequest) {
        self.pending.lock().push_back(request.clone());
        self.listeners.notify(&request);
    }

    /// Drain every pending request, in submission order.
    pub fn drain_pending(&self) -> Vec<NavigationRequest> {
        self.pending.lock().drain(..).collect()
    }

    /// Observe requests as they are submitted.
    pub fn subscribe(&self, f: impl Fn(&NavigationRequest) + 'static) -> Subscription {
        self.listeners.subscribe(f)
    }
}

/// Top-bar button press events, matched by string button id.
#[derive(Clone)]
pub struct NavButtonEvents {
    listeners: Listeners<String>,
}

impl Default for NavButtonEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl NavButtonEvents {
    pub fn new() -> Self {
        Self {
            listeners: Listeners::new(),
        }
    }

    /// Emit a button press to every registered listener.
    pub fn emit(&self, button_id: &str) {
        tracing::debug!(button_id, "nav button pressed");
        self.listeners.notify(&button_id.to_string());
    }

    /// Register a listener for the component's active lifetime; the
    /// returned handle deregisters it on cancel or drop.
    pub fn listen(&self, f: impl Fn(&str) + 'static) -> Subscription {
        self.listeners.subscribe(move |id: &String| f(id))
    }
}
