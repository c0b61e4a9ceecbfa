//! Page controller: one instance per page load
//!
//! Owns the submission state and the document handle, and runs the TEA loop
//! for each incoming event. Hosts feed it [`Message`]s and perform the
//! [`UpdateAction`]s it hands back.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::actions::run_submission;
use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::{AppState, SubmissionState};
use crate::transport::LocalInquiryTransport;
use gather_core::prelude::*;

pub struct Controller<D: Dom> {
    state: AppState,
    dom: D,
    config: SiteConfig,
}

impl<D: Dom> Controller<D> {
    /// Create the controller for a freshly loaded page.
    ///
    /// Fails only if `config` is invalid; the page is otherwise left alone.
    pub fn attach(dom: D, config: SiteConfig) -> Result<Self> {
        config.validate()?;
        info!(
            path = %dom.location_path(),
            configured = config.is_configured(),
            "page controller attached"
        );
        Ok(Self {
            state: AppState::new(),
            dom,
            config,
        })
    }

    /// Process a message and any follow-ups, returning the actions the host
    /// must perform.
    pub fn dispatch(&mut self, message: Message<D::Node>) -> Vec<UpdateAction<D::Node>> {
        let mut actions = Vec::new();
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, &mut self.dom, &self.config, m);
            if let Some(action) = result.action {
                actions.push(action);
            }
            msg = result.message;
        }
        actions
    }

    /// Dispatch `message` and carry any resulting submission through
    /// `transport` to its settled state. Actions the controller cannot
    /// perform itself (reveal observation) are returned.
    pub async fn dispatch_and_run<T>(
        &mut self,
        message: Message<D::Node>,
        transport: &T,
    ) -> Vec<UpdateAction<D::Node>>
    where
        T: LocalInquiryTransport,
    {
        let mut queue: VecDeque<_> = self.dispatch(message).into();
        let mut host_actions = Vec::new();

        while let Some(action) = queue.pop_front() {
            match action {
                UpdateAction::SubmitInquiry { endpoint, payload } => {
                    let settled = run_submission(transport, &endpoint, &payload).await;
                    queue.extend(self.dispatch(settled));
                }
                other => {
                    debug!(?other, "action left to host");
                    host_actions.push(other);
                }
            }
        }
        host_actions
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.state.submission
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Direct document access for hosts that must read or prepare nodes
    /// outside of an event (e.g. resolving event targets).
    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }
}
