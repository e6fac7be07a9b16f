//! Live dashboard sessions over WebSocket.
//!
//! A session mounts a chart rotation for its view, pushes a fresh page on
//! every rotation or selection, and relays navigation requests back to the
//! client. Closing the socket unmounts the rotation.

use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};
use uuid::Uuid;
use venturehub_core::dashboard::DashboardView;
use venturehub_core::navigation::{Navigator, Route, follow};
use venturehub_core::rotation::{ChartVariant, IntervalTicker, RotationTimer, Ticker};
use venturehub_shared::AppError;
use venturehub_shared::types::Theme;

/// Client to server commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Show a chart now.
    Select {
        /// Chart key.
        chart: String,
    },
    /// Switch presentation mode.
    Theme {
        /// `light` or `dark`.
        theme: String,
    },
    /// Follow a dashboard link.
    Navigate {
        /// Destination path.
        to: String,
    },
}

/// Server to client events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage<P> {
    /// Freshly rendered page.
    Page {
        /// Key of the chart on display.
        chart: &'static str,
        /// Page model.
        page: P,
    },
    /// The client should move to another view.
    Navigate {
        /// Destination.
        to: Route,
    },
    /// A command was rejected.
    Error {
        /// Error code.
        code: &'static str,
        /// Human-readable message.
        message: String,
    },
}

impl<P> ServerMessage<P> {
    /// Error event for `err`.
    pub fn error(err: &AppError) -> Self {
        Self::Error {
            code: err.error_code(),
            message: err.to_string(),
        }
    }
}

/// Navigator forwarding routes to the session's socket.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    routes: mpsc::UnboundedSender<Route>,
}

impl ChannelNavigator {
    /// Navigator feeding `routes`.
    pub fn new(routes: mpsc::UnboundedSender<Route>) -> Self {
        Self { routes }
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, route: Route) {
        if self.routes.send(route).is_err() {
            debug!(%route, "navigation dropped, session closed");
        }
    }
}

/// A mounted view: its rotation, theme and navigator.
pub struct LiveView<V: DashboardView> {
    view: V,
    theme: Theme,
    timer: RotationTimer<V::Chart>,
    navigator: ChannelNavigator,
}

impl<V: DashboardView> LiveView<V> {
    /// Mounts `view` with its rotation driven by `ticker`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<T: Ticker>(view: V, theme: Theme, ticker: T, navigator: ChannelNavigator) -> Self {
        Self {
            view,
            theme,
            timer: RotationTimer::mount(ticker),
            navigator,
        }
    }

    /// Receiver notified whenever the active chart changes.
    pub fn subscribe(&self) -> watch::Receiver<V::Chart> {
        self.timer.subscribe()
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Page event for `chart` in the current theme.
    pub fn page(&self, chart: V::Chart) -> ServerMessage<V::Page> {
        ServerMessage::Page {
            chart: chart.key(),
            page: self.view.render(chart, self.theme),
        }
    }

    /// Parses and applies one raw client message.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed JSON or a rejected command.
    pub fn receive(&mut self, raw: &str) -> Result<Option<ServerMessage<V::Page>>, AppError> {
        let message: ClientMessage = serde_json::from_str(raw)
            .map_err(|e| AppError::Validation(format!("malformed message: {e}")))?;
        self.handle(message)
    }

    /// Applies a command. Returns the reply to send right away, if any.
    ///
    /// Selections reply through the rotation's change notification instead.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown chart, theme or route, or
    /// for a selection on a view that only rotates on its timer.
    pub fn handle(
        &mut self,
        message: ClientMessage,
    ) -> Result<Option<ServerMessage<V::Page>>, AppError> {
        match message {
            ClientMessage::Select { chart } => {
                let chart = V::selection(&chart)?;
                if !self.timer.select(chart) {
                    return Err(AppError::Internal("chart rotation stopped".to_string()));
                }
                Ok(None)
            }
            ClientMessage::Theme { theme } => {
                self.theme = theme.parse().map_err(AppError::Validation)?;
                Ok(Some(self.page(self.timer.active())))
            }
            ClientMessage::Navigate { to } => {
                follow(&self.navigator, &to)?;
                Ok(None)
            }
        }
    }

    /// Stops the rotation.
    pub async fn unmount(self) {
        self.timer.unmount().await;
    }
}

async fn send<S: Serialize>(sink: &mut SplitSink<WebSocket, Message>, message: S) -> bool {
    match serde_json::to_string(&message) {
        Ok(text) => sink.send(Message::Text(text.into())).await.is_ok(),
        Err(err) => {
            error!(error = %err, "cannot encode live message");
            false
        }
    }
}

/// Runs a live session on `socket` until either side closes it.
pub async fn run<V: DashboardView>(socket: WebSocket, view: V, theme: Theme, period: Duration) {
    let session = Uuid::now_v7();
    let (mut sink, mut stream) = socket.split();
    let (routes, mut navigations) = mpsc::unbounded_channel();
    let mut live = LiveView::mount(
        view,
        theme,
        IntervalTicker::new(period),
        ChannelNavigator::new(routes),
    );
    let mut active = live.subscribe();
    info!(%session, %theme, period_ms = period.as_millis(), "live dashboard opened");

    let first = live.page(*active.borrow_and_update());
    if send(&mut sink, first).await {
        loop {
            let outgoing = tokio::select! {
                changed = active.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let chart = *active.borrow_and_update();
                    debug!(%session, chart = chart.key(), "chart changed");
                    live.page(chart)
                }
                Some(to) = navigations.recv() => ServerMessage::Navigate { to },
                incoming = stream.next() => match incoming {
                    Some(Ok(Message::Text(text))) => match live.receive(text.as_str()) {
                        Ok(Some(reply)) => reply,
                        Ok(None) => continue,
                        Err(err) => {
                            warn!(%session, error = %err, "live command rejected");
                            ServerMessage::error(&err)
                        }
                    },
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => {
                        warn!(%session, error = %err, "live socket failed");
                        break;
                    }
                },
            };
            if !send(&mut sink, outgoing).await {
                break;
            }
        }
    }

    live.unmount().await;
    info!(%session, "live dashboard closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use venturehub_core::dashboard::{
        AvatarSource, FounderChart, FounderPage, FounderView, InvestorView, founder_demo,
        investor_demo,
    };
    use venturehub_core::rotation::manual;

    fn founder() -> (LiveView<FounderView>, mpsc::UnboundedReceiver<Route>, venturehub_core::rotation::ManualClock) {
        let view = FounderView::new(founder_demo(), None, AvatarSource::new("https://avatars")).unwrap();
        let (clock, ticker) = manual();
        let (routes, navigations) = mpsc::unbounded_channel();
        let live = LiveView::mount(view, Theme::Light, ticker, ChannelNavigator::new(routes));
        (live, navigations, clock)
    }

    fn page_of(message: ServerMessage<FounderPage>) -> (&'static str, FounderPage) {
        match message {
            ServerMessage::Page { chart, page } => (chart, page),
            other => panic!("expected a page, got {other:?}"),
        }
    }

    #[rstest]
    #[case(r#"{"type":"select","chart":"conversionRate"}"#, ClientMessage::Select { chart: "conversionRate".into() })]
    #[case(r#"{"type":"theme","theme":"dark"}"#, ClientMessage::Theme { theme: "dark".into() })]
    #[case(r#"{"type":"navigate","to":"/messages"}"#, ClientMessage::Navigate { to: "/messages".into() })]
    fn test_client_messages_parse(#[case] raw: &str, #[case] expected: ClientMessage) {
        let parsed: ClientMessage = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed, expected);
        let back: ClientMessage =
            serde_json::from_str(&serde_json::to_string(&parsed).unwrap()).unwrap();
        assert_eq!(back, parsed);
    }

    #[test]
    fn test_server_message_shapes() {
        let json = serde_json::to_value(ServerMessage::<()>::Navigate { to: Route::Faq }).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "navigate", "to": "/faq" }));

        let err = AppError::Validation("Unknown chart: pie".into());
        let json = serde_json::to_value(ServerMessage::<()>::error(&err)).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_selection_publishes_chart() {
        let (mut live, _navigations, _clock) = founder();
        let mut active = live.subscribe();

        let reply = live
            .receive(r#"{"type":"select","chart":"fundingProgress"}"#)
            .unwrap();
        assert!(reply.is_none());
        active.changed().await.unwrap();
        assert_eq!(*active.borrow_and_update(), FounderChart::FundingProgress);

        live.unmount().await;
    }

    #[tokio::test]
    async fn test_timer_rotation_reaches_subscriber() {
        let (live, _navigations, clock) = founder();
        let mut active = live.subscribe();

        assert!(clock.fire());
        active.changed().await.unwrap();
        let (chart, page) = page_of(live.page(*active.borrow_and_update()));
        assert_eq!(chart, "conversionRate");
        assert!(page.momentum.tabs[1].active);

        live.unmount().await;
        assert!(active.changed().await.is_err());
    }

    #[tokio::test]
    async fn test_theme_command_rerenders() {
        let (mut live, _navigations, _clock) = founder();
        let reply = live.receive(r#"{"type":"theme","theme":"DARK"}"#).unwrap().unwrap();
        let (chart, page) = page_of(reply);
        assert_eq!(chart, "pitchViews");
        assert_eq!(page.theme, Theme::Dark);
        assert_eq!(live.theme(), Theme::Dark);
    }

    #[tokio::test]
    async fn test_navigation_is_forwarded() {
        let (mut live, mut navigations, _clock) = founder();
        assert!(live.receive(r#"{"type":"navigate","to":"/manage-team"}"#).unwrap().is_none());
        assert_eq!(navigations.recv().await, Some(Route::ManageTeam));
    }

    #[rstest]
    #[case(r#"{"type":"select","chart":"pie"}"#)]
    #[case(r#"{"type":"theme","theme":"sepia"}"#)]
    #[case(r#"{"type":"navigate","to":"/admin"}"#)]
    #[case(r#"{"type":"zoom"}"#)]
    #[case("not json")]
    #[tokio::test]
    async fn test_rejected_commands(#[case] raw: &str) {
        let (mut live, mut navigations, _clock) = founder();
        let err = live.receive(raw).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(navigations.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_investor_rejects_selection() {
        let view = InvestorView::new(investor_demo()).unwrap();
        let (_clock, ticker) = manual();
        let (routes, _navigations) = mpsc::unbounded_channel();
        let mut live = LiveView::mount(view, Theme::Light, ticker, ChannelNavigator::new(routes));

        let err = live
            .receive(r#"{"type":"select","chart":"industrySplit"}"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: This view does not support chart selection"
        );
    }
}
