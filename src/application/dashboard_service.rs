use crate::application::sequencer::{RefreshSequencer, RefreshTicket};
use crate::domain::{
    dashboard::{EMPTY_TICKER_MESSAGE, InputSnapshot, ViewState, reduce},
    logging::LogComponent,
    market_data::{MarketDataGateway, MarketSnapshot},
};
use crate::{log_debug, log_error, log_info};

/// Fetches market data for a snapshot and reduces it into a view.
pub struct DashboardService<G: MarketDataGateway> {
    gateway: G,
}

impl<G: MarketDataGateway> DashboardService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Always yields a complete view; gateway failures become error labels.
    pub async fn refresh(&self, input: &InputSnapshot) -> ViewState {
        let market = self.load_market(input).await;
        reduce(input, &market)
    }

    /// Refresh for `ticket`, yielding `None` when a newer refresh began while
    /// this one was in flight.
    pub async fn refresh_if_current(
        &self,
        sequencer: &RefreshSequencer,
        ticket: RefreshTicket,
        input: &InputSnapshot,
    ) -> Option<ViewState> {
        let view = self.refresh(input).await;
        if sequencer.is_current(ticket) {
            Some(view)
        } else {
            log_debug!(
                LogComponent::Application("DashboardService"),
                "Dropping superseded refresh #{}",
                ticket.generation()
            );
            None
        }
    }

    async fn load_market(&self, input: &InputSnapshot) -> MarketSnapshot {
        if input.ticker.is_empty() {
            return MarketSnapshot::failed(EMPTY_TICKER_MESSAGE);
        }

        log_info!(
            LogComponent::Application("DashboardService"),
            "Fetching stock data for: {} with period={} and interval={}",
            input.ticker,
            input.period,
            input.interval
        );

        match self.gateway.fetch(&input.ticker, input.period, input.interval).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log_error!(
                    LogComponent::Application("DashboardService"),
                    "Error fetching data for {}: {}",
                    input.ticker,
                    e
                );
                MarketSnapshot::failed(e.to_string())
            }
        }
    }
}
