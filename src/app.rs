use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    application::{ControlMode, DashboardConfig, DashboardHost, DashboardService, RefreshSequencer},
    domain::{
        dashboard::{InputChange, InputSnapshot, PageStyle, ThemeName, ViewState, page_style_for},
        logging::LogComponent,
        market_data::{Interval, Period},
    },
    infrastructure::{http::YahooChartClient, rendering::PlotlySurface},
};
use crate::log_warn;

pub const CHART_ELEMENT_ID: &str = "stock-chart";

/// UI state shared by the dashboard components.
#[derive(Clone)]
pub struct DashboardContext {
    pub host: Rc<RefCell<DashboardHost>>,
    pub view_state: RwSignal<ViewState>,
    pub page_style: RwSignal<PageStyle>,
    pub selection: RwSignal<(Period, Interval)>,
    pub mode: ControlMode,
}

impl DashboardContext {
    pub fn dispatch(&self, change: InputChange) {
        self.host.borrow_mut().dispatch(change);
    }
}

/// Build the host, register the view and style subscriptions and put the
/// context in scope for child components.
pub fn provide_dashboard_ctx(config: &DashboardConfig) -> DashboardContext {
    let theme = ThemeName::from_dark_flag(config.dark_by_default);
    let view_state = create_rw_signal(ViewState::loading(theme));
    let page_style = create_rw_signal(page_style_for(theme));
    let selection = create_rw_signal((config.timer_period, config.timer_interval));

    let service = Rc::new(DashboardService::new(YahooChartClient::new(config.quote_base_url.clone())));
    let sequencer = Rc::new(RefreshSequencer::new());
    let mut host = DashboardHost::new(config);

    host.subscribe(config.control_mode.view_inputs(), move |snapshot: &InputSnapshot| {
        selection.set((snapshot.period, snapshot.interval));

        let ticket = sequencer.begin();
        let service = Rc::clone(&service);
        let sequencer = Rc::clone(&sequencer);
        let snapshot = snapshot.clone();
        spawn_local(async move {
            if let Some(next) = service.refresh_if_current(&sequencer, ticket, &snapshot).await {
                view_state.set(next);
            }
        });
    });

    host.subscribe(config.control_mode.style_inputs(), move |snapshot: &InputSnapshot| {
        page_style.set(page_style_for(snapshot.theme));
    });

    let ctx = DashboardContext {
        host: Rc::new(RefCell::new(host)),
        view_state,
        page_style,
        selection,
        mode: config.control_mode,
    };
    provide_context(ctx.clone());
    ctx
}

/// Dispatch `Tick` into `host` every `period_ms`. Dropping the returned
/// interval stops the ticks.
pub fn start_tick_timer(host: Rc<RefCell<DashboardHost>>, period_ms: u32) -> gloo_timers::callback::Interval {
    gloo_timers::callback::Interval::new(period_ms, move || {
        host.borrow_mut().dispatch(InputChange::Tick);
    })
}

/// 📊 Root component of the dashboard
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let ctx = provide_dashboard_ctx(&config);
    if ctx.mode == ControlMode::Timer {
        let timer = start_tick_timer(Rc::clone(&ctx.host), config.refresh_interval_ms);
        on_cleanup(move || drop(timer));
    }
    ctx.host.borrow().publish_initial();

    let page_style = ctx.page_style;
    let buttons_mode = ctx.mode == ControlMode::Buttons;

    view! {
        <style>{DASHBOARD_CSS}</style>
        <div id="page-content" class="dashboard" style=move || page_style.with(|style| style.to_css())>
            <h1 class="title">"Real-Time Financial Dashboard"</h1>
            <ThemeSwitch initial=config.dark_by_default />
            <div class="panel">
                <h2>"📈 Stock Market Data"</h2>
                <TickerInput initial=config.default_ticker.clone() />
                <PriceLabel />
                <ChartPanel />
                {buttons_mode.then(|| view! { <SelectorButtons /> })}
            </div>
        </div>
    }
}

#[component]
fn ThemeSwitch(initial: bool) -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    view! {
        <label class="theme-toggle">
            <input
                type="checkbox"
                id="theme-switch"
                prop:checked=initial
                on:change=move |ev| ctx.dispatch(InputChange::Theme(event_target_checked(&ev)))
            />
            " Dark mode"
        </label>
    }
}

/// Ticker field. `change` fires once the edit is committed (enter or blur),
/// so the refresh waits until the user stops typing.
#[component]
fn TickerInput(initial: String) -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    view! {
        <input
            type="text"
            id="stock-input"
            class="ticker-input"
            value=initial
            on:change=move |ev| ctx.dispatch(InputChange::Ticker(event_target_value(&ev)))
        />
    }
}

#[component]
fn PriceLabel() -> impl IntoView {
    let view_state = expect_context::<DashboardContext>().view_state;

    view! {
        <div id="live-price" class="price-label">
            {move || view_state.with(|state| state.price_label.clone())}
        </div>
    }
}

#[component]
fn ChartPanel() -> impl IntoView {
    let view_state = expect_context::<DashboardContext>().view_state;
    let chart_ref = create_node_ref::<html::Div>();
    let surface = PlotlySurface::new(CHART_ELEMENT_ID);

    create_effect(move |_| {
        if chart_ref.get().is_none() {
            return;
        }
        view_state.with(|state| {
            if let Err(e) = surface.draw(&state.chart) {
                log_warn!(LogComponent::Presentation("ChartPanel"), "{}", e);
            }
        });
    });

    view! { <div id=CHART_ELEMENT_ID class="chart" node_ref=chart_ref></div> }
}

#[component]
fn SelectorButtons() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let selection = ctx.selection;

    let period_buttons = Period::options()
        .into_iter()
        .map(|period| {
            let ctx = ctx.clone();
            view! {
                <button
                    class="selector"
                    class:active=move || selection.with(|(current, _)| *current == period)
                    on:click=move |_| ctx.dispatch(InputChange::PeriodClicked(period))
                >
                    {period.to_string()}
                </button>
            }
        })
        .collect_view();

    let interval_buttons = Interval::options()
        .into_iter()
        .map(|interval| {
            let ctx = ctx.clone();
            view! {
                <button
                    class="selector secondary"
                    class:active=move || selection.with(|(_, current)| *current == interval)
                    on:click=move |_| ctx.dispatch(InputChange::IntervalClicked(interval))
                >
                    {interval.to_string()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="selector-group">
            <h5>"Select Time Period:"</h5>
            {period_buttons}
        </div>
        <div class="selector-group">
            <h5>"Select Candlestick Interval:"</h5>
            {interval_buttons}
        </div>
    }
}

const DASHBOARD_CSS: &str = r#"
.dashboard {
    box-sizing: border-box;
    overflow-y: auto;
}

.title {
    text-align: center;
    margin-bottom: 20px;
}

.theme-toggle {
    display: block;
    text-align: center;
    margin-bottom: 20px;
    cursor: pointer;
}

.panel {
    width: 50%;
    padding: 20px;
    vertical-align: top;
}

.ticker-input {
    width: 100%;
    margin-bottom: 10px;
    padding: 6px;
}

.price-label {
    font-size: 20px;
    font-weight: 600;
    margin-bottom: 10px;
}

.chart {
    min-height: 450px;
}

.selector-group {
    margin-top: 10px;
    text-align: center;
}

.selector {
    margin-right: 4px;
    padding: 4px 10px;
    border: 1px solid #0d6efd;
    border-radius: 4px;
    background: transparent;
    color: #0d6efd;
    cursor: pointer;
}

.selector.secondary {
    border-color: #6c757d;
    color: #6c757d;
}

.selector.active {
    background: #0d6efd;
    color: white;
}

.selector.secondary.active {
    background: #6c757d;
}
"#;
