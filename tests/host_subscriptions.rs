use std::cell::RefCell;
use std::rc::Rc;

use stock_dashboard_wasm::application::{ControlMode, DashboardConfig, DashboardHost};
use stock_dashboard_wasm::domain::dashboard::{InputChange, InputId, InputSnapshot, ThemeName};
use stock_dashboard_wasm::domain::market_data::{Interval, Period};

type Received = Rc<RefCell<Vec<InputSnapshot>>>;

fn host_with_recorders(mode: ControlMode) -> (DashboardHost, Received, Received) {
    let config = DashboardConfig::default().with_control_mode(mode);
    let mut host = DashboardHost::new(&config);

    let views: Received = Rc::default();
    let styles: Received = Rc::default();

    let sink = Rc::clone(&views);
    host.subscribe(mode.view_inputs(), move |snapshot| sink.borrow_mut().push(snapshot.clone()));
    let sink = Rc::clone(&styles);
    host.subscribe(mode.style_inputs(), move |snapshot| sink.borrow_mut().push(snapshot.clone()));

    (host, views, styles)
}

#[test]
fn initial_publish_reaches_every_subscriber() {
    let (host, views, styles) = host_with_recorders(ControlMode::Buttons);
    assert_eq!(host.publish_initial(), 2);

    let first = views.borrow()[0].clone();
    assert_eq!(first.ticker.value(), "AAPL");
    assert_eq!(first.theme, ThemeName::Light);
    assert_eq!(first.period, Period::OneDay);
    assert_eq!(styles.borrow().len(), 1);
}

#[test]
fn theme_change_refreshes_view_and_style() {
    let (mut host, views, styles) = host_with_recorders(ControlMode::Buttons);
    assert_eq!(host.dispatch(InputChange::Theme(true)), 2);
    assert_eq!(views.borrow()[0].theme, ThemeName::Dark);
    assert_eq!(styles.borrow()[0].theme, ThemeName::Dark);
}

#[test]
fn ticker_change_does_not_restyle() {
    let (mut host, views, styles) = host_with_recorders(ControlMode::Buttons);
    assert_eq!(host.dispatch(InputChange::Ticker(" msft ".to_string())), 1);
    assert_eq!(views.borrow()[0].ticker.value(), "msft");
    assert!(styles.borrow().is_empty());
}

#[test]
fn button_clicks_resolve_first_clicked_option() {
    let (mut host, views, _) = host_with_recorders(ControlMode::Buttons);
    host.dispatch(InputChange::PeriodClicked(Period::FiveDays));
    host.dispatch(InputChange::PeriodClicked(Period::OneYear));
    host.dispatch(InputChange::IntervalClicked(Interval::FifteenMinutes));

    let views = views.borrow();
    assert_eq!(views.len(), 3);
    assert_eq!(views[1].period, Period::FiveDays);
    assert_eq!(views[2].interval, Interval::FifteenMinutes);
    assert_eq!(host.controls().period_clicks(), &[0, 1, 0, 0, 1]);
}

#[test]
fn buttons_mode_ignores_ticks() {
    let (mut host, views, _) = host_with_recorders(ControlMode::Buttons);
    assert_eq!(host.dispatch(InputChange::Tick), 0);
    assert_eq!(host.controls().tick_count(), 0);
    assert!(views.borrow().is_empty());
}

#[test]
fn timer_mode_uses_fixed_selection_and_ignores_buttons() {
    let (mut host, views, _) = host_with_recorders(ControlMode::Timer);
    assert_eq!(host.dispatch(InputChange::PeriodClicked(Period::OneYear)), 0);
    assert_eq!(host.controls().period_clicks(), &[0, 0, 0, 0, 0]);

    assert_eq!(host.dispatch(InputChange::Tick), 1);
    assert_eq!(host.dispatch(InputChange::Tick), 1);

    let views = views.borrow();
    assert_eq!(views.len(), 2);
    assert_eq!(views[1].tick_count, 2);
    assert_eq!(views[1].period, Period::OneDay);
    assert_eq!(views[1].interval, Interval::OneMinute);
}

#[test]
fn subscription_filters_by_input_id() {
    let mut host = DashboardHost::new(&DashboardConfig::default());
    let hits = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&hits);
    host.subscribe(&[InputId::IntervalButtons], move |_| *counter.borrow_mut() += 1);

    host.dispatch(InputChange::Ticker("IBM".to_string()));
    host.dispatch(InputChange::IntervalClicked(Interval::OneHour));
    assert_eq!(*hits.borrow(), 1);
}
