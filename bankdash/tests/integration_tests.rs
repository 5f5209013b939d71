use bank_api::endpoints::{transactions::TransactionRecord, GroupId};
use bankdash::events::{ActionRequest, ApiCall, DataEvent};
use bankdash::input::{Key, KeyEvent};
use bankdash::state::{FormField, LoadingState, Tab};
use bankdash::testing::TestApp;
use bankdash::ui::screens::Screen;
use serde_json::{json, Value};

fn body(request: &ActionRequest) -> Value {
    match request {
        ActionRequest::Trade(r) => serde_json::to_value(r).unwrap(),
        ActionRequest::TrustFund(r) => serde_json::to_value(r).unwrap(),
        ActionRequest::SetLoan(r) => serde_json::to_value(r).unwrap(),
        ActionRequest::BuySpyCard(r) => serde_json::to_value(r).unwrap(),
    }
}

fn last_ticket(app: &TestApp) -> bankdash::state::FormTicket {
    match app.calls().last() {
        Some(ApiCall::Submit { ticket, .. }) => *ticket,
        other => panic!("expected a submission, got {:?}", other),
    }
}

fn record(kind: &str, amount: f64, date: &str) -> TransactionRecord {
    TransactionRecord {
        kind: kind.to_string(),
        amount,
        date: date.to_string(),
    }
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();
    app.assert_not_quit();
    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = TestApp::new();
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('c')));
    app.assert_should_quit();
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();
    assert!(!app.state().help_visible);
    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);
    app.send_key(Key::Char('?'));
    assert!(!app.state().help_visible);
}

#[test]
fn test_start_fetches_history_once() {
    let mut app = TestApp::with_group(GroupId::new(4));
    app.start();

    assert_eq!(app.fetch_count(), 1);
    match &app.calls()[0] {
        ApiCall::FetchTransactions(request) => assert_eq!(request.group_id(), GroupId::new(4)),
        other => panic!("expected a fetch, got {:?}", other),
    }
    assert!(matches!(
        app.state().transactions_loading,
        LoadingState::Loading(_)
    ));
}

#[test]
fn test_failed_initial_fetch_leaves_empty_list() {
    let mut app = TestApp::new();
    app.start();
    app.send_data_event(DataEvent::TransactionsLoadFailed {
        error: "Request failed: connection refused".to_string(),
    });

    assert!(app.state().transactions.is_empty());
    assert!(matches!(
        app.state().transactions_loading,
        LoadingState::Error(_)
    ));
}

#[test]
fn test_every_tab_selects_exactly_one_screen() {
    let mut app = TestApp::new();
    for tab in Tab::ALL {
        app.go_to(tab);
        app.assert_tab(tab);
        assert_eq!(app.state().current_screen().tab(), tab);
        assert_eq!(app.state().pending_key, None);
    }
}

#[test]
fn test_selecting_active_tab_twice_changes_nothing() {
    let mut app = TestApp::new();
    app.start();
    app.go_to(Tab::GroupTransactions);
    app.send_data_event(DataEvent::TransactionsLoaded {
        records: vec![record("buy", 10.0, "2024-01-01")],
    });
    app.go_to(Tab::Trade);
    app.send_keys(&[Key::Down, Key::Char('5')]);

    let before = app.state().current_screen().clone();
    let ticket_before = app.state().ticket();
    let calls_before = app.calls().len();

    app.go_to(Tab::Trade);
    app.go_to(Tab::Trade);

    assert_eq!(app.state().current_screen(), &before);
    assert_eq!(app.state().ticket(), ticket_before);
    assert_eq!(app.calls().len(), calls_before);
    assert_eq!(app.fetch_count(), 1);
}

#[test]
fn test_trade_submission_sends_exact_body() {
    let mut app = TestApp::new();
    // crystal, 15, sell
    app.send_keys(&[Key::Right, Key::Right, Key::Right, Key::Down, Key::Backspace]);
    app.type_text("15");
    app.send_keys(&[Key::Down, Key::Right, Key::Enter]);

    let submitted = app.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(
        body(submitted[0]),
        json!({"group_id": 1, "resource": "crystal", "amount": 15, "type": "sell"})
    );
}

#[test]
fn test_default_forms_send_initial_values() {
    let mut app = TestApp::with_group(GroupId::new(2));

    app.send_key(Key::Enter);
    app.go_to(Tab::TrustFund);
    app.send_key(Key::Enter);
    app.go_to(Tab::SetLoan);
    app.send_key(Key::Enter);
    app.go_to(Tab::BuySpyCard);
    app.send_key(Key::Enter);

    let bodies: Vec<Value> = app.submitted().into_iter().map(body).collect();
    assert_eq!(
        bodies,
        vec![
            json!({"group_id": 2, "resource": "oil", "amount": 0, "type": "buy"}),
            json!({"group_id": 2, "action": "add", "amount": 0, "fund_id": null}),
            json!({"group_id": 2, "amount": 0, "duration": 1}),
            json!({"group_id": 2, "type": "information"}),
        ]
    );
}

#[test]
fn test_loan_and_spy_card_bodies() {
    let mut app = TestApp::new();
    app.go_to(Tab::SetLoan);
    app.send_key(Key::Backspace);
    app.type_text("500");
    app.send_keys(&[Key::Tab, Key::Backspace]);
    app.type_text("12");
    app.send_key(Key::Enter);

    app.go_to(Tab::BuySpyCard);
    app.send_keys(&[Key::Left, Key::Enter]);

    let bodies: Vec<Value> = app.submitted().into_iter().map(body).collect();
    assert_eq!(
        bodies,
        vec![
            json!({"group_id": 1, "amount": 500, "duration": 12}),
            json!({"group_id": 1, "type": "sabotage"}),
        ]
    );
}

#[test]
fn test_rapid_double_submit_sends_twice() {
    let mut app = TestApp::new();
    app.send_keys(&[Key::Enter, Key::Enter]);
    assert_eq!(app.submitted().len(), 2);
}

#[test]
fn test_trade_success_sets_message_and_refreshes_once() {
    let mut app = TestApp::new();
    app.send_key(Key::Enter);
    let ticket = last_ticket(&app);

    app.send_data_event(DataEvent::ActionSucceeded {
        ticket,
        message: "OK".to_string(),
    });

    assert_eq!(app.form_message().as_deref(), Some("معامله موفق: OK"));
    assert_eq!(app.fetch_count(), 1);
}

#[test]
fn test_trade_failure_sets_message_without_refresh() {
    let mut app = TestApp::new();
    app.send_key(Key::Enter);
    let ticket = last_ticket(&app);

    app.send_data_event(DataEvent::ActionFailed {
        ticket,
        error: "Request failed with status code 500".to_string(),
    });

    assert_eq!(
        app.form_message().as_deref(),
        Some("خطا در معامله: Request failed with status code 500")
    );
    assert_eq!(app.fetch_count(), 0);
}

#[test]
fn test_other_forms_use_their_templates() {
    let cases = [
        (Tab::TrustFund, "عملیات موفق: a", "خطا: b"),
        (Tab::SetLoan, "وام تنظیم شد: a", "خطا: b"),
        (Tab::BuySpyCard, "کارت خریداری شد: a", "خطا: b"),
    ];

    for (tab, success, failure) in cases {
        let mut app = TestApp::new();
        app.go_to(tab);

        app.send_key(Key::Enter);
        let ticket = last_ticket(&app);
        app.send_data_event(DataEvent::ActionSucceeded {
            ticket,
            message: "a".to_string(),
        });
        assert_eq!(app.form_message().as_deref(), Some(success));

        app.send_key(Key::Enter);
        let ticket = last_ticket(&app);
        app.send_data_event(DataEvent::ActionFailed {
            ticket,
            error: "b".to_string(),
        });
        assert_eq!(app.form_message().as_deref(), Some(failure));
        assert_eq!(app.fetch_count(), 1);
    }
}

#[test]
fn test_trust_fund_delete_without_fund_id_sends_nothing() {
    let mut app = TestApp::new();
    app.go_to(Tab::TrustFund);
    app.send_keys(&[Key::Right, Key::Enter]);

    assert!(app.submitted().is_empty());
    assert_eq!(
        app.validation_error().as_deref(),
        Some("ID صندوق: Please fill out this field.")
    );
    match app.state().current_screen() {
        Screen::TrustFund(form) => assert_eq!(form.focus, FormField::FundId),
        other => panic!("expected trust fund form, got {:?}", other),
    }

    app.type_text("8");
    assert_eq!(app.validation_error(), None);
    app.send_key(Key::Enter);

    let submitted = app.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(
        body(submitted[0]),
        json!({"group_id": 1, "action": "delete", "amount": 0, "fund_id": 8})
    );
}

#[test]
fn test_trust_fund_empty_amount_is_sent_as_zero() {
    let mut app = TestApp::new();
    app.go_to(Tab::TrustFund);
    app.send_keys(&[Key::Down, Key::Backspace, Key::Enter]);

    assert_eq!(
        body(app.submitted()[0]),
        json!({"group_id": 1, "action": "add", "amount": 0, "fund_id": null})
    );
}

#[test]
fn test_empty_trade_amount_is_rejected() {
    let mut app = TestApp::new();
    app.send_keys(&[Key::Down, Key::Backspace, Key::Enter]);

    assert!(app.submitted().is_empty());
    assert_eq!(
        app.validation_error().as_deref(),
        Some("مقدار: Please fill out this field.")
    );
}

#[test]
fn test_message_is_lost_on_tab_switch() {
    let mut app = TestApp::new();
    app.send_key(Key::Enter);
    let ticket = last_ticket(&app);
    app.send_data_event(DataEvent::ActionFailed {
        ticket,
        error: "x".to_string(),
    });
    assert!(app.form_message().is_some());

    app.send_key(Key::Char(']'));
    app.send_key(Key::Char('['));

    app.assert_tab(Tab::Trade);
    assert_eq!(app.form_message(), None);
}

#[test]
fn test_late_result_for_unmounted_form_is_discarded() {
    let mut app = TestApp::new();
    app.send_key(Key::Enter);
    let ticket = last_ticket(&app);

    app.go_to(Tab::SetLoan);
    app.send_data_event(DataEvent::ActionSucceeded {
        ticket,
        message: "late".to_string(),
    });

    assert_eq!(app.form_message(), None);
    assert_eq!(app.fetch_count(), 1);

    app.go_to(Tab::Trade);
    assert_eq!(app.form_message(), None);
}

#[test]
fn test_refresh_replaces_history() {
    let mut app = TestApp::new();
    app.start();
    app.send_data_event(DataEvent::TransactionsLoaded {
        records: vec![record("buy", 10.0, "2024-01-01")],
    });
    app.go_to(Tab::GroupTransactions);
    app.send_key(Key::Char('r'));
    assert_eq!(app.fetch_count(), 2);

    app.send_data_event(DataEvent::TransactionsLoaded {
        records: vec![
            record("sell", 3.0, "2024-01-02"),
            record("loan", 100.0, "2024-01-03"),
        ],
    });

    let lines = bankdash::ui::screens::transactions_screen::history_lines(
        &app.state().transactions,
    );
    assert_eq!(lines, vec!["sell: 3 - 2024-01-02", "loan: 100 - 2024-01-03"]);
}

#[test]
fn test_history_line_format() {
    let lines = bankdash::ui::screens::transactions_screen::history_lines(&[record(
        "buy",
        10.0,
        "2024-01-01",
    )]);
    assert_eq!(lines, vec!["buy: 10 - 2024-01-01"]);
}
