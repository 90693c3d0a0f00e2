//! End-to-end command flows over the mock transport.
//!
//! These exercise the full path a CLI invocation takes, from login through
//! the operation to rendering, without a switch on the network.

use poectl_cli::commands::{execute_cycle, execute_on, execute_stats, CommandError};
use poectl_cli::output;
use poectl_cli::CaptureLogger;
use poectl_switch::{merge_hash, MockSleeper, LOGIN_PATH, POE_CONFIG_PATH, STATUS_PATH};
use poectl_switch::Credentials;
use poectl_transport::{HttpResponse, Method, MockTransport};

const LOGIN_PAGE: &str = r#"<input type=hidden id="rand" name="rand" value="1735414426">"#;
const CONFIG_PAGE: &str = r#"<input type=hidden name='hash' id='hash' value="aabbccdd">"#;

fn enqueue_login(transport: &MockTransport) {
    transport.enqueue(Method::Get, LOGIN_PATH, HttpResponse::ok(LOGIN_PAGE));
    transport.enqueue(
        Method::Post,
        LOGIN_PATH,
        HttpResponse::ok_with_headers("Set-Cookie: SID=abc123; path=/; HttpOnly\r\n", ""),
    );
}

fn port_block(port: u8, status: &str, class: &str, power: &str) -> String {
    format!(
        concat!(
            "<div>",
            "<span class=\"pull-right poe-power-mode\"><span>{status}</span></span>",
            "<span class=\"powClassShow\">{class}</span>",
            "<input type=\"hidden\" class=\"port\" value=\"{port}\">",
            "<div><span class='hid-txt wid-full'>ml570</span></div><div><span>51.0</span></div>",
            "<div><span class='hid-txt wid-full'>ml572</span></div><div><span>113</span></div>",
            "<div><span class='hid-txt wid-full'>ml574</span></div><div><span>{power}</span></div>",
            "<div><span class='hid-txt wid-full'>ml575</span></div><div><span>44</span></div>",
            "<div><span class='hid-txt wid-full'>ml581</span></div><div><span>No Error</span></div>",
            "</div>",
        ),
        port = port,
        status = status,
        class = class,
        power = power,
    )
}

fn credentials() -> Credentials {
    Credentials::new("192.168.1.10", "admin")
}

#[test]
fn on_command_full_flow() {
    let transport = MockTransport::new();
    enqueue_login(&transport);
    transport.enqueue(Method::Get, POE_CONFIG_PATH, HttpResponse::ok(CONFIG_PAGE));
    transport.enqueue(Method::Post, POE_CONFIG_PATH, HttpResponse::ok(""));
    let logger = CaptureLogger::new();

    let result = execute_on(&transport, &credentials(), 3, &logger).expect("on");

    let calls = transport.calls();
    assert_eq!(calls.len(), 4);

    // Login submitted the merge hash of password + rand.
    let expected_digest = format!("password={}", merge_hash("admin", "1735414426"));
    assert_eq!(calls[1].body.as_deref(), Some(expected_digest.as_str()));

    // Session cookie carried into both mutation exchanges.
    assert_eq!(calls[2].cookie.as_deref(), Some("SID=abc123"));
    assert_eq!(calls[3].cookie.as_deref(), Some("SID=abc123"));

    // Mutation POST carries the freshly fetched token and 1-based port 3 as
    // zero-indexed portID 2.
    let body = calls[3].body.clone().expect("post body");
    assert!(body.contains("portID=2"));
    assert!(body.contains("ADMIN_MODE=1"));
    assert!(body.contains("hash=aabbccdd"));

    assert_eq!(
        output::render_control(&result, true, false).as_deref(),
        Some(r#"{"action":"on","port":3,"success":true}"#)
    );
}

#[test]
fn cycle_aborts_after_failed_off_step() {
    let transport = MockTransport::new();
    enqueue_login(&transport);
    // Off step: token fetch works, the state POST is rejected.
    transport.enqueue(Method::Get, POE_CONFIG_PATH, HttpResponse::ok(CONFIG_PAGE));
    transport.enqueue(Method::Post, POE_CONFIG_PATH, HttpResponse::with_status(500));
    let sleeper = MockSleeper::new();
    let logger = CaptureLogger::new();

    let result = execute_cycle(&transport, &credentials(), 2, 2000, &sleeper, &logger);
    assert!(matches!(result, Err(CommandError::Mutation(_))));

    // The on step never ran: no delay, exactly one token fetch and one POST.
    assert!(sleeper.slept().is_empty());
    assert_eq!(transport.count(Method::Get, POE_CONFIG_PATH), 1);
    assert_eq!(transport.count(Method::Post, POE_CONFIG_PATH), 1);
}

#[test]
fn stats_command_over_partial_snapshot() {
    let transport = MockTransport::new();
    enqueue_login(&transport);
    // Only ports 1 and 3 present; port 1 delivering, port 3 searching.
    let html = format!(
        "{}{}",
        port_block(1, "Delivering Power", "ml003@4@", "5.8"),
        port_block(3, "Searching", "Unknown", "0.0"),
    );
    transport.enqueue(Method::Get, STATUS_PATH, HttpResponse::ok(html));
    let logger = CaptureLogger::new();

    let result = execute_stats(&transport, &credentials(), &logger).expect("stats");

    assert_eq!(result.ports.len(), 2);
    assert_eq!(result.ports[0].port, 1);
    assert!(result.ports[0].enabled);
    assert_eq!(result.ports[0].power_class, "Class 4");
    assert_eq!(result.ports[1].port, 3);
    assert!(!result.ports[1].enabled);
    assert!((result.total_power - 5.8).abs() < 0.001);

    let rendered = output::render_stats(&result, true, false).expect("json");
    assert!(rendered.contains(r#""total_power":5.8"#));
    assert!(rendered.contains(r#""status":"Searching""#));
}

#[test]
fn login_failure_reports_auth_error() {
    let transport = MockTransport::new();
    transport.enqueue(Method::Get, LOGIN_PATH, HttpResponse::ok(LOGIN_PAGE));
    // Wrong password: the console answers without a cookie.
    transport.enqueue(Method::Post, LOGIN_PATH, HttpResponse::ok("denied"));
    let logger = CaptureLogger::new();

    let result = execute_on(&transport, &credentials(), 1, &logger);
    assert!(matches!(result, Err(CommandError::Auth(_))));
    // Nothing was mutated.
    assert_eq!(transport.count(Method::Get, POE_CONFIG_PATH), 0);
}
