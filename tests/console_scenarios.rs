//! End-to-end console behaviour under virtual time.

use blueprint_ui::prelude::*;

fn frame(console: &mut Console, host: &mut VirtualHost, raw: &str) {
    console.on_transport(TransportEvent::Frame(Frame::Text(raw)), host);
}

fn fresh() -> (Console, VirtualHost) {
    let mut console = Console::default();
    let mut host = VirtualHost::with_wall_clock(14 * 3600);
    console.start(&mut host);
    (console, host)
}

#[test]
fn full_session_walkthrough() {
    let (mut console, mut host) = fresh();

    console.on_transport(TransportEvent::Opened, &mut host);
    frame(&mut console, &mut host, r#"{"type":"status","status":"connected"}"#);
    assert_eq!(console.status().voice_label(), "🟢 Connected");
    assert_eq!(console.status().connection(), ConnectionStatus::Connected);

    frame(&mut console, &mut host, r#"{"type":"thought","content":"Analyzing…"}"#);
    assert!(console.thought().visible());
    assert_eq!(console.thought().text(), "Analyzing…");

    frame(
        &mut console,
        &mut host,
        r#"{"type":"result","content":[{"title":"A","subtitle":"x"}]}"#,
    );
    assert!(console.results().visible());
    assert_eq!(console.results().items(), &[ResultItem::new("A", "x")]);

    frame(
        &mut console,
        &mut host,
        r#"{"type":"command","command":"status","response":"ok"}"#,
    );
    let first = console.history().latest().expect("history entry");
    assert_eq!(first.command, "status");
    assert_eq!(first.response_text(), "ok");
    assert_eq!(first.timestamp, "14:00:00");

    host.advance_ms(5_000, &mut console);
    assert!(!console.thought().visible());
    assert!(console.results().visible());

    host.advance_ms(5_000, &mut console);
    assert!(!console.results().visible());

    // The clock kept ticking throughout.
    assert_eq!(console.clock(), "14:00:10");
}

#[test]
fn thought_hides_exactly_at_ttl() {
    let (mut console, mut host) = fresh();
    frame(&mut console, &mut host, r#"{"type":"thought","content":"t"}"#);

    host.advance_ms(4_999, &mut console);
    assert!(console.thought().visible());
    host.advance_ms(1, &mut console);
    assert!(!console.thought().visible());
}

#[test]
fn earlier_hide_timer_cuts_a_newer_thought_short() {
    let (mut console, mut host) = fresh();

    frame(&mut console, &mut host, r#"{"type":"thought","content":"first"}"#);
    host.advance_ms(3_000, &mut console);
    frame(&mut console, &mut host, r#"{"type":"thought","content":"second"}"#);
    assert_eq!(console.thought().text(), "second");

    host.advance_ms(1_999, &mut console);
    assert!(console.thought().visible());

    // t = 5000: the first message's timer fires and hides "second".
    host.advance_ms(1, &mut console);
    assert!(!console.thought().visible());
    assert_eq!(console.thought().text(), "second");

    // A third thought at t = 6000 is hidden by the second's timer at t = 8000.
    host.advance_ms(1_000, &mut console);
    frame(&mut console, &mut host, r#"{"type":"thought","content":"third"}"#);
    host.advance_ms(1_999, &mut console);
    assert!(console.thought().visible());
    host.advance_ms(1, &mut console);
    assert!(!console.thought().visible());
}

#[test]
fn thought_fades_in_over_ten_ticks() {
    let (mut console, mut host) = fresh();
    frame(&mut console, &mut host, r#"{"type":"thought","content":"fade"}"#);
    assert_eq!(console.thought().opacity(), 0.0);

    host.advance_ms(49, &mut console);
    assert_eq!(console.thought().opacity(), 0.0);
    host.advance_ms(1, &mut console);
    assert!((console.thought().opacity() - 0.1).abs() < 1e-6);

    host.advance_ms(200, &mut console);
    assert!((console.thought().opacity() - 0.5).abs() < 1e-6);

    host.advance_ms(250, &mut console);
    assert_eq!(console.thought().opacity(), 1.0);

    // Only the hide timer and the clock tick remain; the fade chain stopped.
    assert_eq!(host.pending(), 2);
}

#[test]
fn overlapping_fades_both_complete() {
    let (mut console, mut host) = fresh();
    frame(&mut console, &mut host, r#"{"type":"thought","content":"one"}"#);
    host.advance_ms(200, &mut console);
    frame(&mut console, &mut host, r#"{"type":"thought","content":"two"}"#);
    assert_eq!(console.thought().opacity(), 0.0);

    host.advance_ms(500, &mut console);
    assert_eq!(console.thought().opacity(), 1.0);
    assert_eq!(console.thought().text(), "two");
}

#[test]
fn result_cards_render_in_order_and_replace() {
    let (mut console, mut host) = fresh();
    frame(
        &mut console,
        &mut host,
        r#"{"type":"result","content":[
            {"title":"one","subtitle":"1"},
            {"title":"two","subtitle":"2"},
            {"title":"three","subtitle":"3"}
        ]}"#,
    );
    let titles: Vec<&str> = console
        .results()
        .items()
        .iter()
        .map(|i| i.title.as_str())
        .collect();
    assert_eq!(titles, ["one", "two", "three"]);

    frame(&mut console, &mut host, r#"{"type":"result","content":[]}"#);
    assert!(console.results().items().is_empty());
    assert!(console.results().visible());

    host.advance_ms(9_999, &mut console);
    assert!(console.results().visible());
    host.advance_ms(1, &mut console);
    assert!(!console.results().visible());
}

#[test]
fn history_is_newest_first_and_grows_by_one() {
    let (mut console, mut host) = fresh();

    for i in 0..5 {
        let raw = format!(r#"{{"type":"command","command":"c{i}","response":"r{i}"}}"#);
        frame(&mut console, &mut host, &raw);
        assert_eq!(console.history().len(), i + 1);
        host.advance_ms(1_000, &mut console);
    }
    frame(
        &mut console,
        &mut host,
        r#"{"type":"command","command":"quiet","response":null}"#,
    );

    let commands: Vec<&str> = console
        .history()
        .iter()
        .map(|e| e.command.as_str())
        .collect();
    assert_eq!(commands, ["quiet", "c4", "c3", "c2", "c1", "c0"]);
    assert_eq!(console.history().latest().map(|e| e.response_text()), Some(""));
    assert_eq!(console.history().latest().map(|e| e.timestamp.as_str()), Some("14:00:05"));
}

#[test]
fn unknown_status_tokens_are_idempotent() {
    let (mut console, mut host) = fresh();
    frame(&mut console, &mut host, r#"{"type":"status","status":"thinking"}"#);
    let before = *console.status();

    for token in ["disconnected", "sleeping", "Connected", ""] {
        let raw = format!(r#"{{"type":"status","status":"{token}"}}"#);
        frame(&mut console, &mut host, &raw);
        assert_eq!(*console.status(), before);
    }
    assert_eq!(console.status().system(), SystemIndicator::Processing);
}

#[test]
fn transport_loss_is_not_fatal() {
    let (mut console, mut host) = fresh();
    console.on_transport(TransportEvent::Opened, &mut host);
    frame(&mut console, &mut host, r#"{"type":"thought","content":"before"}"#);
    console.on_transport(TransportEvent::Error, &mut host);

    assert_eq!(console.status().connection(), ConnectionStatus::Disconnected);
    assert_eq!(console.status().system(), SystemIndicator::Disconnected);

    // Pending timers still fire; the rest of the console keeps working.
    host.advance_ms(5_000, &mut console);
    assert!(!console.thought().visible());
    assert_eq!(console.clock(), "14:00:05");
}
