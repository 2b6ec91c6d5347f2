//! Integration tests for the remote command → LedService → ports pipeline.
//!
//! These run on the host (x86_64) and verify the full handler contract —
//! normalization, transitions, return codes, and the strict ordering of
//! side effects — without any real hardware.

use crate::mock_hw::{MockPin, MockPublisher, SideEffect, shared_log};

use lamplink::adapters::log_sink::LogPublisher;
use lamplink::app::service::{LedService, RESULT_INVALID_ARG, RESULT_OK};

fn make_started() -> (LedService, MockPin, MockPublisher) {
    let log = shared_log();
    let mut service = LedService::new();
    let mut pin = MockPin::new(log.clone());
    let mut events = MockPublisher::new(log.clone());
    service.start(&mut pin, &mut events);
    log.borrow_mut().clear();
    (service, pin, events)
}

// ── Startup scenario ──────────────────────────────────────────

#[test]
fn startup_announces_off_and_drives_low() {
    let log = shared_log();
    let mut service = LedService::new();
    let mut pin = MockPin::new(log.clone());
    let mut events = MockPublisher::new(log.clone());

    service.start(&mut pin, &mut events);

    assert!(!service.is_on());
    assert!(!pin.level_high);
    assert_eq!(
        events.events(),
        vec![("led_state".to_owned(), "OFF".to_owned())],
        "exactly one OFF event at startup"
    );
}

// ── ON / OFF across case and whitespace variants ──────────────

#[test]
fn on_variants_set_state_high_and_publish_on() {
    for input in ["on", " ON ", "On", "\ton\n"] {
        let (mut service, mut pin, mut events) = make_started();

        let code = service.handle_set_led(input, &mut pin, &mut events);

        assert_eq!(code, RESULT_OK, "input {:?}", input);
        assert!(service.is_on(), "input {:?}", input);
        assert!(pin.level_high, "input {:?}", input);
        assert_eq!(
            events.events(),
            vec![("led_state".to_owned(), "ON".to_owned())],
            "input {:?}",
            input
        );
    }
}

#[test]
fn off_variants_set_state_low_and_publish_off() {
    for input in ["off", " OFF ", "Off"] {
        let (mut service, mut pin, mut events) = make_started();
        // Turn it on first so OFF has something to change.
        service.handle_set_led("ON", &mut pin, &mut events);

        let code = service.handle_set_led(input, &mut pin, &mut events);

        assert_eq!(code, RESULT_OK, "input {:?}", input);
        assert!(!service.is_on(), "input {:?}", input);
        assert!(!pin.level_high, "input {:?}", input);
        assert_eq!(
            events.events().last(),
            Some(&("led_state".to_owned(), "OFF".to_owned())),
            "input {:?}",
            input
        );
    }
}

#[test]
fn on_is_idempotent() {
    let (mut service, mut pin, mut events) = make_started();

    assert_eq!(service.handle_set_led("ON", &mut pin, &mut events), RESULT_OK);
    assert_eq!(service.handle_set_led("ON", &mut pin, &mut events), RESULT_OK);

    assert!(service.is_on());
    assert!(pin.level_high);
    // Every successful invocation publishes, even without a level change.
    assert_eq!(events.events().len(), 2);
}

// ── TOGGLE ────────────────────────────────────────────────────

#[test]
fn toggle_negates_current_state() {
    let (mut service, mut pin, mut events) = make_started();

    service.handle_set_led("TOGGLE", &mut pin, &mut events);
    assert!(service.is_on());

    service.handle_set_led("TOGGLE", &mut pin, &mut events);
    assert!(!service.is_on());
}

#[test]
fn toggle_pair_restores_state_from_either_start() {
    for start_on in [false, true] {
        let (mut service, mut pin, mut events) = make_started();
        if start_on {
            service.handle_set_led("ON", &mut pin, &mut events);
        }

        service.handle_set_led("TOGGLE", &mut pin, &mut events);
        service.handle_set_led("TOGGLE", &mut pin, &mut events);

        assert_eq!(service.is_on(), start_on);
        assert_eq!(pin.level_high, start_on);
    }
}

// ── Rejection ─────────────────────────────────────────────────

#[test]
fn unrecognized_inputs_change_nothing() {
    for input in ["BLINK", "", "1", "purple", "ONN", "O N"] {
        let (mut service, mut pin, mut events) = make_started();
        let writes_before = pin.writes;

        let code = service.handle_set_led(input, &mut pin, &mut events);

        assert_eq!(code, RESULT_INVALID_ARG, "input {:?}", input);
        assert!(!service.is_on(), "input {:?}", input);
        assert_eq!(
            pin.writes, writes_before,
            "input {:?}: pin must not be touched",
            input
        );
        assert!(
            events.events().is_empty(),
            "input {:?}: no event may be emitted",
            input
        );
    }
}

// ── End-to-end scenario ───────────────────────────────────────

#[test]
fn toggle_toggle_purple_scenario() {
    let (mut service, mut pin, mut events) = make_started();

    assert_eq!(
        service.handle_set_led("toggle", &mut pin, &mut events),
        RESULT_OK
    );
    assert!(service.is_on());
    assert!(pin.level_high);
    assert_eq!(
        events.events().last(),
        Some(&("led_state".to_owned(), "ON".to_owned()))
    );

    assert_eq!(
        service.handle_set_led("TOGGLE", &mut pin, &mut events),
        RESULT_OK
    );
    assert!(!service.is_on());
    assert!(!pin.level_high);
    assert_eq!(
        events.events().last(),
        Some(&("led_state".to_owned(), "OFF".to_owned()))
    );

    let before = events.events().len();
    assert_eq!(
        service.handle_set_led("purple", &mut pin, &mut events),
        RESULT_INVALID_ARG
    );
    assert!(!service.is_on());
    assert_eq!(events.events().len(), before, "no event for invalid input");
}

// ── Publisher-agnostic seam ───────────────────────────────────

#[test]
fn handler_accepts_any_event_publisher() {
    // The serial-log publisher satisfies the same port as the cloud link;
    // the handler contract holds regardless of which one is injected.
    let mut service = LedService::new();
    let mut pin = MockPin::new(shared_log());
    let mut serial = LogPublisher::new();
    service.start(&mut pin, &mut serial);

    assert_eq!(
        service.handle_set_led("toggle", &mut pin, &mut serial),
        RESULT_OK
    );
    assert!(service.is_on());
    assert_eq!(
        service.handle_set_led("nope", &mut pin, &mut serial),
        RESULT_INVALID_ARG
    );
    assert!(service.is_on());
}

// ── Side-effect ordering ──────────────────────────────────────

#[test]
fn pin_write_precedes_event_publish() {
    let log = shared_log();
    let mut service = LedService::new();
    let mut pin = MockPin::new(log.clone());
    let mut events = MockPublisher::new(log.clone());
    service.start(&mut pin, &mut events);
    log.borrow_mut().clear();

    service.handle_set_led("ON", &mut pin, &mut events);

    let effects = log.borrow().clone();
    assert_eq!(
        effects,
        vec![
            SideEffect::PinHigh,
            SideEffect::Event {
                name: "led_state".to_owned(),
                data: "ON".to_owned(),
            },
        ],
        "state mutation → pin write → event emission, in that order"
    );
}
