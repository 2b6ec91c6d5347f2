//! Cloud link — device-side bridge to the platform runtime.
//!
//! The platform owns connectivity, credentials, delivery, and retry.  This
//! adapter exposes the two capabilities the domain consumes:
//!
//! 1. the named remote callback (`setLED`), surfaced to the main loop as a
//!    polled queue of [`Invocation`]s, and
//! 2. named outbound events with string payloads ([`EventPublisher`]).
//!
//! Every topic is scoped under `<label>/<device-id>/`, which is what makes
//! events non-public: the broker's ACLs confine that namespace to the
//! device's own account.
//!
//! ## Dual-target design
//!
//! On ESP-IDF the bridge speaks MQTT via `esp-idf-svc`.  The client's
//! callback runs on the MQTT task, NOT the main loop; received invocations
//! cross over on a bounded channel so the handler only ever runs on the
//! main loop, one invocation at a time.
//!
//! ```text
//! ┌──────────────┐  Invocation   ┌──────────────┐
//! │  MQTT task   │──────────────▶│  Main loop   │
//! │  (callback)  │◀──────────────│  (handler)   │
//! └──────────────┘  result code   └──────────────┘
//! ```
//!
//! On host/test: in-memory queues, with published events and result codes
//! recorded for assertions.

use core::fmt::Write;

use log::{info, warn};

use crate::app::commands::SET_LED_FUNCTION;
use crate::app::ports::EventPublisher;
use crate::config::SystemConfig;
use crate::error::{CommsError, Result};

/// Maximum accepted length of a remote argument, in bytes.
pub const MAX_ARG_LEN: usize = 128;

/// One pending remote invocation as handed over by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub arg: heapless::String<MAX_ARG_LEN>,
}

/// Build an [`Invocation`] from a raw payload.
///
/// Oversized arguments are refused rather than truncated — truncation could
/// turn garbage into a valid token.  Invalid UTF-8 is replaced and left for
/// the parser to reject.
fn make_invocation(payload: &[u8]) -> core::result::Result<Invocation, CommsError> {
    let text = String::from_utf8_lossy(payload);
    let mut arg = heapless::String::new();
    arg.push_str(&text)
        .map_err(|()| CommsError::ArgumentTooLong)?;
    Ok(Invocation { arg })
}

// ───────────────────────────────────────────────────────────────
// Inbound channel (ESP-IDF only): MQTT task → main loop
// ───────────────────────────────────────────────────────────────

/// Depth of the inbound invocation queue.
#[cfg(target_os = "espidf")]
const CALL_DEPTH: usize = 4;

#[cfg(target_os = "espidf")]
static CALL_CHANNEL: embassy_sync::channel::Channel<
    embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex,
    Invocation,
    CALL_DEPTH,
> = embassy_sync::channel::Channel::new();

/// Feed one raw argument into the invocation queue.
///
/// Called from the MQTT client's task context — NOT the main loop.  The
/// channel is `Send`, so the cross-thread send is safe.
#[cfg(target_os = "espidf")]
fn enqueue_invocation(payload: &[u8]) -> core::result::Result<(), CommsError> {
    let inv = make_invocation(payload)?;
    CALL_CHANNEL
        .try_send(inv)
        .map_err(|_| CommsError::QueueFull)
}

// ───────────────────────────────────────────────────────────────
// CloudLink
// ───────────────────────────────────────────────────────────────

pub struct CloudLink {
    label: heapless::String<24>,
    device_id: heapless::String<16>,
    #[cfg(target_os = "espidf")]
    client: esp_idf_svc::mqtt::client::EspMqttClient<'static>,
    #[cfg(not(target_os = "espidf"))]
    pending: std::collections::VecDeque<Invocation>,
    #[cfg(not(target_os = "espidf"))]
    published: Vec<(String, String)>,
    #[cfg(not(target_os = "espidf"))]
    responses: Vec<i32>,
}

impl CloudLink {
    /// Topic the platform invokes the remote function on.
    fn call_topic(&self) -> heapless::String<96> {
        let mut t = heapless::String::new();
        let _ = write!(
            t,
            "{}/{}/call/{}",
            self.label, self.device_id, SET_LED_FUNCTION
        );
        t
    }

    /// Topic the integer return code is surfaced on.
    fn result_topic(&self) -> heapless::String<96> {
        let mut t = heapless::String::new();
        let _ = write!(
            t,
            "{}/{}/call/{}/result",
            self.label, self.device_id, SET_LED_FUNCTION
        );
        t
    }

    /// Topic a named event is published on.
    fn event_topic(&self, name: &str) -> heapless::String<96> {
        let mut t = heapless::String::new();
        let _ = write!(t, "{}/{}/event/{}", self.label, self.device_id, name);
        t
    }
}

// ───────────────────────────────────────────────────────────────
// ESP-IDF implementation
// ───────────────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
impl CloudLink {
    /// Construct the MQTT client and register the remote function.
    ///
    /// The platform owns the network underneath; the client reconnects on
    /// its own and re-delivers queued subscriptions when the link returns.
    pub fn connect(config: &SystemConfig, device_id: &str) -> Result<Self> {
        use esp_idf_svc::mqtt::client::{EspMqttClient, EventPayload, MqttClientConfiguration, QoS};

        let mut id = heapless::String::new();
        id.push_str(device_id)
            .map_err(|()| crate::error::Error::Config("device id too long"))?;

        let conf = MqttClientConfiguration {
            client_id: Some(device_id),
            ..Default::default()
        };

        // The callback filters on the call topic and hands the raw
        // argument to the main loop via the bounded channel.
        let mut call_filter = heapless::String::<96>::new();
        let _ = write!(
            call_filter,
            "{}/{}/call/{}",
            config.device_label, device_id, SET_LED_FUNCTION
        );

        let client = EspMqttClient::new_cb(config.mqtt_broker_url.as_str(), &conf, move |event| {
            match event.payload() {
                EventPayload::Received { topic, data, .. } => {
                    if topic == Some(call_filter.as_str()) {
                        if let Err(e) = enqueue_invocation(data) {
                            warn!("Cloud: dropped inbound invocation ({})", e);
                        }
                    }
                }
                EventPayload::Connected(_) => info!("Cloud: link up"),
                EventPayload::Disconnected => {
                    warn!("Cloud: link down, platform is reconnecting");
                }
                _ => {}
            }
        })
        .map_err(|_| CommsError::ConnectFailed)?;

        let mut link = Self {
            label: config.device_label.clone(),
            device_id: id,
            client,
        };

        let call_topic = link.call_topic();
        link.client
            .subscribe(call_topic.as_str(), QoS::AtLeastOnce)
            .map_err(|_| CommsError::ConnectFailed)?;
        info!(
            "Cloud: remote function '{}' registered on '{}'",
            SET_LED_FUNCTION, call_topic
        );

        Ok(link)
    }

    /// Next pending remote invocation, if any.
    pub fn poll(&mut self) -> Option<Invocation> {
        CALL_CHANNEL.try_receive().ok()
    }

    /// Surface the handler's integer return code to the invoker.
    pub fn respond(&mut self, code: i32) {
        use esp_idf_svc::mqtt::client::QoS;

        let topic = self.result_topic();
        let mut payload = heapless::String::<12>::new();
        let _ = write!(payload, "{}", code);
        if self
            .client
            .publish(topic.as_str(), QoS::AtLeastOnce, false, payload.as_bytes())
            .is_err()
        {
            warn!("Cloud: {}", CommsError::PublishFailed);
        }
    }
}

#[cfg(target_os = "espidf")]
impl EventPublisher for CloudLink {
    fn publish(&mut self, name: &'static str, data: &str) {
        use esp_idf_svc::mqtt::client::QoS;

        let topic = self.event_topic(name);
        if self
            .client
            .publish(topic.as_str(), QoS::AtLeastOnce, false, data.as_bytes())
            .is_err()
        {
            warn!("Cloud: {}", CommsError::PublishFailed);
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Host / simulation implementation
// ───────────────────────────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
impl CloudLink {
    /// Simulation: no broker, queues live in-memory.
    pub fn connect(config: &SystemConfig, device_id: &str) -> Result<Self> {
        let mut id = heapless::String::new();
        id.push_str(device_id)
            .map_err(|()| crate::error::Error::Config("device id too long"))?;

        let link = Self {
            label: config.device_label.clone(),
            device_id: id,
            pending: std::collections::VecDeque::new(),
            published: Vec::new(),
            responses: Vec::new(),
        };
        info!(
            "Cloud(sim): remote function '{}' registered on '{}'",
            SET_LED_FUNCTION,
            link.call_topic()
        );
        Ok(link)
    }

    /// Inject an invocation as if the platform delivered one.
    pub fn inject(&mut self, payload: &str) {
        match make_invocation(payload.as_bytes()) {
            Ok(inv) => self.pending.push_back(inv),
            Err(e) => warn!("Cloud(sim): dropped inbound invocation ({})", e),
        }
    }

    /// Next pending remote invocation, if any.
    pub fn poll(&mut self) -> Option<Invocation> {
        self.pending.pop_front()
    }

    /// Surface the handler's integer return code to the invoker.
    pub fn respond(&mut self, code: i32) {
        info!("Cloud(sim): {} <- {}", self.result_topic(), code);
        self.responses.push(code);
    }

    /// Events published so far, as (topic, payload) pairs.
    pub fn published(&self) -> &[(String, String)] {
        &self.published
    }

    /// Return codes surfaced so far.
    pub fn responses(&self) -> &[i32] {
        &self.responses
    }
}

#[cfg(not(target_os = "espidf"))]
impl EventPublisher for CloudLink {
    fn publish(&mut self, name: &'static str, data: &str) {
        let topic = self.event_topic(name);
        self.published.push((topic.as_str().into(), data.into()));
    }
}
