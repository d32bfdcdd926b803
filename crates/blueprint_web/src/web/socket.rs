use blueprint_ui::console::TransportEvent;
use blueprint_ui::protocol::Frame;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{BinaryType, CloseEvent, Event, MessageEvent, WebSocket};

use super::state::ConsoleHandle;

/// Open the socket and feed its events to the console.
///
/// If the socket can't even be constructed the console keeps running without
/// a transport (demo mode); it just never leaves the disconnected state.
pub(super) fn connect(url: &str, console: ConsoleHandle) {
    let ws = match WebSocket::new(url) {
        Ok(ws) => ws,
        Err(e) => {
            warn!(endpoint = url, error = ?e, "could not open socket; running in demo mode");
            return;
        }
    };
    ws.set_binary_type(BinaryType::Arraybuffer);

    let onopen = Closure::wrap(Box::new(move |_ev: Event| {
        deliver(console, TransportEvent::Opened);
    }) as Box<dyn FnMut(Event)>);
    ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
    onopen.forget();

    let onmessage = Closure::wrap(Box::new(move |ev: MessageEvent| {
        let data = ev.data();
        match data.as_string() {
            Some(text) => deliver(console, TransportEvent::Frame(Frame::Text(&text))),
            None => {
                let bytes = js_sys::Uint8Array::new(&data).to_vec();
                deliver(console, TransportEvent::Frame(Frame::Binary(&bytes)));
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();

    let onerror = Closure::wrap(Box::new(move |_ev: Event| {
        deliver(console, TransportEvent::Error);
    }) as Box<dyn FnMut(Event)>);
    ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    let onclose = Closure::wrap(Box::new(move |ev: CloseEvent| {
        info!(code = ev.code(), reason = %ev.reason(), "socket closed");
        deliver(console, TransportEvent::Closed);
    }) as Box<dyn FnMut(CloseEvent)>);
    ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
    onclose.forget();
}

fn deliver(console: ConsoleHandle, event: TransportEvent<'_>) {
    console.apply(|c, host| c.on_transport(event, host));
}
