/// INTEGRATION TESTS: Real sockets on the loopback interface
///
/// A std UDP socket plays the engine. The control surface binds its listener
/// to an ephemeral port, so these tests can run in parallel.

use std::{
    net::{SocketAddr, UdpSocket},
    thread,
    time::{Duration, Instant},
};

use chroma_client::{
    transport::StateListener, ClientConfig, ControlSurface, PacketSender, SendError, SurfaceEvent,
    UdpPacketSender,
};
use chroma_shared::{
    encode_full_state, frame_to_bytes, frames_from_bytes, Frame, ParamValue, ParameterId,
    StateSnapshot,
};
use chroma_test::assert_approx;

const WAIT: Duration = Duration::from_secs(2);

fn engine_socket() -> UdpSocket {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    socket.set_read_timeout(Some(WAIT)).unwrap();
    socket
}

fn recv_frames(socket: &UdpSocket) -> Vec<Frame> {
    let mut buffer = [0u8; 65_536];
    let (length, _) = socket.recv_from(&mut buffer).unwrap();
    frames_from_bytes(&buffer[..length]).unwrap()
}

fn wait_for_state(surface: &mut ControlSurface) -> Vec<SurfaceEvent> {
    let deadline = Instant::now() + WAIT;
    loop {
        let events = surface.receive();
        if events.iter().any(SurfaceEvent::is_state_update) || Instant::now() > deadline {
            return events;
        }
        thread::sleep(Duration::from_millis(10));
    }
}

fn loopback_config(engine: &UdpSocket) -> ClientConfig {
    ClientConfig {
        engine_addr: engine.local_addr().unwrap(),
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        ..ClientConfig::default()
    }
}

#[test]
fn surface_syncs_and_sends_over_udp() {
    let _ = env_logger::builder().is_test(true).try_init();
    let engine = engine_socket();
    let mut surface = ControlSurface::connect(loopback_config(&engine)).unwrap();

    // connecting asks for a full-state broadcast
    let frames = recv_frames(&engine);
    assert_eq!(frames[0].addr, "/chroma/sync");

    let mut state = StateSnapshot::default();
    state.set(ParameterId::Gain, ParamValue::Float(0.5)).unwrap();
    let bytes = frame_to_bytes(&encode_full_state(&state)).unwrap();
    let listen_addr = surface.listen_addr().unwrap();
    engine.send_to(&bytes, listen_addr).unwrap();

    let events = wait_for_state(&mut surface);
    assert!(events.iter().any(SurfaceEvent::is_state_update));
    assert!(surface.is_connected());
    assert_approx(surface.snapshot().float(ParameterId::Gain), 0.5);

    surface.adjust(ParameterId::Gain, 0.05).unwrap();
    let frames = recv_frames(&engine);
    assert_eq!(frames[0].addr, "/chroma/gain");
}

#[test]
fn send_to_silent_peer_succeeds() {
    let port = {
        let placeholder = UdpSocket::bind("127.0.0.1:0").unwrap();
        placeholder.local_addr().unwrap().port()
    };
    let sender = UdpPacketSender::connect(SocketAddr::from(([127, 0, 0, 1], port))).unwrap();

    assert!(sender.send(b"/chroma/sync\0\0\0\0,\0\0\0").is_ok());
}

#[test]
fn port_zero_is_an_invalid_destination() {
    let result = UdpPacketSender::connect(SocketAddr::from(([127, 0, 0, 1], 0)));
    assert!(matches!(result, Err(SendError::InvalidDestination { .. })));
}

#[test]
fn hostname_destination_resolves() {
    let engine = engine_socket();
    let port = engine.local_addr().unwrap().port();
    let sender = UdpPacketSender::resolve("localhost", port).unwrap();
    assert_eq!(sender.engine_addr().port(), port);
}

#[test]
fn unresolvable_host_is_an_invalid_destination() {
    let result = UdpPacketSender::resolve("host.invalid", 57120);
    assert!(matches!(result, Err(SendError::InvalidDestination { .. })));
}

#[test]
fn listener_shuts_down_and_releases_port() {
    let (handle, _snapshots) =
        StateListener::spawn(SocketAddr::from(([127, 0, 0, 1], 0)), 4).unwrap();
    let address = handle.local_addr();
    handle.shutdown();

    assert!(UdpSocket::bind(address).is_ok());
}

#[test]
fn listener_bind_conflict_is_reported() {
    let occupied = UdpSocket::bind("127.0.0.1:0").unwrap();
    let result = StateListener::spawn(occupied.local_addr().unwrap(), 4);
    assert!(matches!(
        result,
        Err(chroma_client::ListenerError::Bind { .. })
    ));
}
