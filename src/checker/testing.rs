// Standard library
use std::net::TcpListener;
use std::time::Duration;

// Current module imports
use super::functions::create_reqwest_client;
use super::types::Checkers;

pub(crate) fn test_checkers() -> Checkers {
    let client = create_reqwest_client(Some(Duration::from_secs(5))).unwrap();
    Checkers::new(client)
}

/// A local URL nothing is listening on.
pub(crate) fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
