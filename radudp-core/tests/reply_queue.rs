#![forbid(unsafe_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use radudp_core::{Client, ClientTable, QueuedReply, ReplyQueue, TransportMetrics};
use tokio::net::UdpSocket;

fn fake_client(port: u16) -> Arc<Client> {
    // `Client` has no public constructor outside `ClientTable`, so tests
    // exercise the queue through it instead.
    let table = ClientTable::new(Duration::from_secs(60));
    let addr: SocketAddr = format!("127.0.0.1:{port}").parse().unwrap();
    table.match_or_insert(addr, None, &TransportMetrics::default())
}

#[tokio::test]
async fn pop_returns_pushed_reply_in_order() {
    let socket = Arc::new(UdpSocket::bind("127.0.0.1:0").await.unwrap());
    let queue = ReplyQueue::new();
    let client = fake_client(2000);

    queue.push(QueuedReply {
        from: Arc::downgrade(&client),
        socket: socket.clone(),
        buf: vec![1, 2, 3],
    });

    let reply = queue.pop().await;
    assert_eq!(reply.buf, vec![1, 2, 3]);
    assert!(reply.from.upgrade().is_some());
}

#[tokio::test]
async fn evicted_client_reference_fails_to_upgrade_after_pop() {
    let socket = Arc::new(UdpSocket::bind("127.0.0.1:0").await.unwrap());
    let queue = ReplyQueue::new();
    let client = fake_client(2001);
    let weak = Arc::downgrade(&client);

    queue.push(QueuedReply {
        from: weak.clone(),
        socket,
        buf: vec![9],
    });

    drop(client);

    let reply = queue.pop().await;
    assert!(
        reply.from.upgrade().is_none(),
        "writer must observe a dead weak reference for an evicted client"
    );
}

#[tokio::test]
async fn queue_starts_empty() {
    let queue = ReplyQueue::new();
    assert!(queue.is_empty());
}
