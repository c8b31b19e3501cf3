#![forbid(unsafe_code)]

use std::net::{IpAddr, Ipv4Addr};

use radudp_core::{ClientSockPool, ServerConfig};

fn server(name: &str, source: Option<&str>, addr: &str) -> ServerConfig {
    ServerConfig {
        name: name.to_string(),
        address: addr.parse().unwrap(),
        source: source.map(str::to_string),
        retry_count: None,
        retry_interval_secs: None,
    }
}

#[tokio::test]
async fn two_servers_sharing_a_source_share_one_socket() {
    let pool = ClientSockPool::new();
    let a = server("upstream-a", Some("127.0.0.1"), "10.0.0.7:1812");
    let b = server("upstream-b", Some("127.0.0.1"), "10.0.0.8:1812");

    let sock_a = pool.assign(&a, None).await.unwrap();
    let sock_b = pool.assign(&b, None).await.unwrap();

    assert_eq!(sock_a.local_addr().unwrap(), sock_b.local_addr().unwrap());
    assert_eq!(pool.len(), 1);
}

#[tokio::test]
async fn different_sources_get_different_sockets() {
    let pool = ClientSockPool::new();
    let a = server("upstream-a", Some("127.0.0.1"), "10.0.0.7:1812");
    let b = server("upstream-b", Some("127.0.0.2"), "10.0.0.8:1812");

    let sock_a = pool.assign(&a, None).await.unwrap();
    let sock_b = pool.assign(&b, None).await.unwrap();

    assert_ne!(sock_a.local_addr().unwrap(), sock_b.local_addr().unwrap());
    assert_eq!(pool.len(), 2);
}

#[tokio::test]
async fn default_source_is_used_when_server_has_none() {
    let pool = ClientSockPool::new();
    let a = server("upstream-a", None, "10.0.0.7:1812");

    let sock = pool
        .assign(&a, Some(IpAddr::V4(Ipv4Addr::LOCALHOST)))
        .await
        .unwrap();
    assert!(sock.local_addr().unwrap().ip().is_loopback());
    assert_eq!(pool.len(), 1);
}

#[tokio::test]
async fn assignment_with_no_source_and_no_default_fails() {
    let pool = ClientSockPool::new();
    let a = server("upstream-a", None, "10.0.0.7:1812");
    assert!(pool.assign(&a, None).await.is_err());
}
