//! Seed discovery through the public API, as an orchestrator would use it.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use seed_peers::{
    HostResolver, NetworkParameters, PackedSeed, PeerDiscovery, PeerDiscoveryError,
    SeedPeerProvider, SeedTable, StaticNetworkParameters,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Chain parameters object of a host node.
struct TestnetParams;

impl NetworkParameters for TestnetParams {
    fn port(&self) -> u16 {
        18121
    }
}

/// Resolver that refuses every host name.
struct Offline;

impl HostResolver for Offline {
    fn resolve(&self, host: &str, _port: u16) -> io::Result<Vec<SocketAddr>> {
        Err(io::Error::new(
            io::ErrorKind::NotConnected,
            format!("offline: {host}"),
        ))
    }
}

#[test]
fn test_orchestrator_holds_provider_as_trait_object() {
    init_tracing();

    let table = SeedTable::new(
        vec![PackedSeed::new(0x0100_007F), PackedSeed::new(0x2EFD_CB71)],
        vec!["217.31.181.40".to_string()],
    )
    .unwrap();
    let providers: Vec<Box<dyn PeerDiscovery>> = vec![Box::new(SeedPeerProvider::new(
        Arc::new(table),
        Arc::new(TestnetParams),
    ))];

    let provider = &providers[0];
    let mut walked = Vec::new();
    while let Some(peer) = provider.next_peer().unwrap() {
        walked.push(peer);
    }

    assert_eq!(
        walked,
        vec![
            "127.0.0.1:18121".parse::<SocketAddr>().unwrap(),
            "113.203.253.46:18121".parse().unwrap(),
        ]
    );
    assert_eq!(provider.all_peers(Duration::from_secs(1)).unwrap(), walked);
    assert_eq!(
        provider.all_textual_peers(Duration::from_secs(1)).unwrap(),
        vec!["217.31.181.40:18121".parse::<SocketAddr>().unwrap()]
    );
    provider.shutdown();
}

#[test]
fn test_mainnet_textual_seeds_need_no_resolver() {
    init_tracing();

    let provider = SeedPeerProvider::new(
        Arc::new(SeedTable::mainnet()),
        Arc::new(StaticNetworkParameters::mainnet()),
    )
    .with_resolver(Box::new(Offline));

    let peers = provider.all_textual_peers(Duration::ZERO).unwrap();
    let expected: Vec<SocketAddr> = [
        "162.243.57.246",
        "84.200.17.249",
        "174.53.218.230",
        "72.78.100.7",
        "217.31.181.40",
        "81.2.95.132",
    ]
    .iter()
    .map(|ip| format!("{ip}:8121").parse().unwrap())
    .collect();

    assert_eq!(peers, expected);
    assert_eq!(provider.next_peer().unwrap(), None);
    assert!(provider.all_peers(Duration::ZERO).unwrap().is_empty());
}

#[test]
fn test_unresolvable_host_fails_batch_with_cause() {
    init_tracing();

    let table = SeedTable::new(
        vec![],
        vec!["84.200.17.249".to_string(), "seed.gold.invalid".to_string()],
    )
    .unwrap();
    let provider = SeedPeerProvider::new(Arc::new(table), Arc::new(TestnetParams))
        .with_resolver(Box::new(Offline));

    let err = provider.all_textual_peers(Duration::ZERO).unwrap_err();
    assert!(matches!(
        &err,
        PeerDiscoveryError::AddressResolution { entry, source }
            if entry == "seed.gold.invalid" && source.kind() == io::ErrorKind::NotConnected
    ));
}

#[test]
fn test_per_consumer_iteration_via_table() {
    let table = Arc::new(SeedTable::new(vec![PackedSeed::new(0x0100_007F)], vec![]).unwrap());
    let provider = SeedPeerProvider::new(Arc::clone(&table), Arc::new(TestnetParams));

    provider.next_peer().unwrap();
    assert_eq!(provider.remaining(), 0);

    let own_walk: Vec<SocketAddr> = table.packed_peers(provider.port()).collect();
    assert_eq!(own_walk, vec!["127.0.0.1:18121".parse::<SocketAddr>().unwrap()]);
}

#[cfg(feature = "config")]
#[test]
fn test_provider_from_toml_config() {
    use seed_peers::SeedConfig;

    let provider = SeedConfig::parse(
        r#"
        [network]
        port = 9333

        [seeds]
        packed = [0x0100007F]
        textual = ["10.0.0.7"]
        "#,
    )
    .unwrap()
    .into_provider();

    assert_eq!(provider.port(), 9333);
    assert_eq!(
        provider.next_peer().unwrap(),
        Some("127.0.0.1:9333".parse().unwrap())
    );
    assert_eq!(
        provider.all_textual_peers(Duration::ZERO).unwrap(),
        vec!["10.0.0.7:9333".parse::<SocketAddr>().unwrap()]
    );
}
