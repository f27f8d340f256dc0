use routing_sim::algorithms::Algorithm;
use routing_sim::config::DemoConfig;
use routing_sim::network::Topology;
use routing_sim::{simulate, RoutingError};

fn distances(report: &routing_sim::report::RoutingReport, algorithm: Algorithm) -> Vec<(String, Option<f64>)> {
    report
        .shortest_paths_for(algorithm)
        .unwrap()
        .routes
        .iter()
        .map(|route| (route.destination.clone(), route.distance))
        .collect()
}

#[test]
fn sample_topology_end_to_end() {
    let config = DemoConfig::default();
    let topology = config.topology();

    let report = simulate(&topology, &config.source, &Algorithm::ALL).unwrap();

    let expected = vec![
        ("A".to_string(), Some(0.0)),
        ("B".to_string(), Some(1.0)),
        ("C".to_string(), Some(3.0)),
        ("D".to_string(), Some(6.0)),
    ];
    assert_eq!(distances(&report, Algorithm::Dijkstra), expected);
    assert_eq!(distances(&report, Algorithm::BellmanFord), expected);

    assert_eq!(report.distance_vectors.len(), 4);
    assert_eq!(report.link_states.len(), 4);
    assert_eq!(report.link_states[0].advertising_router, "A");
    assert_eq!(report.link_states[0].links.len(), 2);
}

#[test]
fn negative_weights_split_the_algorithms() {
    let topology: Topology = [
        ("A", "B", 4.0),
        ("A", "C", 1.0),
        ("C", "B", -2.0),
    ]
    .into_iter()
    .collect();

    assert!(matches!(
        simulate(&topology, "A", &Algorithm::ALL),
        Err(RoutingError::NegativeWeight { .. })
    ));

    let report = simulate(&topology, "A", &[Algorithm::BellmanFord]).unwrap();
    assert_eq!(
        distances(&report, Algorithm::BellmanFord),
        vec![
            ("A".to_string(), Some(0.0)),
            ("B".to_string(), Some(-1.0)),
            ("C".to_string(), Some(1.0)),
        ]
    );
}

#[test]
fn negative_cycle_aborts_the_run() {
    let mut topology = DemoConfig::default().topology();
    topology.add_edge("D", "B", -10.0);

    let err = simulate(&topology, "A", &[Algorithm::BellmanFord]).unwrap_err();
    assert!(matches!(err, RoutingError::NegativeCycle { .. }));
}

#[test]
fn unknown_source_is_reported() {
    let topology = DemoConfig::default().topology();
    assert_eq!(
        simulate(&topology, "Q", &Algorithm::ALL).unwrap_err(),
        RoutingError::UnknownNode("Q".to_string())
    );
}

#[test]
fn simulators_run_without_shortest_paths() {
    let topology = DemoConfig::default().topology();
    let report = simulate(&topology, "A", &[]).unwrap();
    assert!(report.shortest_paths.is_empty());
    assert_eq!(report.distance_vectors.len(), 4);
}

#[test]
fn unknown_source_is_reported_without_algorithms() {
    let topology = DemoConfig::default().topology();
    assert_eq!(
        simulate(&topology, "Q", &[]).unwrap_err(),
        RoutingError::UnknownNode("Q".to_string())
    );
}
