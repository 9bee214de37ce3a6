//! Metrics Calculator: status counts, averages, health, priority issues.
//!
//! One pass over nodes and one over pipes accumulates every figure.
//! Averages and health are unguarded: an empty collection yields NaN.
//! A `null` measurement adds zero to a sum; a missing one turns it NaN.

use serde::Serialize;
use wn_core::{Real, Status, fraction, mean};
use wn_network::{Network, Node, Pipe};

use crate::policy::PriorityPolicy;

/// Status tally for one asset collection.
///
/// `normal + faulty <= total`; other labels (including `unknown`) only
/// count toward `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub normal: usize,
    pub faulty: usize,
    pub total: usize,
}

impl StatusCounts {
    fn record(&mut self, status: &Status) {
        self.total += 1;
        if status.is_normal() {
            self.normal += 1;
        } else if status.is_faulty() {
            self.faulty += 1;
        }
    }

    /// Share of `normal` in `total` (NaN when empty).
    pub fn normal_fraction(&self) -> Real {
        fraction(self.normal, self.total)
    }
}

/// Dashboard statistics for a network.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMetrics<'a> {
    pub node_status_counts: StatusCounts,
    pub pipe_status_counts: StatusCounts,
    pub avg_pressure: Real,
    pub avg_flow_rate: Real,
    pub total_demand: Real,
    /// Mean of the normal-node and normal-pipe fractions, in percent.
    pub network_health: Real,
    pub high_priority_issues: usize,
    pub high_priority_nodes: Vec<&'a Node>,
    pub high_priority_pipes: Vec<&'a Pipe>,
}

/// Compute metrics with the default thresholds (pressure 30, flow rate 1.5).
pub fn calculate_metrics(network: &Network) -> NetworkMetrics<'_> {
    calculate_metrics_with(network, &PriorityPolicy::default())
}

/// Compute metrics with explicit high-priority thresholds.
pub fn calculate_metrics_with<'a>(
    network: &'a Network,
    policy: &PriorityPolicy,
) -> NetworkMetrics<'a> {
    let mut node_status_counts = StatusCounts::default();
    let mut pressure_sum = 0.0;
    let mut total_demand = 0.0;
    let mut high_priority_nodes = Vec::new();

    for node in network.nodes() {
        node_status_counts.record(&node.status);
        let pressure = node.pressure.to_number();
        pressure_sum += pressure;
        total_demand += node.demand.to_number();
        if node.status.is_faulty() && pressure > policy.node_pressure_threshold {
            high_priority_nodes.push(node);
        }
    }

    let mut pipe_status_counts = StatusCounts::default();
    let mut flow_sum = 0.0;
    let mut high_priority_pipes = Vec::new();

    for pipe in network.pipes() {
        pipe_status_counts.record(&pipe.status);
        let flow_rate = pipe.flow_rate.to_number();
        flow_sum += flow_rate;
        if pipe.status.is_faulty() && flow_rate > policy.pipe_flow_rate_threshold {
            high_priority_pipes.push(pipe);
        }
    }

    let network_health = ((node_status_counts.normal_fraction()
        + pipe_status_counts.normal_fraction())
        / 2.0)
        * 100.0;

    let metrics = NetworkMetrics {
        node_status_counts,
        pipe_status_counts,
        avg_pressure: mean(pressure_sum, node_status_counts.total),
        avg_flow_rate: mean(flow_sum, pipe_status_counts.total),
        total_demand,
        network_health,
        high_priority_issues: high_priority_nodes.len() + high_priority_pipes.len(),
        high_priority_nodes,
        high_priority_pipes,
    };

    tracing::debug!(
        nodes = node_status_counts.total,
        pipes = pipe_status_counts.total,
        network_health = metrics.network_health,
        high_priority_issues = metrics.high_priority_issues,
        "calculated network metrics"
    );

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use wn_core::Measure;

    fn node(pressure: Option<f64>, demand: Option<f64>, status: Option<&str>) -> Node {
        Node {
            pressure: pressure.map_or(Measure::Absent, Measure::Value),
            demand: demand.map_or(Measure::Absent, Measure::Value),
            status: Status::normalize(status),
            ..Node::default()
        }
    }

    fn pipe(flow_rate: Option<f64>, status: Option<&str>) -> Pipe {
        Pipe {
            flow_rate: flow_rate.map_or(Measure::Absent, Measure::Value),
            status: Status::normalize(status),
            ..Pipe::default()
        }
    }

    #[test]
    fn two_nodes_one_pipe() {
        let net = Network::new(
            vec![
                node(Some(40.0), Some(1.0), Some("faulty")),
                node(Some(10.0), Some(2.0), Some("normal")),
            ],
            vec![pipe(Some(2.0), Some("faulty"))],
        );
        let m = calculate_metrics(&net);

        assert_eq!(
            m.node_status_counts,
            StatusCounts {
                normal: 1,
                faulty: 1,
                total: 2
            }
        );
        assert_eq!(
            m.pipe_status_counts,
            StatusCounts {
                normal: 0,
                faulty: 1,
                total: 1
            }
        );
        assert_eq!(m.avg_pressure, 25.0);
        assert_eq!(m.avg_flow_rate, 2.0);
        assert_eq!(m.total_demand, 3.0);
        assert_eq!(m.network_health, 25.0);
        assert_eq!(m.high_priority_nodes.len(), 1);
        assert_eq!(m.high_priority_pipes.len(), 1);
        assert_eq!(m.high_priority_issues, 2);
    }

    #[test]
    fn thresholds_are_strict() {
        let net = Network::new(
            vec![node(Some(30.0), Some(0.0), Some("faulty"))],
            vec![pipe(Some(1.5), Some("faulty"))],
        );
        let m = calculate_metrics(&net);
        assert_eq!(m.high_priority_issues, 0);
    }

    #[test]
    fn only_faulty_assets_are_high_priority() {
        let net = Network::new(
            vec![node(Some(90.0), Some(0.0), Some("normal"))],
            vec![pipe(Some(9.0), Some("unknown"))],
        );
        assert_eq!(calculate_metrics(&net).high_priority_issues, 0);
    }

    #[test]
    fn empty_network_yields_nan_averages() {
        let net = Network::default();
        let m = calculate_metrics(&net);
        assert!(m.avg_pressure.is_nan());
        assert!(m.avg_flow_rate.is_nan());
        assert!(m.network_health.is_nan());
        assert_eq!(m.total_demand, 0.0);
        assert_eq!(m.high_priority_issues, 0);
    }

    #[test]
    fn missing_status_counts_toward_total_only() {
        let net = Network::new(
            vec![
                node(Some(1.0), Some(0.0), None),
                node(Some(1.0), Some(0.0), Some("Normal")),
            ],
            vec![],
        );
        let m = calculate_metrics(&net);
        assert_eq!(m.node_status_counts.normal, 1);
        assert_eq!(m.node_status_counts.faulty, 0);
        assert_eq!(m.node_status_counts.total, 2);
    }

    #[test]
    fn missing_measurement_poisons_average_but_not_filter() {
        let net = Network::new(
            vec![
                node(None, None, Some("faulty")),
                node(Some(50.0), Some(1.0), Some("faulty")),
            ],
            vec![],
        );
        let m = calculate_metrics(&net);
        assert!(m.avg_pressure.is_nan());
        assert!(m.total_demand.is_nan());
        assert_eq!(m.high_priority_nodes.len(), 1);
        assert_eq!(m.high_priority_nodes[0].pressure, Measure::Value(50.0));
    }

    #[test]
    fn null_measurement_counts_as_zero() {
        let net = Network::new(
            vec![
                Node {
                    pressure: Measure::Null,
                    demand: Measure::Null,
                    status: Status::normalize(Some("faulty")),
                    ..Node::default()
                },
                node(Some(10.0), Some(2.0), Some("normal")),
            ],
            vec![Pipe {
                flow_rate: Measure::Null,
                status: Status::normalize(Some("faulty")),
                ..Pipe::default()
            }],
        );
        let m = calculate_metrics(&net);
        assert_eq!(m.avg_pressure, 5.0);
        assert_eq!(m.total_demand, 2.0);
        assert_eq!(m.avg_flow_rate, 0.0);
        assert_eq!(m.high_priority_issues, 0);
    }

    #[test]
    fn custom_policy_moves_thresholds() {
        let net = Network::new(
            vec![node(Some(25.0), Some(0.0), Some("faulty"))],
            vec![pipe(Some(1.0), Some("faulty"))],
        );
        let policy = PriorityPolicy {
            node_pressure_threshold: 20.0,
            pipe_flow_rate_threshold: 0.5,
        };
        assert_eq!(calculate_metrics(&net).high_priority_issues, 0);
        assert_eq!(calculate_metrics_with(&net, &policy).high_priority_issues, 2);
    }

    #[test]
    fn health_blends_both_fractions() {
        let net = Network::new(
            vec![
                node(Some(1.0), Some(0.0), Some("normal")),
                node(Some(1.0), Some(0.0), Some("normal")),
                node(Some(1.0), Some(0.0), Some("faulty")),
                node(Some(1.0), Some(0.0), Some("faulty")),
            ],
            vec![pipe(Some(1.0), Some("normal"))],
        );
        let m = calculate_metrics(&net);
        assert!((m.network_health - 75.0).abs() < 1e-9);
    }

    #[test]
    fn serializes_with_dashboard_names() {
        let net = Network::new(
            vec![node(Some(40.0), Some(1.0), Some("faulty"))],
            vec![],
        );
        let v = serde_json::to_value(calculate_metrics(&net)).unwrap();
        assert_eq!(v["nodeStatusCounts"]["faulty"], 1);
        assert_eq!(v["avgPressure"], 40.0);
        assert_eq!(v["highPriorityIssues"], 1);
        // NaN has no JSON form
        assert!(v["avgFlowRate"].is_null());
        assert_eq!(v["highPriorityNodes"][0]["status"], "faulty");
    }
}
