//! Terminal and machine-readable output.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use wn_core::Measure;
use wn_metrics::{FaultyAssets, NetworkMetrics, StatusCounts};
use wn_network::ReferenceReport;

use crate::error::CliResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml,
}

/// Machine-readable output wrapper.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<T: Serialize> {
    pub generated_at: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> Report<T> {
    pub fn now(data: T) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            data,
        }
    }
}

pub fn to_machine<T: Serialize>(format: Format, data: T) -> CliResult<String> {
    let report = Report::now(data);
    Ok(match format {
        Format::Yaml => serde_yaml::to_string(&report)?,
        Format::Json | Format::Text => serde_json::to_string_pretty(&report)?,
    })
}

struct Num(Measure);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Measure::Value(v) => write!(f, "{v:.2}"),
            Measure::Null => f.write_str("null"),
            Measure::Absent => f.write_str("-"),
        }
    }
}

fn id(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("?")
}

fn counts_line(f: &mut fmt::Formatter<'_>, label: &str, c: &StatusCounts) -> fmt::Result {
    writeln!(
        f,
        "{:<7}{} total, {} normal, {} faulty",
        label, c.total, c.normal, c.faulty
    )
}

/// Dashboard summary for the terminal.
pub struct MetricsText<'a, 'n>(pub &'a NetworkMetrics<'n>);

impl fmt::Display for MetricsText<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0;
        counts_line(f, "Nodes:", &m.node_status_counts)?;
        counts_line(f, "Pipes:", &m.pipe_status_counts)?;
        writeln!(f, "Average pressure:     {:.2}", m.avg_pressure)?;
        writeln!(f, "Average flow rate:    {:.2}", m.avg_flow_rate)?;
        writeln!(f, "Total demand:         {:.2}", m.total_demand)?;
        writeln!(f, "Network health:       {:.1}%", m.network_health)?;
        writeln!(f, "High-priority issues: {}", m.high_priority_issues)?;
        for node in &m.high_priority_nodes {
            writeln!(
                f,
                "  node {} (pressure {})",
                id(&node.node_id),
                Num(node.pressure)
            )?;
        }
        for pipe in &m.high_priority_pipes {
            writeln!(
                f,
                "  pipe {} (flow rate {})",
                id(&pipe.line_id),
                Num(pipe.flow_rate)
            )?;
        }
        Ok(())
    }
}

pub struct FaultsText<'a, 'n>(pub &'a FaultyAssets<'n>);

impl fmt::Display for FaultsText<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faults = self.0;
        if faults.is_empty() {
            return writeln!(f, "✓ No faulty assets");
        }
        writeln!(f, "Faulty assets: {}", faults.total())?;
        writeln!(f, "Faulty nodes: {}", faults.faulty_nodes.len())?;
        for node in &faults.faulty_nodes {
            write!(
                f,
                "  {} pressure={} demand={}",
                id(&node.node_id),
                Num(node.pressure),
                Num(node.demand)
            )?;
            if let Some(geom) = &node.geometry {
                let p = geom.position();
                write!(f, " at ({}, {})", p.x, p.y)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Faulty pipes: {}", faults.faulty_pipes.len())?;
        for pipe in &faults.faulty_pipes {
            write!(
                f,
                "  {} {} -> {} flow_rate={} velocity={}",
                id(&pipe.line_id),
                id(&pipe.start_node),
                id(&pipe.end_node_n),
                Num(pipe.flow_rate),
                Num(pipe.velocity)
            )?;
            if let Some(geom) = &pipe.geometry {
                write!(f, " ({} vertices)", geom.vertex_count())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub struct AuditText<'a>(pub &'a ReferenceReport);

impl fmt::Display for AuditText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        if report.is_clean() {
            return writeln!(f, "✓ All pipe endpoints resolve to nodes");
        }
        for d in &report.dangling {
            writeln!(
                f,
                "  pipe {} (#{}) {:?} end: {}",
                id(&d.line_id),
                d.pipe_index,
                d.end,
                d.node_ref.as_deref().unwrap_or("<not set>")
            )?;
        }
        for node_id in &report.duplicate_node_ids {
            writeln!(f, "  duplicate node id: {}", node_id)?;
        }
        Ok(())
    }
}
