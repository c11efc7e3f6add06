use super::ReportSource;
use crate::core::{format_amount, group_thousands};
use crate::formatting::{FormattingConfig, Painter};
use crate::report::DashboardReport;
use anyhow::Result;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use std::path::PathBuf;

pub fn output_terminal(
    report: &DashboardReport,
    source: &ReportSource,
    output_file: Option<PathBuf>,
    formatting_config: FormattingConfig,
) -> Result<()> {
    // Files never get ANSI escapes
    let config = if output_file.is_some() {
        FormattingConfig::plain()
    } else {
        formatting_config
    };
    super::emit(&format_terminal(report, source, config), output_file)
}

pub fn format_terminal(
    report: &DashboardReport,
    source: &ReportSource,
    config: FormattingConfig,
) -> String {
    let painter = Painter::new(config);
    let mut output = String::new();

    output.push_str(&painter.header("RECOVERIQ CAMPAIGN REPORT"));
    output.push('\n');
    output.push_str(&painter.dim(&format!(
        "{} · {} leads",
        source,
        group_thousands(report.kpis.total as i64)
    )));
    output.push_str("\n\n");

    format_health_row(&mut output, report, &painter);
    format_overview(&mut output, report, &painter, config);
    format_score(&mut output, report, &painter, config);
    format_funnel(&mut output, report, &painter, config);
    format_risks(&mut output, report, &painter);
    format_levers(&mut output, report, &painter);

    output
}

fn new_table(config: FormattingConfig) -> Table {
    let mut table = Table::new();
    table
        .load_preset(if config.glyphs { UTF8_FULL } else { ASCII_MARKDOWN })
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right(text: impl ToString) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn section(output: &mut String, painter: &Painter, number: u8, title: &str) {
    output.push_str(&painter.header(&format!("{number:02} {title}")));
    output.push('\n');
}

fn format_health_row(output: &mut String, report: &DashboardReport, painter: &Painter) {
    let pills: Vec<String> = report
        .health
        .iter()
        .map(|h| {
            let text = format!(
                "{} {}: {}",
                painter.status_marker(h.status),
                h.name,
                h.display_value()
            );
            painter.status(h.status, &text)
        })
        .collect();
    output.push_str(&pills.join("  "));
    output.push_str("\n\n");
}

fn format_overview(
    output: &mut String,
    report: &DashboardReport,
    painter: &Painter,
    config: FormattingConfig,
) {
    let k = &report.kpis;
    section(output, painter, 1, "Campaign Overview");

    let mut table = new_table(config);
    table.set_header(vec!["Metric", "Value", "Detail"]);
    table.add_row(vec![
        Cell::new("Total Leads"),
        right(group_thousands(k.total as i64)),
        Cell::new(format!("{} attempted", group_thousands(k.attempted_leads as i64))),
    ]);
    table.add_row(vec![
        Cell::new("PTP Rate"),
        right(format!("{:.1}%", k.ptp_pct)),
        Cell::new(format!("{} PTPs", group_thousands(k.ptp_count as i64))),
    ]);
    table.add_row(vec![
        Cell::new("Connection Rate"),
        right(format!("{:.1}%", k.connection_rate)),
        Cell::new(format!("{} connected", group_thousands(k.connected_leads as i64))),
    ]);
    table.add_row(vec![
        Cell::new("Cost per PTP"),
        right(format!("₹{:.0}", k.cost_per_ptp)),
        Cell::new(format!("Total ₹{}", format_amount(k.total_spend))),
    ]);
    table.add_row(vec![
        Cell::new("Active Leads"),
        right(format!("{:.1}%", k.active_pct)),
        Cell::new(format!("{} active", group_thousands(k.active_count as i64))),
    ]);
    table.add_row(vec![
        Cell::new("Avg Attempts/Lead"),
        right(format!("{:.1}", k.avg_attempts)),
        Cell::new(format!(
            "{:.1} connected / {:.1} not connected",
            k.avg_attempts_connected, k.avg_attempts_not_connected
        )),
    ]);
    table.add_row(vec![
        Cell::new("Cost per Connection"),
        right(format!("₹{:.2}", k.cost_per_connection)),
        Cell::new(format!(
            "₹{:.2}/lead · ₹{:.2}/attempted lead",
            k.cost_per_lead, k.cost_per_attempt
        )),
    ]);
    output.push_str(&table.to_string());
    output.push_str("\n\n");
}

fn format_score(
    output: &mut String,
    report: &DashboardReport,
    painter: &Painter,
    config: FormattingConfig,
) {
    let score = &report.score;
    section(output, painter, 2, "Campaign Health Score");
    output.push_str(&painter.grade(
        score.grade,
        &format!("{:.1} / 10  {}", score.value, score.grade),
    ));
    output.push('\n');

    let mut table = new_table(config);
    table.set_header(vec!["Component", "Sub-score", "Contribution", "Max"]);
    for component in &score.components {
        table.add_row(vec![
            Cell::new(&component.name),
            right(format!("{:.1}", component.sub_score)),
            right(format!("{:.2}", component.contribution)),
            right(format!("{:.2}", component.max_contribution)),
        ]);
    }
    output.push_str(&table.to_string());
    output.push_str("\n\n");
}

fn format_funnel(
    output: &mut String,
    report: &DashboardReport,
    painter: &Painter,
    config: FormattingConfig,
) {
    let funnel = &report.funnel;
    section(output, painter, 3, "Funnel Intelligence");

    let mut table = new_table(config);
    table.set_header(vec!["Stage", "Leads", "% of total"]);
    for stage in &funnel.stages {
        table.add_row(vec![
            Cell::new(&stage.stage),
            right(group_thousands(stage.count as i64)),
            right(format!("{:.1}%", funnel.share_of_initial(stage))),
        ]);
    }
    output.push_str(&table.to_string());
    output.push('\n');

    let arrow = painter.glyph("→", "->");
    for drop in &funnel.drop_offs {
        let line = format!(
            "  {:<24} -{:.0}% ({} lost)",
            drop.label.replace('→', arrow),
            drop.pct,
            group_thousands(drop.lost)
        );
        output.push_str(&painter.status(drop.severity, &line));
        output.push('\n');
    }
    output.push_str(&format!(
        "  {} {}\n",
        painter.bold("Critical drop-off:"),
        funnel.critical_leak.to_string().replace('→', arrow)
    ));
    output.push_str(&format!(
        "  {} {}\n\n",
        painter.bold("Secondary leak:"),
        funnel.secondary_leak.to_string().replace('→', arrow)
    ));

    section(output, painter, 4, "Disposition Mix");
    for (label, count) in report.kpis.dispositions_by_count() {
        output.push_str(&format!("  {:<24} {:>7}\n", label, group_thousands(count as i64)));
    }
    output.push('\n');
}

fn format_risks(output: &mut String, report: &DashboardReport, painter: &Painter) {
    section(output, painter, 5, "Risk Radar");
    for risk in &report.risks {
        output.push_str(&format!(
            "  {} {}\n",
            painter.severity(risk.severity, &format!("[{}]", risk.severity)),
            painter.bold(&risk.title)
        ));
        output.push_str(&format!("      {}\n", risk.body));
    }
    output.push('\n');
}

fn format_levers(output: &mut String, report: &DashboardReport, painter: &Painter) {
    section(output, painter, 6, "Top Optimization Levers");
    for (i, lever) in report.levers.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, painter.bold(&lever.title)));
        output.push_str(&format!("     {}\n", lever.body));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RecoverIqConfig;
    use crate::io::generate_demo_leads;
    use crate::report::build_report;

    #[test]
    fn test_plain_terminal_output_is_ascii_framed() {
        let table = generate_demo_leads(80, 11).unwrap();
        let report = build_report(&table, &RecoverIqConfig::default()).unwrap();
        let text = format_terminal(
            &report,
            &ReportSource::Demo { rows: 80, seed: 11 },
            FormattingConfig::plain(),
        );

        assert!(text.starts_with("RECOVERIQ CAMPAIGN REPORT\n"));
        assert!(text.contains("01 Campaign Overview"));
        assert!(text.contains("06 Top Optimization Levers"));
        assert!(text.contains("Total -> Attempted"));
        assert!(!text.contains('\u{1b}'), "plain output must not carry ANSI escapes");
        for risk in &report.risks {
            assert!(text.contains(&risk.title));
        }
    }
}
