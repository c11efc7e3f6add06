use super::ReportSource;
use crate::core::{format_amount, group_thousands};
use crate::report::DashboardReport;
use anyhow::Result;
use std::path::PathBuf;

pub fn output_markdown(
    report: &DashboardReport,
    source: &ReportSource,
    output_file: Option<PathBuf>,
) -> Result<()> {
    super::emit(&format_markdown(report, source), output_file)
}

pub fn format_markdown(report: &DashboardReport, source: &ReportSource) -> String {
    let mut output = String::new();

    output.push_str("# Collections Campaign Report\n\n");
    output.push_str(&format!(
        "Source: `{}` · {} leads\n\n",
        source,
        group_thousands(report.kpis.total as i64)
    ));

    format_overview(&mut output, report);
    format_score(&mut output, report);
    format_funnel(&mut output, report);
    format_dispositions(&mut output, report);
    format_risks(&mut output, report);
    format_levers(&mut output, report);

    output
}

fn format_overview(output: &mut String, report: &DashboardReport) {
    let k = &report.kpis;
    output.push_str("## Campaign Overview\n\n");
    output.push_str("| Metric | Value |\n|---|---:|\n");
    let rows = [
        ("Total leads", group_thousands(k.total as i64)),
        ("Attempted leads", group_thousands(k.attempted_leads as i64)),
        ("PTP rate", format!("{:.1}% ({} PTPs)", k.ptp_pct, k.ptp_count)),
        (
            "Connection rate",
            format!("{:.1}% ({} connected)", k.connection_rate, k.connected_leads),
        ),
        ("Active leads", format!("{:.1}% ({})", k.active_pct, k.active_count)),
        ("Total spend", format!("₹{}", format_amount(k.total_spend))),
        ("Cost per PTP", format!("₹{:.0}", k.cost_per_ptp)),
        ("Cost per connection", format!("₹{:.2}", k.cost_per_connection)),
        ("Avg attempts per lead", format!("{:.1}", k.avg_attempts)),
        ("Attempt efficiency", format!("{:.1}%", k.attempt_efficiency)),
    ];
    for (name, value) in rows {
        output.push_str(&format!("| {name} | {value} |\n"));
    }
    output.push('\n');

    output.push_str("**Health:** ");
    let pills: Vec<String> = report
        .health
        .iter()
        .map(|h| format!("{} {} ({})", h.name, h.display_value(), h.status))
        .collect();
    output.push_str(&pills.join(" · "));
    output.push_str("\n\n");
}

fn format_score(output: &mut String, report: &DashboardReport) {
    let score = &report.score;
    output.push_str("## Campaign Health Score\n\n");
    output.push_str(&format!(
        "**{:.1} / 10** ({})\n\n",
        score.value, score.grade
    ));
    output.push_str("| Component | Contribution | Max |\n|---|---:|---:|\n");
    for component in &score.components {
        output.push_str(&format!(
            "| {} | {:.2} | {:.2} |\n",
            component.name, component.contribution, component.max_contribution
        ));
    }
    output.push('\n');
}

fn format_funnel(output: &mut String, report: &DashboardReport) {
    let funnel = &report.funnel;
    output.push_str("## Funnel\n\n");
    output.push_str("| Stage | Leads | % of total |\n|---|---:|---:|\n");
    for stage in &funnel.stages {
        output.push_str(&format!(
            "| {} | {} | {:.1}% |\n",
            stage.stage,
            group_thousands(stage.count as i64),
            funnel.share_of_initial(stage)
        ));
    }
    output.push('\n');

    output.push_str("| Transition | Lost | Drop-off |\n|---|---:|---:|\n");
    for drop in &funnel.drop_offs {
        output.push_str(&format!(
            "| {} | {} | {:.0}% ({}) |\n",
            drop.label,
            group_thousands(drop.lost),
            drop.pct,
            drop.severity
        ));
    }
    output.push('\n');
    output.push_str(&format!("> {}\n\n", funnel.leak_summary()));
}

fn format_dispositions(output: &mut String, report: &DashboardReport) {
    output.push_str("## Dispositions\n\n");
    output.push_str("| Disposition | Leads |\n|---|---:|\n");
    for (label, count) in report.kpis.dispositions_by_count() {
        output.push_str(&format!("| {} | {} |\n", label, group_thousands(count as i64)));
    }
    output.push('\n');
}

fn format_risks(output: &mut String, report: &DashboardReport) {
    output.push_str("## Risk Radar\n\n");
    for risk in &report.risks {
        output.push_str(&format!(
            "- **[{}] {}**: {}\n",
            risk.severity, risk.title, risk.body
        ));
    }
    output.push('\n');
}

fn format_levers(output: &mut String, report: &DashboardReport) {
    output.push_str("## Optimization Levers\n\n");
    for (i, lever) in report.levers.iter().enumerate() {
        output.push_str(&format!("{}. **{}**: {}\n", i + 1, lever.title, lever.body));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RecoverIqConfig;
    use crate::io::generate_demo_leads;
    use crate::report::build_report;

    #[test]
    fn test_markdown_sections_present() {
        let table = generate_demo_leads(120, 9).unwrap();
        let report = build_report(&table, &RecoverIqConfig::default()).unwrap();
        let md = format_markdown(&report, &ReportSource::Demo { rows: 120, seed: 9 });

        for heading in [
            "# Collections Campaign Report",
            "## Campaign Overview",
            "## Campaign Health Score",
            "## Funnel",
            "## Risk Radar",
            "## Optimization Levers",
        ] {
            assert!(md.contains(heading), "missing {heading}");
        }
        assert!(md.contains("| PTP Rate (40%) |"));
        assert!(md.contains("Total → Attempted"));
        assert!(md.contains(&format!("**{:.1} / 10**", report.score.value)));
    }
}
