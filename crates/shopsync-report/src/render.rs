use shopsync_core::Snapshot;
use shopsync_validate::ValidationReport;

use crate::model::QueryTable;
use crate::reports::{category_summary, product_sales_report, top_customers_report};

/// Render a deterministic markdown report from a validation run.
///
/// The consistency section is labeled advisory so a reader never
/// mistakes its findings for hard failures.
pub fn render_validation_report(report: &ValidationReport) -> String {
    let mut lines = Vec::new();

    lines.push("# Data Validation Report".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Overall status: {}",
        if report.overall_valid {
            "all validations passed"
        } else {
            "issues found"
        }
    ));
    lines.push(String::new());

    for (name, section) in report.hard_sections() {
        lines.push(format!("## {name}"));
        lines.push(format!(
            "Status: {}",
            if section.valid { "valid" } else { "issues found" }
        ));
        for issue in &section.issues {
            lines.push(format!("- [{}] {}", issue.rule, issue.detail));
        }
        lines.push(String::new());
    }

    lines.push("## consistency (advisory)".to_string());
    lines.push(format!(
        "Status: {}",
        if report.consistency.valid {
            "consistent"
        } else {
            "observations"
        }
    ));
    for issue in &report.consistency.issues {
        lines.push(format!("- [{}] {}", issue.rule, issue.detail));
    }

    lines.join("\n")
}

/// Render a query result as a markdown table.
pub fn render_query_table(table: &QueryTable) -> String {
    let mut lines = Vec::new();

    lines.push(format!("# {}", table.title));
    lines.push(String::new());
    lines.push(format!("| {} |", table.columns.join(" | ")));
    lines.push(format!(
        "|{}|",
        table.columns.iter().map(|_| " --- ").collect::<Vec<_>>().join("|")
    ));
    for row in &table.rows {
        lines.push(format!("| {} |", row.join(" | ")));
    }
    lines.push(String::new());
    lines.push(format!("{} row(s)", table.rows.len()));

    lines.join("\n")
}

/// Render the combined business report: executive summary, product
/// sales, category summary, and top customers.
pub fn render_full_report(snapshot: &Snapshot) -> String {
    let mut lines = Vec::new();

    let total_revenue: f64 = snapshot.orders.iter().map(|o| o.revenue()).sum();

    lines.push("# Multi-Source Data Integration Report".to_string());
    lines.push(String::new());
    lines.push("## Executive summary".to_string());
    lines.push(format!("- total customers: {}", snapshot.customers.len()));
    lines.push(format!("- total products: {}", snapshot.products.len()));
    lines.push(format!("- total orders: {}", snapshot.orders.len()));
    lines.push(format!("- total revenue: {total_revenue:.2}"));
    lines.push(String::new());

    lines.push("## Product sales".to_string());
    lines.push("| product | category | orders | qty sold | revenue | avg order |".to_string());
    lines.push("| --- | --- | --- | --- | --- | --- |".to_string());
    for row in product_sales_report(snapshot) {
        lines.push(format!(
            "| {} | {} | {} | {} | {:.2} | {:.2} |",
            row.product_name,
            row.category,
            row.total_orders,
            row.total_quantity_sold,
            row.total_revenue,
            row.average_order_value
        ));
    }
    lines.push(String::new());

    lines.push("## Category summary".to_string());
    lines.push("| category | products | orders | qty sold | revenue |".to_string());
    lines.push("| --- | --- | --- | --- | --- |".to_string());
    for row in category_summary(snapshot) {
        lines.push(format!(
            "| {} | {} | {} | {} | {:.2} |",
            row.category,
            row.product_count,
            row.total_orders,
            row.total_quantity_sold,
            row.category_revenue
        ));
    }
    lines.push(String::new());

    lines.push("## Top customers".to_string());
    lines.push("| customer | email | orders | items | revenue |".to_string());
    lines.push("| --- | --- | --- | --- | --- |".to_string());
    for row in top_customers_report(snapshot, 10) {
        lines.push(format!(
            "| {} | {} | {} | {} | {:.2} |",
            row.customer_name, row.email, row.total_orders, row.total_items, row.total_revenue
        ));
    }

    lines.join("\n")
}
