use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::*;
use firewallsync::{RuleTarget, SyncOutcome};

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Inbound Rule Table
--------------------------------------------------------------------------------------*/

pub fn rule_table(outcome: &SyncOutcome) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Protocol")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Ports")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Sources")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);

    for rule in &outcome.update.inbound_rules {
        table.add_row(vec![
            Cell::new(&rule.protocol),
            Cell::new(&rule.ports).add_attribute(Attribute::Bold),
            Cell::new(describe_target(&rule.sources)),
        ]);
    }

    // Right-align the Ports column
    let column = table.column_mut(1).expect("The second column exists");
    column.set_cell_alignment(CellAlignment::Right);

    println!("{table}");

    // Print rule-table summary
    let mut summary_table = Table::new();
    summary_table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary_table.add_row(vec![
        Cell::new(outcome.prefixes.len()),
        Cell::new("AWS IP prefixes applied"),
    ]);
    summary_table.add_row(vec![
        Cell::new(outcome.update.inbound_rules.len()),
        Cell::new("inbound rules"),
    ]);

    let summary_numbers_column = summary_table
        .column_mut(0)
        .expect("The first column exists");
    summary_numbers_column.set_cell_alignment(CellAlignment::Right);

    println!("{summary_table}");
}

/*--------------------------------------------------------------------------------------
  Rule Target Description
--------------------------------------------------------------------------------------*/

fn describe_target(target: &RuleTarget) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(addresses) = &target.addresses {
        parts.push(format!("{} addresses", addresses.len()));
    }
    if let Some(droplet_ids) = &target.droplet_ids {
        parts.push(format!("{} droplets", droplet_ids.len()));
    }
    if let Some(load_balancer_uids) = &target.load_balancer_uids {
        parts.push(format!("{} load balancers", load_balancer_uids.len()));
    }
    if let Some(kubernetes_ids) = &target.kubernetes_ids {
        parts.push(format!("{} kubernetes clusters", kubernetes_ids.len()));
    }
    if let Some(tags) = &target.tags {
        parts.push(format!("tags: {}", tags.join(", ")));
    }

    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
