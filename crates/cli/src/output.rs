// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable report output

use strata_core::{Migration, Resource};

/// One line per applied migration.
pub fn print_applied(resources: &[Resource]) {
    if resources.is_empty() {
        println!("nothing to apply; everything is up to date");
        return;
    }
    println!(
        "applied {} migration{}:",
        resources.len(),
        if resources.len() == 1 { "" } else { "s" }
    );
    for resource in resources {
        println!(
            "  {}  {}  {:?}",
            resource.version, resource.resource_name, resource.status
        );
    }
}

/// Full current state of one resource.
pub fn print_resource(resource: &Resource) {
    println!("topic:     {}", resource.resource_name);
    println!("version:   {}", resource.version);
    println!("status:    {:?}", resource.status);
    println!("timestamp: {}", resource.timestamp.to_rfc3339());
    if resource.attributes.is_empty() {
        return;
    }
    println!("attributes:");
    match serde_yaml::to_string(&resource.attributes) {
        Ok(rendered) => {
            for line in rendered.lines() {
                println!("  {line}");
            }
        }
        Err(_) => println!("  (unrenderable)"),
    }
}

/// One line per applied migration, oldest first.
pub fn print_history(resource_name: &str, history: &[Migration]) {
    println!("history of topic '{resource_name}':");
    for migration in history {
        let notes = migration.notes.as_deref().unwrap_or("-");
        println!(
            "  {}  {:<6}  {}  {}",
            migration.version,
            migration.operation.to_string(),
            migration.timestamp.to_rfc3339(),
            notes
        );
    }
}
