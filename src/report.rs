use std::fmt::Write;

use crate::pipeline::Snapshot;

const NO_DATA: &str = "No data available";

/// Console summary of a snapshot
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    match &snapshot.devices {
        Some(listing) => {
            let _ = writeln!(out, "Device Labels: {:?}", listing.names());
            for device in &listing.devices {
                let _ = writeln!(out, "  {} ({})", device.name, device.device_type);
            }
        }
        None => {
            let _ = writeln!(out, "Devices: {NO_DATA}");
        }
    }

    match &snapshot.things {
        Some(things) if things.is_empty() => {
            let _ = writeln!(out, "Things: none matched");
        }
        Some(things) => {
            for thing in things {
                let _ = writeln!(out, "Thing {} ({})", thing.name, thing.id);
                if thing.variables.is_empty() {
                    let _ = writeln!(out, "  {NO_DATA}");
                }
                for var in &thing.variables {
                    let _ = writeln!(
                        out,
                        "  {:<20} {:<10} {:<12} {}",
                        var.name, var.vtype, var.value, var.update_time
                    );
                }
            }
        }
        None => {
            let _ = writeln!(out, "Things: {NO_DATA}");
        }
    }

    out
}
