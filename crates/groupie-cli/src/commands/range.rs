// SPDX-License-Identifier: Apache-2.0

//! Command handler for `groupie range`.

use colored::Colorize;
use groupie_runtime::{Handle, RangeChange, RangeOptions, RangeSelector};
use std::process;

/// Executes the `groupie range` command.
pub fn execute(
    id: &str,
    min: f64,
    max: f64,
    low: Option<f64>,
    high: Option<f64>,
    drags: &[String],
    json: bool,
) {
    if max < min {
        eprintln!(
            "{} --max ({}) must not be below --min ({}).",
            "✗".red().bold(),
            max,
            min
        );
        process::exit(1);
    }
    let initial_low = low.unwrap_or(min);
    let initial_high = high.unwrap_or(max);
    if initial_low > initial_high {
        eprintln!(
            "{} --low ({}) must not be above --high ({}).",
            "✗".red().bold(),
            initial_low,
            initial_high
        );
        process::exit(1);
    }

    let moves = match drags.iter().map(|d| parse_drag(d)).collect::<Result<Vec<_>, _>>() {
        Ok(moves) => moves,
        Err(message) => {
            eprintln!("{} {}", "✗".red().bold(), message);
            process::exit(1);
        }
    };

    let mut selector = RangeSelector::new(
        id,
        RangeOptions {
            min,
            max,
            initial_low,
            initial_high,
        },
    );
    print_change(&selector.current(), json);

    for (handle, x) in moves {
        let change = selector.begin_drag(handle).move_to(x, 0.0);
        print_change(&change, json);
    }
}

/// Parses `low:X` / `high:X` where X is a pointer offset from the track start.
fn parse_drag(spec: &str) -> Result<(Handle, f64), String> {
    let (handle, x) = spec
        .split_once(':')
        .ok_or_else(|| format!("invalid drag '{spec}' (expected low:X or high:X)"))?;
    let handle = match handle {
        "low" => Handle::Low,
        "high" => Handle::High,
        other => return Err(format!("unknown handle '{other}' (expected low or high)")),
    };
    let x: f64 = x
        .parse()
        .map_err(|_| format!("invalid pointer position '{x}' in drag '{spec}'"))?;
    Ok((handle, x))
}

fn print_change(change: &RangeChange, json: bool) {
    if json {
        match serde_json::to_string(change) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("{} Failed to encode change: {}", "✗".red().bold(), e),
        }
        return;
    }
    println!("{}: {} - {}", change.slider_id, change.low, change.high);
}
