//! Axis list parsing for the command line
//!
//! Accepts comma separated entries of the form `LABEL` or `LABEL:LENGTH`,
//! e.g. `X:512,Y:512,U:5,Time:4`. A missing length means 1.

use lazy_static::lazy_static;
use regex::Regex;

use crate::axes::AxisLabel;
use crate::plane::{PlaneError, PlaneResult};

lazy_static! {
    static ref AXIS_ENTRY: Regex = Regex::new(r"^\s*([A-Za-z][A-Za-z0-9_]*)\s*(?::\s*(\d+))?\s*$").unwrap();
}

/// Parse an axis list into labels and lengths
pub fn parse_axis_list(list: &str) -> PlaneResult<(Vec<AxisLabel>, Vec<u64>)> {
    let mut labels = Vec::new();
    let mut lengths = Vec::new();

    for entry in list.split(',').filter(|e| !e.trim().is_empty()) {
        let caps = AXIS_ENTRY
            .captures(entry)
            .ok_or_else(|| PlaneError::GenericError(format!("Invalid axis entry: '{}'", entry.trim())))?;

        let length = match caps.get(2) {
            Some(m) => m.as_str().parse::<u64>().map_err(|e| {
                PlaneError::GenericError(format!("Invalid axis length '{}': {}", m.as_str(), e))
            })?,
            None => 1,
        };
        if length == 0 {
            return Err(PlaneError::GenericError(format!(
                "Axis '{}' has zero length",
                &caps[1]
            )));
        }

        labels.push(AxisLabel::from_label(&caps[1]));
        lengths.push(length);
    }

    Ok((labels, lengths))
}

/// Parse a `WxH` pair
pub fn parse_dimensions(value: &str) -> PlaneResult<(i64, i64)> {
    let (w, h) = value
        .split_once(&['x', 'X'][..])
        .ok_or_else(|| PlaneError::GenericError(format!("Expected WIDTHxHEIGHT, got '{}'", value)))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<i64>()
            .map_err(|e| PlaneError::GenericError(format!("Invalid dimension '{}': {}", s.trim(), e)))
    };
    Ok((parse(w)?, parse(h)?))
}

/// Parse a region written as `x,y,width,height`
pub fn parse_region(value: &str) -> PlaneResult<[u32; 4]> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(PlaneError::GenericError(format!(
            "Region must be x,y,width,height, got '{}'",
            value
        )));
    }
    let mut out = [0u32; 4];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|e| PlaneError::GenericError(format!("Invalid region value '{}': {}", part, e)))?;
    }
    Ok(out)
}
