// SPDX-License-Identifier: GPL-3.0-only
use serde::Deserialize;

use crate::store::NewCafe;
use crate::validation::url_validator::validate_link;

/// Maximum stored length of the name, location, seats and price columns
pub const MAX_TEXT_LENGTH: usize = 250;

/// Raw `POST /add` form body. Every field is optional here so that missing
/// fields are reported together instead of failing on the first one.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AddCafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: Option<String>,
    pub can_take_calls: Option<String>,
    pub coffee_price: Option<String>,
}

impl AddCafeForm {
    /// Turn the form into an insertable cafe, or the list of problems found
    pub fn validate(self) -> Result<NewCafe, Vec<String>> {
        let mut problems = Vec::new();

        let name = required_text("name", self.name, &mut problems);
        let location = required_text("location", self.location, &mut problems);
        let seats = required_text("seats", self.seats, &mut problems);
        let map_url = required_link("map_url", self.map_url, &mut problems);
        let img_url = required_link("img_url", self.img_url, &mut problems);

        let has_toilet = checkbox("has_toilet", self.has_toilet, &mut problems);
        let has_wifi = checkbox("has_wifi", self.has_wifi, &mut problems);
        let has_sockets = checkbox("has_sockets", self.has_sockets, &mut problems);
        let can_take_calls = checkbox("can_take_calls", self.can_take_calls, &mut problems);

        let coffee_price = non_blank(self.coffee_price);
        if let Some(price) = &coffee_price {
            check_length("coffee_price", price, MAX_TEXT_LENGTH, &mut problems);
        }

        if !problems.is_empty() {
            return Err(problems);
        }

        Ok(NewCafe {
            name: name.unwrap_or_default(),
            map_url: map_url.unwrap_or_default(),
            img_url: img_url.unwrap_or_default(),
            location: location.unwrap_or_default(),
            seats: seats.unwrap_or_default(),
            has_toilet,
            has_wifi,
            has_sockets,
            can_take_calls,
            coffee_price,
        })
    }
}

/// Parse a checkbox-style boolean.
///
/// An absent or empty field is an unchecked box. Otherwise accepts
/// `true`/`on`/`yes`/`1` and `false`/`off`/`no`/`0`, ignoring case and
/// surrounding whitespace.
pub fn parse_checkbox(value: Option<&str>) -> Result<bool, String> {
    let Some(raw) = value else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "off" | "no" | "0" => Ok(false),
        "true" | "on" | "yes" | "1" => Ok(true),
        _ => Err(format!("'{}' is not a boolean", raw)),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_length(field: &str, value: &str, max: usize, problems: &mut Vec<String>) {
    if value.chars().count() > max {
        problems.push(format!("{} exceeds maximum length of {} characters", field, max));
    }
}

fn required_text(field: &str, value: Option<String>, problems: &mut Vec<String>) -> Option<String> {
    match non_blank(value) {
        Some(v) => {
            check_length(field, &v, MAX_TEXT_LENGTH, problems);
            Some(v)
        }
        None => {
            problems.push(format!("{} is required", field));
            None
        }
    }
}

fn required_link(field: &str, value: Option<String>, problems: &mut Vec<String>) -> Option<String> {
    match non_blank(value) {
        Some(v) => {
            if let Err(e) = validate_link(&v) {
                problems.push(format!("{} {}", field, e));
            }
            Some(v)
        }
        None => {
            problems.push(format!("{} is required", field));
            None
        }
    }
}

fn checkbox(field: &str, value: Option<String>, problems: &mut Vec<String>) -> bool {
    parse_checkbox(value.as_deref()).unwrap_or_else(|e| {
        problems.push(format!("{} {}", field, e));
        false
    })
}
