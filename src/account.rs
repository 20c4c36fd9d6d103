//! Account record columns and the missing-value predicate.

use crate::table::Cell;

pub const INDEX: &str = "№";
pub const PHONE_NUMBER: &str = "Phone Number";
pub const PASSWORD: &str = "Password";
pub const CLOUD_PASSWORD: &str = "Cloud Password";
pub const USERNAME: &str = "Username";
pub const TELEGRAM_NAME: &str = "Telegram Name";
pub const ACCESS_TOKEN: &str = "Access Token";
pub const REFRESH_TOKEN: &str = "Refresh Token";
pub const PROXY: &str = "Proxy";
pub const AUTH_TG_QUERY_LINK: &str = "Auth TG Query Link";

pub const ADD_COMMAND: &str = "Telegram Add Command";
pub const PROVIDER_TOKEN_COMMAND: &str = "Telegram Provider Token";

/// Header row written by the template generator.
pub const TEMPLATE_HEADERS: [&str; 8] = [
    INDEX,
    PHONE_NUMBER,
    PASSWORD,
    CLOUD_PASSWORD,
    USERNAME,
    ACCESS_TOKEN,
    REFRESH_TOKEN,
    PROXY,
];

/// Columns the command formatter reads.
pub const FORMATTER_INPUTS: [&str; 5] = [
    TELEGRAM_NAME,
    ACCESS_TOKEN,
    REFRESH_TOKEN,
    PROXY,
    AUTH_TG_QUERY_LINK,
];

/// Cell texts treated as null markers, matching common dataframe readers.
const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a field holds a usable value.
///
/// Absent, empty and null-marker cells are missing; numbers never are.
/// Marker matching is exact, so `" NaN "` counts as present.
pub fn is_present(field: Option<&Cell>) -> bool {
    match field {
        None => false,
        Some(Cell::Integer(_) | Cell::Number(_)) => true,
        Some(Cell::Text(text)) => !text.is_empty() && !NULL_MARKERS.contains(&text.as_str()),
    }
}

/// The formatter-relevant fields of one account row.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountRecord<'a> {
    pub telegram_name: Option<&'a Cell>,
    pub access_token: Option<&'a Cell>,
    pub refresh_token: Option<&'a Cell>,
    pub proxy: Option<&'a Cell>,
    pub auth_tg_query_link: Option<&'a Cell>,
}
