//! The fixed jargon-to-plain-language substitution table.
//!
//! Immutable product vocabulary; applied literally to titles and content.
//! Multi-word terms come first so they win over their substrings.

/// Term substitutions, applied in order.
pub const JARGON_TABLE: &[(&str, &str)] = &[
    ("coefficient of variation", "spread relative to the average"),
    ("standard deviation", "typical spread"),
    ("correlation coefficient", "relationship strength"),
    ("feature importance", "driver ranking"),
    ("p-value", "chance the result is noise"),
    ("heteroscedasticity", "uneven spread"),
    ("multicollinearity", "overlapping drivers"),
    ("imputation", "filling in missing values"),
    ("cardinality", "number of distinct values"),
];

/// Replace every jargon term with its plain equivalent.
pub fn translate(text: &str) -> String {
    let mut result = text.to_string();
    for (term, plain) in JARGON_TABLE {
        result = result.replace(term, plain);
    }
    result
}
