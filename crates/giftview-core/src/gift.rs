//! Gift payload as served by `GET /api/gifts/{slug}`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Shown in place of a rarity the API did not provide.
pub const RARITY_PLACEHOLDER: &str = "\u{2014}";

/// Separator between a trait name and its rarity, and between "Buy" and the price.
pub const DASH_SEPARATOR: &str = " \u{2014} ";

/// A single gift record.
///
/// The shape is not validated: missing or `null` fields decode to their empty
/// defaults, scalar display fields are shown as text and a rarity that is not
/// a number counts as absent. Only a body that is not a JSON object is
/// rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Gift {
    #[serde(deserialize_with = "display_text")]
    pub title: String,
    #[serde(deserialize_with = "display_text")]
    pub image_url: String,
    #[serde(deserialize_with = "display_text")]
    pub model_name: String,
    #[serde(deserialize_with = "rarity")]
    pub model_rarity_per_mille: Option<f64>,
    #[serde(deserialize_with = "display_text")]
    pub symbol_name: String,
    #[serde(deserialize_with = "rarity")]
    pub symbol_rarity_per_mille: Option<f64>,
    #[serde(deserialize_with = "display_text")]
    pub backdrop_color: String,
    #[serde(deserialize_with = "rarity")]
    pub backdrop_rarity_per_mille: Option<f64>,
    /// Displayed verbatim, whatever JSON type the API sends
    pub price: Value,
}

impl Gift {
    /// The three named traits in display order.
    pub fn attributes(&self) -> [Attribute<'_>; 3] {
        [
            Attribute {
                label: "Model",
                value: &self.model_name,
                rarity_per_mille: self.model_rarity_per_mille,
            },
            Attribute {
                label: "Symbol",
                value: &self.symbol_name,
                rarity_per_mille: self.symbol_rarity_per_mille,
            },
            Attribute {
                label: "Backdrop",
                value: &self.backdrop_color,
                rarity_per_mille: self.backdrop_rarity_per_mille,
            },
        ]
    }

    /// Price text: strings without quotes, `null` as nothing, anything else as JSON.
    pub fn price_label(&self) -> String {
        value_text(&self.price)
    }

    /// Label of the purchase button, e.g. `Buy — 1.5 TON`.
    pub fn buy_label(&self) -> String {
        format!("Buy{DASH_SEPARATOR}{}", self.price_label())
    }
}

/// One trait line of the attribute block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attribute<'a> {
    pub label: &'static str,
    pub value: &'a str,
    pub rarity_per_mille: Option<f64>,
}

impl Attribute<'_> {
    /// Rendered line, e.g. `Model: Retro — 1.5%`.
    pub fn line(&self) -> String {
        format!(
            "{}: {}{DASH_SEPARATOR}{}",
            self.label,
            self.value,
            format_rarity(self.rarity_per_mille)
        )
    }
}

/// Formats a per-mille rarity as a percentage with one decimal place.
///
/// `Some(15.0)` becomes `1.5%`, `Some(500.0)` becomes `50.0%` and `None`
/// becomes the placeholder dash.
pub fn format_rarity(per_mille: Option<f64>) -> String {
    match per_mille {
        // `+ 0.0` folds negative zero into zero
        Some(n) => format!("{:.1}%", n / 10.0 + 0.0),
        None => RARITY_PLACEHOLDER.to_string(),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| value_text(&value))
}

fn rarity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| value.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rarity_formats_tenths_of_percent() {
        assert_eq!(format_rarity(Some(15.0)), "1.5%");
        assert_eq!(format_rarity(Some(500.0)), "50.0%");
        assert_eq!(format_rarity(Some(0.0)), "0.0%");
        assert_eq!(format_rarity(Some(1000.0)), "100.0%");
        assert_eq!(format_rarity(Some(7.0)), "0.7%");
    }

    #[test]
    fn negative_rarity_keeps_sign() {
        assert_eq!(format_rarity(Some(-5.0)), "-0.5%");
        assert_eq!(format_rarity(Some(-125.0)), "-12.5%");
        assert_eq!(format_rarity(Some(-0.0)), "0.0%");
    }

    #[test]
    fn fractional_rarity_rounds_to_one_decimal() {
        assert_eq!(format_rarity(Some(15.4)), "1.5%");
        assert_eq!(format_rarity(Some(12.3)), "1.2%");
    }

    #[test]
    fn missing_rarity_is_a_single_dash() {
        assert_eq!(format_rarity(None), "\u{2014}");
    }

    #[test]
    fn price_is_rendered_verbatim() {
        let mut gift = Gift {
            price: json!("1.5 TON"),
            ..Default::default()
        };
        assert_eq!(gift.price_label(), "1.5 TON");
        assert_eq!(gift.buy_label(), "Buy \u{2014} 1.5 TON");

        gift.price = json!(42);
        assert_eq!(gift.price_label(), "42");

        gift.price = json!(2.75);
        assert_eq!(gift.price_label(), "2.75");

        gift.price = Value::Null;
        assert_eq!(gift.price_label(), "");
    }

    #[test]
    fn missing_fields_decode_to_defaults() {
        let gift: Gift = serde_json::from_str(r#"{"title":"Lamp"}"#).unwrap();
        assert_eq!(gift.title, "Lamp");
        assert_eq!(gift.image_url, "");
        assert_eq!(gift.model_rarity_per_mille, None);
        assert_eq!(gift.price, Value::Null);
    }

    #[test]
    fn null_fields_decode_to_defaults() {
        let gift: Gift = serde_json::from_str(
            r#"{"title":"Gift","image_url":null,"model_name":null,"model_rarity_per_mille":null,
                "symbol_name":null,"backdrop_color":null,"backdrop_rarity_per_mille":null,
                "price":"9.9 TON"}"#,
        )
        .unwrap();
        assert_eq!(gift.title, "Gift");
        assert_eq!(gift.backdrop_color, "");
        assert_eq!(gift.model_rarity_per_mille, None);
        assert_eq!(gift.attributes()[2].line(), "Backdrop:  \u{2014} \u{2014}");
    }

    #[test]
    fn any_json_number_is_a_rarity() {
        let gift: Gift = serde_json::from_str(
            r#"{"model_rarity_per_mille":15.0,"symbol_rarity_per_mille":7,"backdrop_rarity_per_mille":"lots"}"#,
        )
        .unwrap();
        assert_eq!(format_rarity(gift.model_rarity_per_mille), "1.5%");
        assert_eq!(format_rarity(gift.symbol_rarity_per_mille), "0.7%");
        assert_eq!(gift.backdrop_rarity_per_mille, None);
    }

    #[test]
    fn scalar_display_fields_become_text() {
        let gift: Gift = serde_json::from_str(r#"{"title":42,"model_name":true}"#).unwrap();
        assert_eq!(gift.title, "42");
        assert_eq!(gift.model_name, "true");
    }

    #[test]
    fn attribute_lines_in_display_order() {
        let gift = Gift {
            model_name: "Retro".into(),
            model_rarity_per_mille: Some(15.0),
            symbol_name: "Star".into(),
            backdrop_color: "Blue".into(),
            backdrop_rarity_per_mille: Some(500.0),
            ..Default::default()
        };
        let lines: Vec<String> = gift.attributes().iter().map(Attribute::line).collect();
        assert_eq!(
            lines,
            vec![
                "Model: Retro \u{2014} 1.5%",
                "Symbol: Star \u{2014} \u{2014}",
                "Backdrop: Blue \u{2014} 50.0%",
            ]
        );
    }
}
