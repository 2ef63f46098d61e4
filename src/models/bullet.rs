use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Whether a bullet renders a glyph or a running number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletKind {
    Bullet,
    Number,
}

/// Bullet rendering options. Every field is optional; a bullet with none of
/// them set renders with the backend's default glyph.
///
/// Options the crate has no typed field for are kept in `extra` and written
/// back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletOptions {
    /// Glyph bullet or numbered list item.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<BulletKind>,

    /// Unicode code point of the glyph as four hex digits, e.g. `"25BA"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_code: Option<String>,

    /// Indentation of the bullet text, in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<f64>,

    /// Numbering scheme name understood by the backend (e.g. `"arabicPeriod"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_type: Option<String>,

    /// First number of a numbered list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_start_at: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BulletOptions {
    /// True when no bullet-specific option is set.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.character_code.is_none()
            && self.indent.is_none()
            && self.number_type.is_none()
            && self.number_start_at.is_none()
            && self.extra.is_empty()
    }
}

/// The bullet marker carried by the first run of a bullet paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum BulletMarker {
    /// Default bullet; serialized as the literal `true`.
    Default,
    /// Bullet with explicit rendering options.
    Options(BulletOptions),
}

impl Serialize for BulletMarker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BulletMarker::Default => serializer.serialize_bool(true),
            BulletMarker::Options(options) => options.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for BulletMarker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Options(BulletOptions),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(true) => Ok(BulletMarker::Default),
            Repr::Flag(false) => Err(de::Error::custom(
                "a bullet marker is either `true` or an options record",
            )),
            Repr::Options(options) => Ok(BulletMarker::Options(options)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_marker_wire_shape() {
        assert_eq!(serde_json::to_value(BulletMarker::Default).unwrap(), json!(true));

        let numbered = BulletMarker::Options(BulletOptions {
            kind: Some(BulletKind::Number),
            number_start_at: Some(3),
            ..Default::default()
        });
        assert_eq!(
            serde_json::to_value(&numbered).unwrap(),
            json!({"type": "number", "numberStartAt": 3})
        );
    }

    #[test]
    fn test_marker_reads_back() {
        let marker: BulletMarker = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(marker, BulletMarker::Default);
        assert!(serde_json::from_value::<BulletMarker>(json!(false)).is_err());

        let marker: BulletMarker = serde_json::from_value(json!({"indent": 15})).unwrap();
        assert_eq!(
            marker,
            BulletMarker::Options(BulletOptions {
                indent: Some(15.0),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_extra_options_round_trip() {
        let marker: BulletMarker =
            serde_json::from_value(json!({"indent": 10, "glyphColor": "FF0000"})).unwrap();
        let BulletMarker::Options(options) = &marker else {
            panic!("expected options");
        };
        assert_eq!(options.indent, Some(10.0));
        assert_eq!(options.extra.get("glyphColor"), Some(&json!("FF0000")));
        assert_eq!(
            serde_json::to_value(&marker).unwrap(),
            json!({"indent": 10.0, "glyphColor": "FF0000"})
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(BulletOptions::default().is_empty());
        assert!(!BulletOptions {
            character_code: Some("2713".to_string()),
            ..Default::default()
        }
        .is_empty());

        let mut extra = Map::new();
        extra.insert("glyphColor".to_string(), json!("red"));
        assert!(!BulletOptions {
            extra,
            ..Default::default()
        }
        .is_empty());
    }
}
