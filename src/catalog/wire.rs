/// Wire-format types for the show catalog REST service.
///
/// These structures mirror the JSON records exchanged with the companion
/// server. The server stores records verbatim, so the same shape is used
/// for both reading and creating shows.
use serde::{Deserialize, Serialize};

use super::Show;

/// A single show record as serialized by the companion server.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct WireShow {
    /// Numeric record identifier (0 for malformed records without one)
    #[serde(default)]
    pub id: u64,
    /// The show name
    pub name: String,
    /// The show code
    pub code: String,
    /// Image URL; the server stores an empty string for shows without one
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
}

impl From<WireShow> for Show {
    fn from(wire: WireShow) -> Self {
        Show {
            id: wire.id,
            name: wire.name,
            code: wire.code,
            image_url: if wire.image_url.is_empty() {
                None
            } else {
                Some(wire.image_url)
            },
        }
    }
}

impl From<&Show> for WireShow {
    fn from(show: &Show) -> Self {
        WireShow {
            id: show.id,
            name: show.name.clone(),
            code: show.code.clone(),
            image_url: show.image_url.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record_with_image() {
        let json = r#"{"id": 3, "name": "lone_wolf", "code": "L42",
                       "imageUrl": "http://localhost:3000/images/1.png"}"#;
        let wire: WireShow = serde_json::from_str(json).unwrap();
        let show = Show::from(wire);

        assert_eq!(show.id, 3);
        assert_eq!(show.name, "lone_wolf");
        assert_eq!(show.code, "L42");
        assert_eq!(
            show.image_url.as_deref(),
            Some("http://localhost:3000/images/1.png")
        );
    }

    #[test]
    fn test_empty_image_url_becomes_none() {
        let json = r#"{"id": 1, "name": "a", "code": "A1", "imageUrl": ""}"#;
        let wire: WireShow = serde_json::from_str(json).unwrap();
        assert_eq!(Show::from(wire).image_url, None);
    }

    #[test]
    fn test_missing_image_url_becomes_none() {
        let json = r#"{"id": 1, "name": "a", "code": "A1"}"#;
        let wire: WireShow = serde_json::from_str(json).unwrap();
        assert_eq!(Show::from(wire).image_url, None);
    }

    #[test]
    fn test_serialize_uses_wire_field_names() {
        let show = Show {
            id: 2,
            name: "beta".to_string(),
            code: "B7".to_string(),
            image_url: None,
        };
        let json = serde_json::to_value(WireShow::from(&show)).unwrap();

        // A show without an image serializes with an empty imageUrl string,
        // matching the records the server already holds.
        assert_eq!(json["id"], 2);
        assert_eq!(json["name"], "beta");
        assert_eq!(json["code"], "B7");
        assert_eq!(json["imageUrl"], "");
    }
}
