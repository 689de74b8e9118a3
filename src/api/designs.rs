//! AI-assisted jewelry design operations.
//!
//! The backend renders a jewelry concept image from a structured brief and
//! keeps the results per user. Generation can take several seconds; the
//! call simply awaits it like any other request.
//!
//! # Example
//!
//! ```rust,ignore
//! use jewelshop_api::api::designs::{self, DesignBrief};
//!
//! let brief = DesignBrief {
//!     kind: "Ring".to_string(),
//!     color: "rose".to_string(),
//!     shape: "twisted band".to_string(),
//!     material: "Gold".to_string(),
//!     karat: "18k".to_string(),
//!     gemstone_type: "Diamond".to_string(),
//!     gemstone_color: Some("white".to_string()),
//! };
//! let design = designs::generate(&client, &brief).await?;
//! println!("rendered at {:?}", design.generated_image_url);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};

use super::decode;

/// A structured brief describing the jewelry piece to render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesignBrief {
    /// Jewelry type: Ring, Necklace, Bracelet, Earrings, etc.
    #[serde(rename = "type")]
    pub kind: String,

    /// Primary color of the piece.
    pub color: String,

    /// Shape or style of the piece.
    pub shape: String,

    /// Material: Silver, Gold, Platinum, etc.
    pub material: String,

    /// Purity grade: 18k, 21k, 22k, 24k, etc.
    pub karat: String,

    /// Gemstone type: Diamond, Ruby, Emerald, Sapphire, or "None".
    #[serde(default = "default_gemstone_type")]
    pub gemstone_type: String,

    /// Color of the gemstone, if applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemstone_color: Option<String>,
}

fn default_gemstone_type() -> String {
    "None".to_string()
}

/// A generated design belonging to the current user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Design {
    /// The unique identifier of the design.
    pub id: i64,
    /// The user the design was generated for.
    pub user_id: i64,

    /// The brief the design was generated from, as the backend stored it.
    #[serde(default)]
    pub selected_options: Option<serde_json::Value>,

    /// Server-relative URL of the rendered image.
    #[serde(default)]
    pub generated_image_url: Option<String>,

    /// When the design was generated.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Generates a design from the given brief.
///
/// Sends `POST /api/ai/generate-design`.
///
/// # Errors
///
/// Returns [`HttpError::Response`] with status 500 when the backend's
/// image model is unconfigured or fails to produce an image.
pub async fn generate(client: &HttpClient, brief: &DesignBrief) -> Result<Design, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Post, "/api/ai/generate-design")
        .body(serde_json::to_value(brief)?)
        .body_type(DataType::Json)
        .build()?;

    let response = client.request(request).await?;
    decode(response)
}

/// Lists the current user's generated designs.
///
/// Sends `GET /api/ai/my-designs`.
///
/// # Errors
///
/// Returns [`HttpError`] for transport, decoding or backend failures.
pub async fn mine(client: &HttpClient) -> Result<Vec<Design>, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Get, "/api/ai/my-designs").build()?;

    let response = client.request(request).await?;
    decode(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_brief() -> DesignBrief {
        DesignBrief {
            kind: "Ring".to_string(),
            color: "rose".to_string(),
            shape: "twisted band".to_string(),
            material: "Gold".to_string(),
            karat: "18k".to_string(),
            gemstone_type: "Diamond".to_string(),
            gemstone_color: Some("white".to_string()),
        }
    }

    #[test]
    fn test_brief_serializes_kind_as_type() {
        let value = serde_json::to_value(sample_brief()).unwrap();

        assert_eq!(value["type"], "Ring");
        assert!(value.get("kind").is_none());
        assert_eq!(value["gemstone_color"], "white");
    }

    #[test]
    fn test_brief_omits_unset_gemstone_color() {
        let brief = DesignBrief {
            gemstone_color: None,
            gemstone_type: "None".to_string(),
            ..sample_brief()
        };

        let value = serde_json::to_value(brief).unwrap();
        assert!(value.get("gemstone_color").is_none());
        assert_eq!(value["gemstone_type"], "None");
    }

    #[test]
    fn test_brief_deserialization_defaults_gemstone_type() {
        let brief: DesignBrief = serde_json::from_value(json!({
            "type": "Necklace",
            "color": "yellow",
            "shape": "chain",
            "material": "Gold",
            "karat": "21k"
        }))
        .unwrap();

        assert_eq!(brief.kind, "Necklace");
        assert_eq!(brief.gemstone_type, "None");
    }

    #[test]
    fn test_design_deserialization_from_api_response() {
        let json = r#"{
            "id": 9,
            "user_id": 7,
            "selected_options": {"type": "Ring", "material": "Gold"},
            "generated_image_url": "/static/generated_designs/design_7_20240601_120000.png",
            "created_at": "2024-06-01T12:00:00Z"
        }"#;

        let design: Design = serde_json::from_str(json).unwrap();
        assert_eq!(design.id, 9);
        assert_eq!(design.selected_options.unwrap()["material"], "Gold");
        assert!(design
            .generated_image_url
            .unwrap()
            .contains("generated_designs"));
    }
}
