//! Wire model of a single item in a TikTok feed response.
//!
//! Every nested object and field is optional: the web API omits `stats` on
//! some promoted items, `music` on reposts, and `challenges` whenever a video
//! carries no hashtags. Unknown fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVideo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub author: Option<RawAuthor>,
    #[serde(default)]
    pub stats: Option<RawStats>,
    #[serde(default)]
    pub challenges: Option<Vec<RawChallenge>>,
    #[serde(default)]
    pub music: Option<RawMusic>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAuthor {
    #[serde(default)]
    pub unique_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub play_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub digg_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub share_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawChallenge {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMusic {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub play_url: Option<String>,
}

// Newer payloads send large counts as strings ("statsV2").
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
        Float(f64),
    }

    Ok(match Option::<Count>::deserialize(deserializer)? {
        Some(Count::Number(n)) => Some(n),
        Some(Count::Text(s)) => s.trim().parse().ok(),
        Some(Count::Float(f)) if f >= 0.0 => Some(f as u64),
        _ => None,
    })
}
