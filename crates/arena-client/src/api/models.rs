use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User profile from GET /v2/me and embedded in channels and blocks.
///
/// Two users are equal when their ids match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub slug: String,
    pub username: String,
    pub initials: String,
    pub created_at: String,
    pub channel_count: u64,
    pub avatar_image: AvatarImage,
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvatarImage {
    pub thumb: String,
    pub display: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelStatus {
    Open,
    Closed,
    Private,
    Public,
}

/// Channel from GET /v2/channels/{id}.
///
/// Two channels are equal when their ids match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub status: Option<ChannelStatus>,
    /// Number of items in the channel.
    pub length: u64,
    #[serde(default)]
    pub contents: Option<Vec<Block>>,
    pub user: User,
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Channel {}

impl Hash for Channel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One page of channels from GET /v2/users/{id}/channels or /v2/search/channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channels {
    pub length: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub per: u32,
    pub channels: Vec<Channel>,
}

impl Channels {
    /// Whether a page after `current_page` exists.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// One page of blocks from GET /v2/channels/{id}/contents or /thumb.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelContents {
    pub contents: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseClass {
    Block,
    Channel,
    User,
}

/// Kind of a [`Block`].
///
/// The API does not enforce which optional block fields are filled for a
/// given class. In practice:
///
/// | Class | Populated |
/// |---|---|
/// | `Text` | `content` |
/// | `Image` | `image` (often `source`) |
/// | `Attachment` | `attachment`, usually `image` preview |
/// | `Link` | `source`, usually `image` preview |
/// | `Media` | `embed`, `source` |
/// | `Channel` | `length`, `user`, `status` |
/// | `User` | `user` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockClass {
    Text,
    Image,
    Attachment,
    Link,
    Channel,
    Media,
    User,
}

/// A channel item. `block_class` tells which optional fields to expect;
/// check it before relying on any of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ChannelStatus>,
    #[serde(default)]
    pub image: Option<BlockImage>,
    #[serde(default)]
    pub source: Option<BlockSource>,
    #[serde(default)]
    pub embed: Option<BlockEmbed>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub attachment: Option<Attachment>,
    #[serde(default)]
    pub base_class: Option<BaseClass>,
    #[serde(rename = "class", default)]
    pub block_class: Option<BlockClass>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub length: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockImage {
    pub filename: String,
    pub content_type: String,
    pub thumb: BlockImageData,
    pub square: BlockImageData,
    pub display: BlockImageData,
    pub large: BlockImageData,
    pub original: BlockImageData,
}

/// One size variant of a [`BlockImage`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockImageData {
    pub url: String,
    /// Human-readable size, e.g. `"1.2 MB"`.
    #[serde(default)]
    pub file_size_display: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockSource {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockEmbed {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub embed_type: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attachment {
    pub url: String,
    pub file_name: String,
    #[serde(rename = "extension")]
    pub file_extension: String,
    pub file_size_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub description: Option<String>,
}

/// Sort key for channel contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    #[default]
    Position,
}

impl Sort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sort::Position => "position",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "position" => Ok(Sort::Position),
            other => Err(format!("unknown sort '{other}' (expected 'position')")),
        }
    }
}

/// Sort direction for channel contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(format!("unknown direction '{other}' (expected 'asc' or 'desc')")),
        }
    }
}
